use leptos::prelude::*;
use leptos_axum::AxumRouteListing;
use state::server::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use utils::api::ApiConfig;

pub const SENTRY_DSN_ENV: &str = "SENTRY_DSN";
pub const DEFAULT_LOG_FILTER: &str = "info,video_qa_web=debug,tower_http=info";

pub struct AppStateRes {
    pub app_state: AppState,
}

pub struct AppStateBuilder {
    leptos_options: LeptosOptions,
    routes: Vec<AxumRouteListing>,
}

impl AppStateBuilder {
    pub fn new(leptos_options: LeptosOptions, routes: Vec<AxumRouteListing>) -> Self {
        Self {
            leptos_options,
            routes,
        }
    }

    pub fn build(self) -> AppStateRes {
        let app_state = AppState {
            leptos_options: self.leptos_options,
            routes: self.routes,
            api: ApiConfig::default(),
        };

        AppStateRes { app_state }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides [`DEFAULT_LOG_FILTER`],
/// and `log` records from shared crates are forwarded into it.
pub fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .try_init()?;

    Ok(())
}

/// Sentry stays off unless a valid DSN is configured.
pub fn init_sentry() -> Option<sentry::ClientInitGuard> {
    let raw = std::env::var(SENTRY_DSN_ENV)
        .ok()
        .filter(|dsn| !dsn.trim().is_empty())?;
    let dsn: sentry::types::Dsn = match raw.trim().parse() {
        Ok(dsn) => dsn,
        Err(e) => {
            eprintln!("Ignoring invalid {SENTRY_DSN_ENV}: {e}");
            return None;
        }
    };

    Some(sentry::init(sentry::ClientOptions {
        dsn: Some(dsn),
        release: sentry::release_name!(),
        traces_sample_rate: 0.25,
        ..Default::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
