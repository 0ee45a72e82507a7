use leptos::prelude::*;
use utils::api::ApiConfig;

/// Registers the endpoint configuration for the current app, keeping one
/// that a server handler already provided.
pub fn provide_api_config() -> ApiConfig {
    match use_context::<ApiConfig>() {
        Some(config) => config,
        None => {
            let config = ApiConfig::default();
            provide_context(config.clone());
            config
        }
    }
}

pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_else(provide_api_config)
}
