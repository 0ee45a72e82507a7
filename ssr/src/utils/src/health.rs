use leptos::prelude::*;
use leptos::server;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::api::{ApiConfig, RequestError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthReport {
    pub upload_endpoint: String,
    pub ask_endpoint: String,
}

fn describe(url: Result<Url, RequestError>) -> String {
    match url {
        Ok(url) => url.to_string(),
        Err(e) => e.to_string(),
    }
}

impl From<&ApiConfig> for HealthReport {
    fn from(config: &ApiConfig) -> Self {
        Self {
            upload_endpoint: describe(config.upload_url()),
            ask_endpoint: describe(config.ask_url()),
        }
    }
}

#[server(endpoint = "healthz")]
pub async fn healthz() -> Result<HealthReport, ServerFnError> {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    Ok(HealthReport::from(&config))
}
