use std::env;

use crate::services::{
    mml_client::mml_service::MmlConfig, nominatim_client::nominatim_service::NominatimConfig,
};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

/// Settings for the HTTP service binary.
#[derive(Clone)]
pub struct AppConfig {
    pub listen_addr: String,
    /// `None` when no MML API key is configured; the provider is then unavailable.
    pub mml: Option<MmlConfig>,
    pub nominatim: NominatimConfig,
    pub auth_key: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mml = var("MML_API_KEY").map(|api_key| {
            let mut config = MmlConfig::new(api_key);
            if let Some(url) = var("MML_SERVICE_URL") {
                config = config.with_service_url(url);
            }
            if let Some(source) = var("MML_SOURCE") {
                config = config.with_source(source);
            }
            config
        });

        let mut nominatim = NominatimConfig::default();
        if let Some(url) = var("NOMINATIM_SERVICE_URL") {
            nominatim = nominatim.with_service_url(url);
        }

        AppConfig {
            listen_addr: var("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string()),
            mml,
            nominatim,
            auth_key: var("AUTH_KEY"),
        }
    }
}
