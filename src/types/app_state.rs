use std::sync::Arc;

use axum::http::StatusCode;

use super::{app_config::AppConfig, geocoder_provider::GeocoderProvider};
use crate::{
    services::{
        geocoder::Geocoder, geocoding_error::GeocodingError, mml_client::mml_service::MmlService,
        nominatim_client::nominatim_service::NominatimService,
    },
    utils::{app_error::AppError, json_client::JsonClient},
};

#[derive(Clone)]
pub struct AppState {
    pub mml: Option<Arc<dyn Geocoder>>,
    pub nominatim: Arc<dyn Geocoder>,
    pub auth_key: Option<String>,
}

impl AppState {
    /// Builds every configured geocoder, failing on invalid provider settings.
    pub fn from_config(config: AppConfig) -> Result<Self, GeocodingError> {
        let client = JsonClient::new()?;

        let mml = config
            .mml
            .map(|mml| MmlService::with_client(mml, client.clone()))
            .transpose()?
            .map(|service| Arc::new(service) as Arc<dyn Geocoder>);

        Ok(AppState {
            mml,
            nominatim: Arc::new(NominatimService::with_client(config.nominatim, client)),
            auth_key: config.auth_key,
        })
    }

    pub fn geocoder(&self, provider: GeocoderProvider) -> Result<&Arc<dyn Geocoder>, AppError> {
        match provider {
            GeocoderProvider::Mml => self.mml.as_ref().ok_or_else(|| {
                AppError::new(StatusCode::NOT_FOUND, "Geocoder mml is not configured")
            }),
            GeocoderProvider::Nominatim => Ok(&self.nominatim),
        }
    }
}
