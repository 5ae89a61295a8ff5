use crate::{
    types::{
        app_state::AppState, geocode_result::GeocodeResult, geocoder_provider::GeocoderProvider,
    },
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetGeocodePayload {
    pub provider: GeocoderProvider,

    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponseData {
    pub results: Vec<GeocodeResult>,
}

#[derive(Serialize, Deserialize)]
pub struct GetGeocodeResponse {
    pub data: GetGeocodeResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_geocode(
    State(state): State<AppState>,
    ValidatedQuery(GetGeocodePayload { provider, text }): ValidatedQuery<GetGeocodePayload>,
) -> Result<Response, AppError> {
    let results = state
        .geocoder(provider)?
        .geocode(&text)
        .await
        .map_err(|e| {
            error!("Failed to geocode {:?} with {}: {}", text, provider, e);
            AppError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(GetGeocodeResponse {
            data: GetGeocodeResponseData { results },
        }),
    )
        .into_response())
}
