use crate::{
    types::{
        app_state::AppState, geocode_result::GeocodeResult, geocoder_provider::GeocoderProvider,
        lat_lng::LatLng,
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
pub struct GetReversePayload {
    pub provider: GeocoderProvider,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be between -90 and 90"))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be between -180 and 180"))]
    pub lon: f64,

    /// Checked by the geocoder, which rejects non-positive scales.
    pub scale: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetReverseResponseData {
    pub results: Vec<GeocodeResult>,
}

#[derive(Serialize, Deserialize)]
pub struct GetReverseResponse {
    pub data: GetReverseResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_reverse(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetReversePayload>,
) -> Result<Response, AppError> {
    let location = LatLng::new(payload.lat, payload.lon);

    let results = state
        .geocoder(payload.provider)?
        .reverse(location, payload.scale)
        .await
        .map_err(|e| {
            error!(
                "Failed to reverse geocode {},{} with {}: {}",
                location.lat, location.lng, payload.provider, e
            );
            AppError::from(e)
        })?;

    Ok((
        StatusCode::OK,
        Json(GetReverseResponse {
            data: GetReverseResponseData { results },
        }),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::Request,
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn reverse_geocodes_with_nominatim() {
        let mut mock_app = gen_mock_app(None).await;

        let mock_server = mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::AllOf(vec![
                mockito::Matcher::UrlEncoded("lat".to_string(), "60.1".to_string()),
                mockito::Matcher::UrlEncoded("lon".to_string(), "24.9".to_string()),
                mockito::Matcher::UrlEncoded("zoom".to_string(), "4".to_string()),
            ]))
            .with_body(json!({"lat": "60.1", "lon": "24.9", "display_name": "X"}).to_string())
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=nominatim&lat=60.1&lon=24.9&scale=4096")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetReverseResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.results.len(), 1);
        assert_eq!(body.data.results[0].name, "X");
        assert_eq!(body.data.results[0].center, LatLng::new(60.1, 24.9));
    }

    #[tokio::test]
    async fn empty_reverse_result_is_ok() {
        let mut mock_app = gen_mock_app(None).await;

        let _mock = mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::Any)
            .with_body("{}")
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=nominatim&lat=0&lon=0&scale=256")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetReverseResponse = serde_json::from_slice(&body).unwrap();

        assert!(body.data.results.is_empty());
    }

    #[tokio::test]
    async fn mml_reverse_is_not_implemented() {
        let mut mock_app = gen_mock_app(None).await;

        let mock_server = mock_app
            .mml_server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=mml&lat=60.1&lon=24.9&scale=4096")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn accepts_fractional_scale() {
        let mut mock_app = gen_mock_app(None).await;

        let _mock = mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::Any)
            .with_body("{}")
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=nominatim&lat=0&lon=0&scale=0.5")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_non_positive_scale() {
        let mut mock_app = gen_mock_app(None).await;

        let mock_server = mock_app
            .nominatim_server
            .mock("GET", "/reverse")
            .match_query(mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=nominatim&lat=0&lon=0&scale=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert_async().await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rejects_out_of_range_latitude() {
        let mock_app = gen_mock_app(None).await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/reverse?provider=nominatim&lat=91&lon=24.9&scale=4096")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
