use axum::{
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Serialize;

use crate::services::geocoding_error::GeocodingError;

#[derive(Debug)]
pub struct AppError {
    pub code: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(code: StatusCode, message: &str) -> Self {
        AppError {
            code,
            message: message.to_string(),
        }
    }
}

impl From<GeocodingError> for AppError {
    fn from(e: GeocodingError) -> Self {
        let code = match e {
            GeocodingError::InvalidInput(_) | GeocodingError::UnknownSource(_) => {
                StatusCode::BAD_REQUEST
            }
            GeocodingError::Unsupported(_) => StatusCode::NOT_IMPLEMENTED,
            GeocodingError::Transport(_)
            | GeocodingError::MalformedResponse(_)
            | GeocodingError::MissingPlaceName => StatusCode::BAD_GATEWAY,
            GeocodingError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        AppError::new(code, &e.to_string())
    }
}

#[derive(Serialize)]
struct ResponseJson {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response<Body> {
        (
            self.code,
            Json(ResponseJson {
                message: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_geocoding_errors_to_status_codes() {
        let cases = [
            (
                GeocodingError::InvalidInput("empty".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                GeocodingError::Unsupported("reverse"),
                StatusCode::NOT_IMPLEMENTED,
            ),
            (GeocodingError::MissingPlaceName, StatusCode::BAD_GATEWAY),
            (
                GeocodingError::Configuration("no key".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, code) in cases {
            let message = error.to_string();
            let app_error = AppError::from(error);

            assert_eq!(app_error.code, code);
            assert_eq!(app_error.message, message);
        }
    }
}
