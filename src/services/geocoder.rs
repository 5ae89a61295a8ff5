use async_trait::async_trait;

use super::geocoding_error::GeocodingError;
use crate::types::{geocode_result::GeocodeResult, lat_lng::LatLng};

/// The contract every provider adapter exposes.
///
/// Each call issues at most one upstream request and resolves exactly once.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolves free text to an ordered list of place candidates.
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodingError>;

    /// Resolves a coordinate to the nearest place.
    ///
    /// `scale` is the map scale (pixels per world width) the zoom level is derived from.
    async fn reverse(
        &self,
        location: LatLng,
        scale: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodingError>;
}

/// Rejects blank queries before any request is made. Accepted queries are returned
/// untouched.
pub(crate) fn require_query(query: &str) -> Result<&str, GeocodingError> {
    if query.trim().is_empty() {
        return Err(GeocodingError::InvalidInput(
            "query must not be empty".to_string(),
        ));
    }
    Ok(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(require_query(" Helsinki ").unwrap(), " Helsinki ");
    }

    #[test]
    fn rejects_blank_queries() {
        for query in ["", "   ", "\t\n"] {
            assert!(matches!(
                require_query(query),
                Err(GeocodingError::InvalidInput(_))
            ));
        }
    }
}
