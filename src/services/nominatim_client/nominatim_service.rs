use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::types::nominatim_place::NominatimPlace;
use crate::{
    services::{
        geocoder::{require_query, Geocoder},
        geocoding_error::GeocodingError,
    },
    types::{
        geocode_result::GeocodeResult,
        lat_lng::{LatLng, LatLngBounds},
    },
    utils::{
        json_client::{endpoint, JsonClient},
        query_params::QueryParams,
        template::{render, span, HtmlTemplate, NAME_STYLE, SUBTITLE_STYLE},
    },
};

pub const DEFAULT_NOMINATIM_SERVICE_URL: &str = "https://nominatim.openstreetmap.org/";

const SEARCH_LIMIT: u32 = 5;

#[derive(Clone)]
pub struct NominatimConfig {
    pub service_url: String,
    pub geocoding_query_params: QueryParams,
    pub reverse_query_params: QueryParams,
    pub html_template: Option<HtmlTemplate<NominatimPlace>>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        NominatimConfig {
            service_url: DEFAULT_NOMINATIM_SERVICE_URL.to_string(),
            geocoding_query_params: QueryParams::new(),
            reverse_query_params: QueryParams::new(),
            html_template: Some(Arc::new(default_html_template)),
        }
    }
}

impl NominatimConfig {
    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn with_geocoding_query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.geocoding_query_params.set(key, value);
        self
    }

    pub fn with_reverse_query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.reverse_query_params.set(key, value);
        self
    }

    pub fn with_html_template(
        mut self,
        template: impl Fn(&NominatimPlace) -> String + Send + Sync + 'static,
    ) -> Self {
        self.html_template = Some(Arc::new(template));
        self
    }

    pub fn without_html_template(mut self) -> Self {
        self.html_template = None;
        self
    }
}

/// Geocoder for OpenStreetMap Nominatim.
#[derive(Clone)]
pub struct NominatimService {
    config: NominatimConfig,
    client: JsonClient,
}

impl NominatimService {
    pub fn new(config: NominatimConfig) -> Result<Self, GeocodingError> {
        Ok(Self::with_client(config, JsonClient::new()?))
    }

    pub fn with_client(config: NominatimConfig, client: JsonClient) -> Self {
        Self { config, client }
    }

    fn html(&self, place: &NominatimPlace) -> Option<String> {
        self.config
            .html_template
            .as_ref()
            .map(|template| template(place))
    }

    fn search_result(&self, raw: Value) -> Result<GeocodeResult, GeocodingError> {
        let place = parse_place(&raw)?;
        let bbox = parse_bounding_box(place.boundingbox.as_deref())?;
        let center = parse_center(&place)?.ok_or_else(|| {
            GeocodingError::MalformedResponse("Search result without lat/lon".to_string())
        })?;

        Ok(GeocodeResult {
            html: self.html(&place),
            name: place.display_name.unwrap_or_default(),
            icon: place.icon,
            bbox,
            center,
            properties: Some(raw),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimService {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodingError> {
        let query = require_query(query)?;

        let params = QueryParams::new()
            .with("q", query)
            .with("limit", SEARCH_LIMIT)
            .with("format", "json")
            .with("addressdetails", 1)
            .merge(&self.config.geocoding_query_params);

        let places: Vec<Value> = self
            .client
            .fetch_json(&endpoint(&self.config.service_url, "search"), &params)
            .await?;

        let results = places
            .into_iter()
            .rev()
            .map(|raw| self.search_result(raw))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "Nominatim search for {:?} returned {} results",
            query,
            results.len()
        );

        Ok(results)
    }

    async fn reverse(
        &self,
        location: LatLng,
        scale: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodingError> {
        let params = QueryParams::new()
            .with("lat", location.lat)
            .with("lon", location.lng)
            .with("zoom", zoom_for_scale(scale)?)
            .with("addressdetails", 1)
            .with("format", "json")
            .merge(&self.config.reverse_query_params);

        let raw: Value = self
            .client
            .fetch_json(&endpoint(&self.config.service_url, "reverse"), &params)
            .await?;

        if !raw.is_object() {
            return Ok(vec![]);
        }

        let place = parse_place(&raw)?;
        let Some(center) = parse_center(&place)? else {
            debug!(
                "Nominatim found no place at {},{}",
                location.lat, location.lng
            );
            return Ok(vec![]);
        };

        Ok(vec![GeocodeResult {
            html: self.html(&place),
            name: place.display_name.unwrap_or_default(),
            icon: None,
            bbox: LatLngBounds::from_point(center),
            center,
            properties: Some(raw),
        }])
    }
}

/// Map scale to a Nominatim zoom level, `round(log2(scale / 256))` with halves rounded up.
fn zoom_for_scale(scale: f64) -> Result<i32, GeocodingError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(GeocodingError::InvalidInput(format!(
            "scale must be a positive number, got {}",
            scale
        )));
    }

    Ok(((scale / 256.0).log2() + 0.5).floor() as i32)
}

fn parse_place(raw: &Value) -> Result<NominatimPlace, GeocodingError> {
    NominatimPlace::deserialize(raw)
        .map_err(|e| GeocodingError::MalformedResponse(format!("Invalid Nominatim place: {}", e)))
}

fn parse_coordinate(field: &str, value: &str) -> Result<f64, GeocodingError> {
    value.trim().parse::<f64>().map_err(|_| {
        GeocodingError::MalformedResponse(format!("Invalid {}: {:?}", field, value))
    })
}

/// `None` when either coordinate is absent or blank.
fn parse_center(place: &NominatimPlace) -> Result<Option<LatLng>, GeocodingError> {
    match (place.lat.as_deref(), place.lon.as_deref()) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => Ok(Some(LatLng::new(
            parse_coordinate("lat", lat)?,
            parse_coordinate("lon", lon)?,
        ))),
        _ => Ok(None),
    }
}

/// Nominatim orders the box as `[min_lat, max_lat, min_lon, max_lon]`.
fn parse_bounding_box(raw: Option<&[String]>) -> Result<LatLngBounds, GeocodingError> {
    let values = match raw {
        Some([a, b, c, d]) => [a, b, c, d]
            .into_iter()
            .map(|v| parse_coordinate("boundingbox", v))
            .collect::<Result<Vec<_>, _>>()?,
        other => {
            return Err(GeocodingError::MalformedResponse(format!(
                "Expected four boundingbox values, got {:?}",
                other
            )))
        }
    };

    Ok(LatLngBounds::new(
        LatLng::new(values[0], values[2]),
        LatLng::new(values[1], values[3]),
    ))
}

fn truthy(address: &Map<String, Value>, key: &str) -> bool {
    match address.get(key) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

pub fn default_html_template(place: &NominatimPlace) -> String {
    let address = &place.address;
    let any = |keys: &[&str]| keys.iter().any(|key| truthy(address, key));
    let mut parts: Vec<String> = Vec::new();

    if any(&["road", "building"]) {
        parts.push(span(NAME_STYLE, "{building} {road} {house_number}"));
    }

    if any(&["city", "town", "village", "hamlet"]) {
        let style = if parts.is_empty() { NAME_STYLE } else { SUBTITLE_STYLE };
        parts.push(span(style, "{postcode} {city} {town} {village} {hamlet}"));
    }

    if any(&["state", "country"]) {
        let style = if parts.is_empty() { NAME_STYLE } else { SUBTITLE_STYLE };
        parts.push(span(style, "{state} {country}"));
    }

    render(&parts.join("<br/>"), address, true)
}
