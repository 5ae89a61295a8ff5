use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use super::{
    format::format_properties,
    types::{
        mml_properties::MmlProperties,
        mml_search_response::{MmlSearchResponse, MmlSearchResponseFeature},
        mml_source::MmlSource,
    },
};
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
        template::{render, span, to_fields, HtmlTemplate, NAME_STYLE, SUBTITLE_STYLE},
    },
};

pub const DEFAULT_MML_SERVICE_URL: &str =
    "https://avoin-paikkatieto.maanmittauslaitos.fi/geocoding/v2/pelias/";

/// Geographic WGS84 coordinates, so results come back as plain longitude/latitude.
const CRS: &str = "EPSG:4326";
const LANG: &str = "fi";

#[derive(Clone)]
pub struct MmlConfig {
    pub service_url: String,
    pub api_key: Option<String>,
    /// Wire name of the source to search, `addresses` when unset.
    pub source: Option<String>,
    /// Applied last, so these may override any built-in parameter.
    pub geocoding_query_params: QueryParams,
    pub html_template: Option<HtmlTemplate<MmlProperties>>,
}

impl Default for MmlConfig {
    fn default() -> Self {
        MmlConfig {
            service_url: DEFAULT_MML_SERVICE_URL.to_string(),
            api_key: None,
            source: None,
            geocoding_query_params: QueryParams::new(),
            html_template: Some(Arc::new(default_html_template)),
        }
    }
}

impl MmlConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        MmlConfig {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = service_url.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_query_param(mut self, key: &str, value: impl ToString) -> Self {
        self.geocoding_query_params.set(key, value);
        self
    }

    pub fn with_html_template(
        mut self,
        template: impl Fn(&MmlProperties) -> String + Send + Sync + 'static,
    ) -> Self {
        self.html_template = Some(Arc::new(template));
        self
    }

    pub fn without_html_template(mut self) -> Self {
        self.html_template = None;
        self
    }
}

/// Geocoder for the National Land Survey of Finland (Maanmittauslaitos) geocoding API.
#[derive(Clone)]
pub struct MmlService {
    service_url: String,
    api_key: String,
    source: MmlSource,
    geocoding_query_params: QueryParams,
    html_template: Option<HtmlTemplate<MmlProperties>>,
    client: JsonClient,
}

impl MmlService {
    pub fn new(config: MmlConfig) -> Result<Self, GeocodingError> {
        Self::with_client(config, JsonClient::new()?)
    }

    pub fn with_client(config: MmlConfig, client: JsonClient) -> Result<Self, GeocodingError> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| GeocodingError::Configuration("MML API key is missing".to_string()))?;

        let source = match config.source.as_deref() {
            Some(source) => source.parse()?,
            None => MmlSource::default(),
        };

        Ok(Self {
            service_url: config.service_url,
            api_key,
            source,
            geocoding_query_params: config.geocoding_query_params,
            html_template: config.html_template,
            client,
        })
    }

    pub fn source(&self) -> MmlSource {
        self.source
    }

    fn search_params(&self, text: &str) -> QueryParams {
        QueryParams::new()
            .with("api-key", &self.api_key)
            .with("text", text)
            .with("sources", self.source)
            .with("crs", CRS)
            .with("lang", LANG)
            .merge(&self.geocoding_query_params)
    }

    fn to_result(
        &self,
        feature: &MmlSearchResponseFeature,
    ) -> Result<GeocodeResult, GeocodingError> {
        let properties = format_properties(self.source, &feature.properties)?;
        let center = feature_center(feature)?;

        Ok(GeocodeResult {
            html: self.html_template.as_ref().map(|template| template(&properties)),
            name: properties.name,
            icon: None,
            bbox: LatLngBounds::from_point(center),
            center,
            properties: None,
        })
    }
}

/// Features carry `[lon, lat]`; map clients want `(lat, lon)`.
fn feature_center(feature: &MmlSearchResponseFeature) -> Result<LatLng, GeocodingError> {
    match feature.geometry.coordinates.as_slice() {
        [lon, lat, ..] => Ok(LatLng::new(*lat, *lon)),
        other => Err(GeocodingError::MalformedResponse(format!(
            "Expected [lon, lat] coordinates, got {:?}",
            other
        ))),
    }
}

#[async_trait]
impl Geocoder for MmlService {
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeResult>, GeocodingError> {
        let query = require_query(query)?;

        let response: MmlSearchResponse = self
            .client
            .fetch_json(
                &endpoint(&self.service_url, "search"),
                &self.search_params(query),
            )
            .await?;

        let results = response
            .features
            .iter()
            .rev()
            .map(|feature| self.to_result(feature))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "MML {} search for {:?} returned {} results",
            self.source,
            query,
            results.len()
        );

        Ok(results)
    }

    async fn reverse(
        &self,
        _location: LatLng,
        _scale: f64,
    ) -> Result<Vec<GeocodeResult>, GeocodingError> {
        Err(GeocodingError::Unsupported(
            "reverse geocoding is not supported by the MML geocoder",
        ))
    }
}

pub fn default_html_template(properties: &MmlProperties) -> String {
    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    let mut parts = Vec::new();

    if !properties.name.is_empty() {
        parts.push(span(NAME_STYLE, "{name}"));
    }
    if present(&properties.region) {
        parts.push(span(SUBTITLE_STYLE, "{region}"));
    }
    if present(&properties.municipality) {
        if present(&properties.postal_code) {
            parts.push(span(SUBTITLE_STYLE, "{postalCode} {municipality}"));
        } else {
            parts.push(span(SUBTITLE_STYLE, "{municipality}"));
        }
    }
    if present(&properties.country) {
        parts.push(span(SUBTITLE_STYLE, "{country}"));
    }

    render(&parts.join("<br/>"), &to_fields(properties), true)
}
