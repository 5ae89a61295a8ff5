#![allow(non_snake_case)]
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Deserialize, Serialize)]
pub struct MmlSearchResponseFeatureGeometry {
    /// Longitude first, latitude second.
    pub coordinates: Vec<f64>,
}

#[derive(Deserialize, Serialize)]
pub struct MmlSearchResponseFeature {
    pub geometry: MmlSearchResponseFeatureGeometry,
    /// Shape depends on the searched source, see `MmlSource`.
    pub properties: Value,
}

#[derive(Deserialize, Serialize)]
pub struct MmlSearchResponse {
    pub features: Vec<MmlSearchResponseFeature>,
}

/// Properties of `addresses` and `interpolated-road-addresses` features.
#[derive(Deserialize, Serialize, Default)]
pub struct MmlAddressProperties {
    pub katunimi: Option<String>,
    pub katunumero: Option<String>,
    pub postinumero: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "label:municipality")]
    pub label_municipality: Option<String>,
    pub continent: Option<String>,
}

#[derive(Deserialize, Serialize)]
pub struct MmlPlaceName {
    pub spelling: String,
    pub placeNameCreationTime: Option<String>,
}

/// Properties of `geographic-names` features.
#[derive(Deserialize, Serialize, Default)]
pub struct MmlGeographicNameProperties {
    #[serde(default)]
    pub name: Vec<MmlPlaceName>,
    pub country: Option<String>,
    #[serde(rename = "label:region")]
    pub label_region: Option<String>,
    #[serde(rename = "label:municipality")]
    pub label_municipality: Option<String>,
    pub continent: Option<String>,
}

/// Properties of `cadastral-units` features.
#[derive(Deserialize, Serialize, Default)]
pub struct MmlCadastralUnitProperties {
    pub label: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "label:municipality")]
    pub label_municipality: Option<String>,
    pub continent: Option<String>,
}
