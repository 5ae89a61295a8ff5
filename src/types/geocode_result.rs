use serde::{Deserialize, Serialize};

use super::lat_lng::{LatLng, LatLngBounds};

/// One place candidate, in the shape map clients consume regardless of provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    pub bbox: LatLngBounds,
    pub center: LatLng,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub properties: Option<serde_json::Value>,
}
