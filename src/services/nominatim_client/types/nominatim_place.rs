use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One Nominatim search or reverse result. Unknown fields are ignored here; the raw
/// record is carried separately as result properties.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct NominatimPlace {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub lat: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub lon: Option<String>,
    /// `[min_lat, max_lat, min_lon, max_lon]` as decimal strings.
    #[serde(default)]
    pub boundingbox: Option<Vec<String>>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub address: Map<String, Value>,
}

/// Nominatim sends coordinates as strings; accept plain numbers too.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}
