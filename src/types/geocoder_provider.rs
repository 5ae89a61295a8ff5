use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GeocoderProvider {
    Mml,
    Nominatim,
}

impl std::fmt::Display for GeocoderProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeocoderProvider::Mml => write!(f, "mml"),
            GeocoderProvider::Nominatim => write!(f, "nominatim"),
        }
    }
}
