use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::services::geocoding_error::GeocodingError;

/// The source collections the MML geocoding API can search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MmlSource {
    #[default]
    Addresses,
    GeographicNames,
    InterpolatedRoadAddresses,
    CadastralUnits,
}

impl MmlSource {
    pub const ALL: [MmlSource; 4] = [
        MmlSource::Addresses,
        MmlSource::GeographicNames,
        MmlSource::InterpolatedRoadAddresses,
        MmlSource::CadastralUnits,
    ];

    /// The value sent as the `sources` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            MmlSource::Addresses => "addresses",
            MmlSource::GeographicNames => "geographic-names",
            MmlSource::InterpolatedRoadAddresses => "interpolated-road-addresses",
            MmlSource::CadastralUnits => "cadastral-units",
        }
    }
}

impl std::fmt::Display for MmlSource {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MmlSource {
    type Err = GeocodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MmlSource::ALL
            .into_iter()
            .find(|source| source.as_str() == s)
            .ok_or_else(|| GeocodingError::UnknownSource(s.to_string()))
    }
}
