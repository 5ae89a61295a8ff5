use serde::{Deserialize, Serialize};

/// Properties of an MML feature after normalization, whichever source it came from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MmlProperties {
    pub name: String,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub municipality: Option<String>,
    pub continent: Option<String>,
}
