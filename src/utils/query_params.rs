use std::collections::BTreeMap;

use urlencoding::encode;

/// Query-string parameters keyed by name. Setting a key twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl ToString) {
        self.0.insert(key.to_string(), value.to_string());
    }

    /// Overlays `other` on top of these parameters.
    pub fn merge(mut self, other: &QueryParams) -> Self {
        for (key, value) in &other.0 {
            self.0.insert(key.clone(), value.clone());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", encode(key), encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_values_override() {
        let base = QueryParams::new().with("lang", "fi").with("text", "a");
        let extra = QueryParams::new().with("lang", "sv");

        let merged = base.merge(&extra);

        assert_eq!(merged.to_query_string(), "lang=sv&text=a");
    }

    #[test]
    fn values_are_percent_encoded() {
        let params = QueryParams::new()
            .with("api-key", "k&y")
            .with("text", "Mannerheimintie 1");

        assert_eq!(
            params.to_query_string(),
            "api-key=k%26y&text=Mannerheimintie%201"
        );
    }
}
