use thiserror::Error;

/// Errors reported by the geocoding adapters.
///
/// An empty result is not an error: adapters resolve to an empty list instead.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Required configuration is absent or blank.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The MML source selector is not one of the known sources.
    #[error("Unknown MML source: {0}")]
    UnknownSource(String),

    /// The provider does not implement the requested operation.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A geographic name feature carried no name records to choose from.
    #[error("Place has no name records")]
    MissingPlaceName,

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Network, status or decoding failure reported by the HTTP client.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
