//! Adapters that turn the MML (National Land Survey of Finland) and Nominatim geocoding
//! APIs into one result shape for map clients, plus an HTTP service exposing them.

pub mod app;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;

pub use services::{
    geocoder::Geocoder,
    geocoding_error::GeocodingError,
    mml_client::{
        mml_service::{MmlConfig, MmlService},
        types::mml_source::MmlSource,
    },
    nominatim_client::nominatim_service::{NominatimConfig, NominatimService},
};
pub use types::{
    geocode_result::GeocodeResult,
    lat_lng::{LatLng, LatLngBounds},
};
