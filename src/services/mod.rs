pub mod geocoder;
pub mod geocoding_error;
pub mod mml_client;
pub mod nominatim_client;
