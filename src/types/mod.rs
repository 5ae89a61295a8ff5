pub mod app_config;
pub mod app_state;
pub mod geocode_result;
pub mod geocoder_provider;
pub mod lat_lng;
