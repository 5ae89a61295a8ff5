pub mod nominatim_service;
pub mod types;
