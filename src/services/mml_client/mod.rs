pub mod format;
pub mod mml_service;
pub mod types;
