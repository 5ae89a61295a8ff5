pub mod mml_properties;
pub mod mml_search_response;
pub mod mml_source;
