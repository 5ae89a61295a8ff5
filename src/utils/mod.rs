pub mod app_error;
pub mod json_client;
pub mod query_params;
pub mod template;
pub mod validated_query;
