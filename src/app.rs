use crate::{middlewares::auth::auth_middleware, routes::apply_routes, types::app_state::AppState};
use axum::{http::Method, middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

pub fn gen_app(state: AppState) -> Router {
    // Map pages on other origins call the service directly from the browser.
    let cors_middleware = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    apply_routes(Router::new())
        .route("/", get(root))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .layer(cors_middleware)
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub mml_server: mockito::ServerGuard,
    pub nominatim_server: mockito::ServerGuard,
}

/// App wired to mock MML and Nominatim servers, configured the way the binary is.
#[cfg(test)]
pub async fn gen_mock_app(auth_key: Option<&str>) -> MockApp {
    use crate::types::app_config::AppConfig;

    let mml_server = mockito::Server::new_async().await;
    let nominatim_server = mockito::Server::new_async().await;

    let mut vars = vec![
        ("MML_API_KEY", "mml-key".to_string()),
        ("MML_SERVICE_URL", mml_server.url()),
        ("NOMINATIM_SERVICE_URL", nominatim_server.url()),
    ];
    if let Some(auth_key) = auth_key {
        vars.push(("AUTH_KEY", auth_key.to_string()));
    }

    let config = AppConfig::from_lookup(|key| {
        vars.iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.clone())
    });
    let state = AppState::from_config(config).unwrap();

    MockApp {
        app: gen_app(state),
        mml_server,
        nominatim_server,
    }
}
