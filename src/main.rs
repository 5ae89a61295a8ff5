use geocoding_adapters::{
    app::gen_app,
    types::{app_config::AppConfig, app_state::AppState},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let listen_addr = config.listen_addr.clone();
    let state = AppState::from_config(config)?;

    info!(
        "Starting geocoding service on {} (mml: {})",
        listen_addr,
        if state.mml.is_some() { "enabled" } else { "disabled" }
    );

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    axum::serve(listener, gen_app(state)).await?;

    Ok(())
}
