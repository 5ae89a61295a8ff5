use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_geocode;
mod get_reverse;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/geocode", get(get_geocode::get_geocode))
        .route("/reverse", get(get_reverse::get_reverse))
}
