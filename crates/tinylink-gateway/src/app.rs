use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::{create_url_handler, get_url_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    /// Builds the gateway router.
    ///
    /// There is no other top-level route: any single path segment other
    /// than `create-short-url` is looked up as a short code.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/create-short-url", post(create_url_handler))
            .route("/{short_code}", get(get_url_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
