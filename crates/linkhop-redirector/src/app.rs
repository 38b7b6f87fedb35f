use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers::redirect_handler;
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(redirect_handler))
            .route("/{*short_code}", get(redirect_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
