pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::adjustment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_handler))
        .route("/api/ai/ajuste", post(handlers::handle_adjust))
        .route("/api/ai/ajuste/parse", post(handlers::handle_parse))
        .with_state(state)
}
