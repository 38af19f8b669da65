pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::parsing::handlers as parsing;
use crate::state::AppState;
use crate::widgets::handlers as widgets;

/// Room for multipart boundaries and part headers on top of the file itself.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state
        .config
        .max_upload_bytes
        .saturating_add(MULTIPART_OVERHEAD_BYTES);

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/v1/resumes/upload",
            post(parsing::handle_upload).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/resumes/parse", post(parsing::handle_parse_text))
        .route("/api/v1/resumes/generate", post(generation::handle_generate))
        // Widget API
        .route("/api/v1/widgets/countdown", get(widgets::handle_countdown))
        .route(
            "/api/v1/widgets/countdown/stream",
            get(widgets::handle_countdown_stream),
        )
        .route(
            "/api/v1/widgets/skeleton/:variant",
            get(widgets::handle_skeleton),
        )
        .route("/api/v1/widgets/action-bar", post(widgets::handle_action_bar))
        .with_state(state)
}
