//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the websocket endpoint, the catalog REST API, and
//! the static media mounts under a single Axum router. Preset assets
//! and room uploads are served straight from their directories, so the
//! URLs in catalog responses resolve without any indirection.

pub mod catalog;
pub mod ws;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Build the application router. `max_upload_bytes` caps request
/// bodies, which in practice only the multipart uploads approach.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/sounds", get(catalog::list_sounds))
        .route("/api/upload", post(catalog::upload_sound))
        .route("/api/delete", delete(catalog::delete_sound))
        .route("/api/gifs", get(catalog::list_gifs))
        .route("/api/gifs/upload", post(catalog::upload_gif))
        .route("/api/gifs/url", post(catalog::add_gif_url))
        .route("/api/gifs/delete", delete(catalog::delete_gif))
        .route("/ws", get(ws::handle_ws))
        .route("/healthz", get(healthz))
        .nest_service("/uploads", ServeDir::new(&state.media.uploads_dir))
        .nest_service("/sounds", ServeDir::new(&state.media.sounds_dir))
        .nest_service("/gifs", ServeDir::new(&state.media.gifs_dir))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
