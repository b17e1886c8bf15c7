// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    http::{HeaderValue, header::InvalidHeaderValue},
    routing::{get, post},
};
use chat::{process_handler, root_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/process", post(process_handler))
        .layer(TraceLayer::new_for_http())
}

/// Single allowed origin with credentials. Methods and headers are mirrored
/// because wildcards are not valid alongside credentials.
pub fn cors_layer(client_url: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(client_url)?;
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
