//! Router construction for the comment service

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use cb_core::comment::CommentStore;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CommentStore>,
}

/// Build the axum router with all routes and middleware
pub fn build_router(store: Arc<dyn CommentStore>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/comments",
            get(handlers::list_comments).post(handlers::create_comment),
        )
        .route(
            "/comments/:id",
            axum::routing::put(handlers::update_comment).delete(handlers::delete_comment),
        )
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(AppState { store })
}
