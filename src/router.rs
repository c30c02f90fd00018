use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::LinksStorage;
use crate::handlers::links::{create_link, delete_link, list_links};

/// Shared handler state, built once at startup.
#[derive(Clone)]
pub struct FridgeState {
    pub links: LinksStorage,
}

impl FridgeState {
    pub fn new(links: LinksStorage) -> Self {
        Self { links }
    }
}

pub fn fridge_router(state: FridgeState) -> Router {
    Router::new()
        .route(
            "/links",
            get(list_links).post(create_link).delete(delete_link),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
