use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, info};

use crate::db::Link;
use crate::middleware::link_payload::LinkPayload;
use crate::{FridgeError, router::FridgeState};

pub const LINK_CREATED: &str = "Link created";
pub const LINK_DELETED: &str = "Link deleted";

#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
}

/// GET /links -> every stored link, in storage order.
pub async fn list_links(State(state): State<FridgeState>) -> Result<Json<Vec<Link>>, FridgeError> {
    let links = state.links.list().await.inspect_err(|e| {
        error!(error = %e, "failed to list links");
    })?;
    Ok(Json(links))
}

/// POST /links -> insert one row with the given url.
pub async fn create_link(
    State(state): State<FridgeState>,
    LinkPayload(body): LinkPayload,
) -> Result<Response, FridgeError> {
    let id = state.links.insert(&body.url).await.inspect_err(|e| {
        error!(error = %e, "failed to insert link");
    })?;
    info!(id, url = %body.url, "link created");
    Ok((StatusCode::CREATED, Json(StatusBody { status: LINK_CREATED })).into_response())
}

/// DELETE /links -> remove every row whose url matches exactly.
///
/// Answers 201 on success, including when nothing matched.
pub async fn delete_link(
    State(state): State<FridgeState>,
    LinkPayload(body): LinkPayload,
) -> Result<Response, FridgeError> {
    let affected = state.links.delete_by_url(&body.url).await.inspect_err(|e| {
        error!(error = %e, "failed to delete links");
    })?;
    info!(affected, url = %body.url, "links deleted");
    Ok((StatusCode::CREATED, Json(StatusBody { status: LINK_DELETED })).into_response())
}
