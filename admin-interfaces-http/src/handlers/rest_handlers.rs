use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::Json;
use tracing::debug;

use admin_application::commands::bulk_action_commands;
use admin_application::queries::resource_queries;
use admin_application::AppState;
use admin_domain::{BulkActionRequest, BulkIn, BulkOutcome, ResourceView};

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn bulk_action(
    State(state): State<AppState>,
    Path((resource, action)): Path<(String, String)>,
    headers: HeaderMap,
    payload: Result<Json<BulkIn>, JsonRejection>,
) -> Result<Json<BulkOutcome>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let Json(payload) = payload?;
    debug!(%resource, %action, keys = payload.pk_list.len(), "bulk action requested");
    let request = BulkActionRequest::new(action, payload);
    let outcome =
        bulk_action_commands::run_bulk_action(&state, &resource, request, caller.as_ref()).await?;
    Ok(Json(outcome))
}

pub async fn resource_schema(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    headers: HeaderMap,
) -> Result<Json<ResourceView>, HttpError> {
    let caller = authorize(&state, &headers).await?;
    let view = resource_queries::describe_resource(&state, &resource, caller.as_ref()).await?;
    Ok(Json(view))
}
