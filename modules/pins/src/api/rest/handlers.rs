use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    response::Json,
    Extension,
};
use tracing::{info, warn};

use crate::api::rest::dto::{AddCommentReq, PinDto, UpdateTagsQuery};
use crate::api::rest::error::{from_parts, map_domain_error, ApiError, Problem};
use crate::api::rest::extract::AuthenticatedRequester;
use crate::contract::model::ToggleAction;
use crate::domain::service::Service;

/// Get a pin as the requester sees it
#[utoipa::path(
    get,
    path = "/pins/{id}",
    tag = "pins",
    params(("id" = String, Path, description = "Pin id")),
    responses(
        (status = 200, description = "Pin view", body = PinDto),
        (status = 404, description = "Pin not found"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn get_pin(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    AuthenticatedRequester(requester): AuthenticatedRequester,
    uri: Uri,
) -> Result<Json<PinDto>, ApiError> {
    svc.get_pin(&id, &requester)
        .await
        .map(|view| Json(view.into()))
        .map_err(|e| map_domain_error(e, uri.path()))
}

/// Save a pin to the requester's collection
#[utoipa::path(
    put,
    path = "/pins/{id}/save",
    tag = "pins",
    params(("id" = String, Path, description = "Pin id")),
    responses(
        (status = 200, description = "Pin saved", body = PinDto),
        (status = 404, description = "Pin not found or already saved"),
        (status = 409, description = "Pin vanished during the update"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn save_pin(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    AuthenticatedRequester(requester): AuthenticatedRequester,
    uri: Uri,
) -> Result<Json<PinDto>, ApiError> {
    info!("Saving pin {} for {}", id, requester.user_id);
    svc.pin_toggle(&id, &requester, ToggleAction::Save)
        .await
        .map(|view| Json(view.into()))
        .map_err(|e| map_domain_error(e, uri.path()))
}

/// Remove a pin from the requester's collection
#[utoipa::path(
    delete,
    path = "/pins/{id}/save",
    tag = "pins",
    params(("id" = String, Path, description = "Pin id")),
    responses(
        (status = 200, description = "Pin unsaved", body = PinDto),
        (status = 404, description = "Pin not found"),
        (status = 409, description = "Pin vanished during the update"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn unsave_pin(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    AuthenticatedRequester(requester): AuthenticatedRequester,
    uri: Uri,
) -> Result<Json<PinDto>, ApiError> {
    info!("Unsaving pin {} for {}", id, requester.user_id);
    svc.pin_toggle(&id, &requester, ToggleAction::Unsave)
        .await
        .map(|view| Json(view.into()))
        .map_err(|e| map_domain_error(e, uri.path()))
}

/// Comment on a pin
#[utoipa::path(
    put,
    path = "/pins/{id}/comments",
    tag = "pins",
    params(("id" = String, Path, description = "Pin id")),
    request_body = AddCommentReq,
    responses(
        (status = 200, description = "Pin with the new comment last", body = PinDto),
        (status = 409, description = "Pin not updated"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn add_comment(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    AuthenticatedRequester(requester): AuthenticatedRequester,
    uri: Uri,
    Json(req_body): Json<AddCommentReq>,
) -> Result<Json<PinDto>, ApiError> {
    info!("Adding comment to pin {} by {}", id, requester.user_id);
    // Comments skip the lookup, so an unknown pin surfaces as UpdateFailed
    // (409) here, not as the 404 the save and tag routes return.
    svc.add_comment(&id, &requester, req_body.comment)
        .await
        .map(|view| Json(view.into()))
        .map_err(|e| map_domain_error(e, uri.path()))
}

/// Add or remove a tag; only the pin owner may do this
#[utoipa::path(
    put,
    path = "/pins/{id}/tags",
    tag = "pins",
    params(("id" = String, Path, description = "Pin id"), UpdateTagsQuery),
    responses(
        (status = 200, description = "Pin with the updated tags", body = PinDto),
        (status = 400, description = "Neither or both of tag/deleteId given", body = Problem, content_type = "application/problem+json"),
        (status = 403, description = "Requester does not own the pin"),
        (status = 404, description = "Pin not found"),
        (status = 409, description = "Pin vanished during the update"),
        (status = 500, description = "Store failure", body = Problem, content_type = "application/problem+json")
    )
)]
pub async fn update_tags(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    Query(query): Query<UpdateTagsQuery>,
    AuthenticatedRequester(requester): AuthenticatedRequester,
    uri: Uri,
) -> Result<Json<PinDto>, ApiError> {
    let Some(op) = query.into_op() else {
        warn!("Tag update for pin {} without a single operation", id);
        return Err(from_parts(
            StatusCode::BAD_REQUEST,
            "PINS_TAG_QUERY",
            "Bad Request",
            "exactly one of `tag` or `deleteId` is required",
            uri.path(),
        )
        .into());
    };

    info!("Updating tags of pin {} by {}: {:?}", id, requester.user_id, op);
    svc.update_tags(&id, &requester, op)
        .await
        .map(|view| Json(view.into()))
        .map_err(|e| map_domain_error(e, uri.path()))
}
