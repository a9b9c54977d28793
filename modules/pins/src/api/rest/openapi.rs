use axum::response::Json;
use utoipa::OpenApi;

use crate::api::rest::dto::{AddCommentReq, CommentDto, PinDto, SaverDto, TagDto};
use crate::api::rest::error::Problem;
use crate::api::rest::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_pin,
        handlers::save_pin,
        handlers::unsave_pin,
        handlers::add_comment,
        handlers::update_tags
    ),
    components(schemas(PinDto, SaverDto, CommentDto, TagDto, AddCommentReq, Problem)),
    tags((name = "pins", description = "Saving, commenting on and tagging pins"))
)]
pub struct PinsApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(PinsApiDoc::openapi())
}
