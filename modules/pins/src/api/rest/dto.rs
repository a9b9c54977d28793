use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::contract::model::{CommentView, PinView, SaverView, TagOp, TagView};

/// REST DTO for a requester-relative pin, in the legacy client's field names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PinDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub img_link: String,
    pub img_description: String,
    pub owner: SaverDto,
    pub saved_by: Vec<SaverDto>,
    pub owns: bool,
    pub has_saved: bool,
    pub comments: Vec<CommentDto>,
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaverDto {
    pub name: String,
    pub user_id: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub display_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub tag: String,
}

/// REST DTO for adding a comment
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCommentReq {
    pub comment: String,
}

/// Query for the tag endpoint: exactly one of `tag` (add) or `deleteId` (remove)
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UpdateTagsQuery {
    /// Text of a tag to add
    pub tag: Option<String>,
    /// Id of a tag to remove
    pub delete_id: Option<String>,
}

impl UpdateTagsQuery {
    pub fn into_op(self) -> Option<TagOp> {
        match (self.tag, self.delete_id) {
            (Some(tag), None) => Some(TagOp::Add(tag)),
            (None, Some(id)) => Some(TagOp::Remove(id)),
            _ => None,
        }
    }
}

// Conversion implementations between REST DTOs and contract models

impl From<SaverView> for SaverDto {
    fn from(v: SaverView) -> Self {
        Self {
            name: v.name,
            user_id: v.user_id,
            service: v.service,
        }
    }
}

impl From<CommentView> for CommentDto {
    fn from(v: CommentView) -> Self {
        Self {
            id: v.id,
            user_id: v.user_id,
            display_name: v.display_name,
            comment: v.comment,
            created_at: v.created_at,
        }
    }
}

impl From<TagView> for TagDto {
    fn from(v: TagView) -> Self {
        Self { id: v.id, tag: v.tag }
    }
}

impl From<PinView> for PinDto {
    fn from(v: PinView) -> Self {
        Self {
            id: v.id,
            img_link: v.image_link,
            img_description: v.image_description,
            owner: v.owner.into(),
            saved_by: v.saved_by.into_iter().map(SaverDto::from).collect(),
            owns: v.owns,
            has_saved: v.has_saved,
            comments: v.comments.into_iter().map(CommentDto::from).collect(),
            tags: v.tags.into_iter().map(TagDto::from).collect(),
        }
    }
}
