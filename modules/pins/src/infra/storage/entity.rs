use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored pin document. User references are kept as ids and expanded from
/// the user directory when a document is read back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PinDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub img_link: String,
    pub img_description: String,
    pub owner: String,
    #[serde(default)]
    pub saved_by: Vec<String>,
    #[serde(default)]
    pub comments: Vec<CommentDocument>,
    #[serde(default)]
    pub tags: Vec<TagDocument>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub user: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub tag: String,
}

/// Entry of the user directory used for expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub display_name: String,
    pub service: String,
}

/// Seed fixture: `{ "users": [...], "pins": [...] }`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<UserDocument>,
    #[serde(default)]
    pub pins: Vec<PinDocument>,
}
