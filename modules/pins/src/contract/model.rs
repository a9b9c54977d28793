use chrono::{DateTime, Utc};

/// A user identity as the document store knows it. References that were not
/// expanded by the store carry only `user_id`; the other fields are empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRef {
    pub user_id: String,
    pub display_name: String,
    pub service: String,
}

impl UserRef {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            service: service.into(),
        }
    }

    /// An unexpanded reference.
    pub fn bare(user_id: impl Into<String>) -> Self {
        Self::new(user_id, String::new(), String::new())
    }
}

/// The authenticated caller of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requester {
    pub user_id: String,
    pub display_name: String,
    pub service: String,
}

impl Requester {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            service: service.into(),
        }
    }

    /// The identity appended to a pin's saver list.
    pub fn identity(&self) -> UserRef {
        UserRef::new(&self.user_id, &self.display_name, &self.service)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author_user_id: String,
    pub author_display_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: String,
    pub text: String,
}

/// Persisted pin document.
///
/// `owner` is fixed at creation. `saved_by` holds each user id at most once,
/// `comments` only ever grows and `tags` is edited by the owner alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pin {
    pub id: String,
    pub image_link: String,
    pub image_description: String,
    pub owner: UserRef,
    pub saved_by: Vec<UserRef>,
    pub comments: Vec<Comment>,
    pub tags: Vec<Tag>,
}

/// Saver/owner entry of a [`PinView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaverView {
    pub name: String,
    pub user_id: String,
    pub service: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentView {
    pub user_id: String,
    pub display_name: String,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagView {
    pub id: String,
    pub tag: String,
}

/// A pin as seen by one particular requester. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinView {
    pub id: String,
    pub image_link: String,
    pub image_description: String,
    pub owner: SaverView,
    pub saved_by: Vec<SaverView>,
    pub owns: bool,
    pub has_saved: bool,
    pub comments: Vec<CommentView>,
    pub tags: Vec<TagView>,
}

/// Direction of a save toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Save,
    Unsave,
}

/// Tag list mutation requested by a pin owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagOp {
    Add(String),
    Remove(String),
}
