use std::collections::HashMap;

use crate::contract::model::{Comment, Pin, Tag, UserRef};
use crate::domain::repo::Expand;
use crate::infra::storage::entity::{CommentDocument, PinDocument, TagDocument, UserDocument};

pub type UserDirectory = HashMap<String, UserDocument>;

/// Convert a stored document to a contract model, populating the user
/// references selected by `expand`. Unknown users stay bare.
pub fn document_to_contract(doc: &PinDocument, users: &UserDirectory, expand: &[Expand]) -> Pin {
    let resolve = |field: Expand, user_id: &str| {
        if expand.contains(&field) {
            expand_user(users, user_id)
        } else {
            UserRef::bare(user_id)
        }
    };

    Pin {
        id: doc.id.clone(),
        image_link: doc.img_link.clone(),
        image_description: doc.img_description.clone(),
        owner: resolve(Expand::Owner, doc.owner.as_str()),
        saved_by: doc
            .saved_by
            .iter()
            .map(|id| resolve(Expand::SavedBy, id.as_str()))
            .collect(),
        comments: doc
            .comments
            .iter()
            .map(|c| comment_to_contract(c, resolve(Expand::Comments, c.user.as_str())))
            .collect(),
        tags: doc.tags.iter().map(tag_to_contract).collect(),
    }
}

/// Directory entry for a populated identity. Bare references carry nothing
/// worth remembering.
pub fn user_to_document(user: &UserRef) -> Option<UserDocument> {
    if user.display_name.is_empty() && user.service.is_empty() {
        return None;
    }
    Some(UserDocument {
        id: user.user_id.clone(),
        display_name: user.display_name.clone(),
        service: user.service.clone(),
    })
}

pub fn tag_to_document(tag: &Tag) -> TagDocument {
    TagDocument {
        id: tag.id.clone(),
        tag: tag.text.clone(),
    }
}

fn expand_user(users: &UserDirectory, user_id: &str) -> UserRef {
    match users.get(user_id) {
        Some(u) => UserRef::new(&u.id, &u.display_name, &u.service),
        None => UserRef::bare(user_id),
    }
}

fn comment_to_contract(doc: &CommentDocument, author: UserRef) -> Comment {
    Comment {
        id: doc.id.clone(),
        author_user_id: author.user_id,
        author_display_name: author.display_name,
        text: doc.comment.clone(),
        created_at: doc.created_at,
    }
}

fn tag_to_contract(doc: &TagDocument) -> Tag {
    Tag {
        id: doc.id.clone(),
        text: doc.tag.clone(),
    }
}
