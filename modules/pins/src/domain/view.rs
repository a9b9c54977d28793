use crate::contract::model::{
    Comment, CommentView, Pin, PinView, Requester, SaverView, Tag, TagView, UserRef,
};

/// Turns a stored pin into the view a given requester receives.
///
/// Shaping is pure: the input pin is borrowed, list order is preserved and
/// equal inputs always give equal views.
#[derive(Debug, Clone, Default)]
pub struct ViewShaper {
    admin_user_id: Option<String>,
}

impl ViewShaper {
    /// `admin_user_id` is reported as owning every pin.
    pub fn new(admin_user_id: Option<String>) -> Self {
        Self {
            admin_user_id: admin_user_id.filter(|id| !id.is_empty()),
        }
    }

    pub fn shape(&self, pin: &Pin, requester: &Requester) -> PinView {
        let is_admin = self.admin_user_id.as_deref() == Some(requester.user_id.as_str());
        let owns = is_admin || pin.owner.user_id == requester.user_id;
        let has_saved = pin
            .saved_by
            .iter()
            .any(|saver| saver.user_id == requester.user_id);

        PinView {
            id: pin.id.clone(),
            image_link: pin.image_link.clone(),
            image_description: pin.image_description.clone(),
            owner: saver_view(&pin.owner),
            saved_by: pin.saved_by.iter().map(saver_view).collect(),
            owns,
            has_saved,
            comments: pin.comments.iter().map(comment_view).collect(),
            tags: pin.tags.iter().map(tag_view).collect(),
        }
    }
}

fn saver_view(user: &UserRef) -> SaverView {
    SaverView {
        name: user.display_name.clone(),
        user_id: user.user_id.clone(),
        service: user.service.clone(),
    }
}

fn comment_view(comment: &Comment) -> CommentView {
    CommentView {
        user_id: comment.author_user_id.clone(),
        display_name: comment.author_display_name.clone(),
        comment: comment.text.clone(),
        created_at: comment.created_at,
        id: comment.id.clone(),
    }
}

fn tag_view(tag: &Tag) -> TagView {
    TagView {
        id: tag.id.clone(),
        tag: tag.text.clone(),
    }
}
