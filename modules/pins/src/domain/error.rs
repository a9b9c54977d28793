use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Pin not found: {id}")]
    PinNotFound { id: String },

    #[error("Pin {id} is already saved by user {user_id}")]
    AlreadySaved { id: String, user_id: String },

    #[error("User {user_id} does not own pin {id}")]
    NotOwner { id: String, user_id: String },

    #[error("Update of pin {id} returned no document")]
    UpdateFailed { id: String },

    #[error("Repository error: {message}")]
    Repository { message: String },

    #[error("Tag catalog error: {message}")]
    Catalog { message: String },
}

impl DomainError {
    pub fn pin_not_found(id: impl Into<String>) -> Self {
        Self::PinNotFound { id: id.into() }
    }

    pub fn already_saved(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::AlreadySaved {
            id: id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn not_owner(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self::NotOwner {
            id: id.into(),
            user_id: user_id.into(),
        }
    }

    pub fn update_failed(id: impl Into<String>) -> Self {
        Self::UpdateFailed { id: id.into() }
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::Repository {
            message: message.into(),
        }
    }

    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }
}
