use thiserror::Error;

/// Errors that are safe to expose to other modules.
///
/// The first three kinds carry no payload for the client; `Transport` keeps
/// the text of the failed store call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PinsError {
    #[error("Pin not found: {id}")]
    NotFound { id: String },

    #[error("Not allowed to modify pin {id}")]
    Forbidden { id: String },

    #[error("Pin {id} could not be updated")]
    UpdateFailed { id: String },

    #[error("Transport error: {message}")]
    Transport { message: String },
}

impl PinsError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn forbidden(id: impl Into<String>) -> Self {
        Self::Forbidden { id: id.into() }
    }

    pub fn update_failed(id: impl Into<String>) -> Self {
        Self::UpdateFailed { id: id.into() }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<crate::domain::error::DomainError> for PinsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            // A repeated save is reported exactly like a missing pin.
            PinNotFound { id } | AlreadySaved { id, .. } => Self::not_found(id),
            NotOwner { id, .. } => Self::forbidden(id),
            UpdateFailed { id } => Self::update_failed(id),
            Repository { message } | Catalog { message } => Self::transport(message),
        }
    }
}
