use async_trait::async_trait;

use crate::contract::{
    error::PinsError,
    model::{PinView, Requester, TagOp},
};

/// Public API trait for the pins module that other modules can use.
///
/// Every call answers with the requester's view of the pin after the change.
#[async_trait]
pub trait PinsApi: Send + Sync {
    /// Read a pin as the requester sees it
    async fn get_pin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError>;

    /// Add the requester to the pin's savers
    async fn pin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError>;

    /// Remove the requester from the pin's savers
    async fn unpin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError>;

    /// Append a comment authored by the requester
    async fn add_comment(
        &self,
        pin_id: &str,
        requester: &Requester,
        text: String,
    ) -> Result<PinView, PinsError>;

    /// Add or remove a tag; owner only
    async fn update_tags(
        &self,
        pin_id: &str,
        requester: &Requester,
        op: TagOp,
    ) -> Result<PinView, PinsError>;
}
