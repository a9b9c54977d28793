use async_trait::async_trait;
use std::sync::Arc;

use crate::contract::{
    client::PinsApi,
    error::PinsError,
    model::{PinView, Requester, TagOp, ToggleAction},
};
use crate::domain::service::Service;

/// Local implementation of the PinsApi trait that delegates to the domain service
pub struct PinsLocalClient {
    service: Arc<Service>,
}

impl PinsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl PinsApi for PinsLocalClient {
    async fn get_pin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError> {
        self.service
            .get_pin(pin_id, requester)
            .await
            .map_err(Into::into)
    }

    async fn pin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError> {
        self.service
            .pin_toggle(pin_id, requester, ToggleAction::Save)
            .await
            .map_err(Into::into)
    }

    async fn unpin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, PinsError> {
        self.service
            .pin_toggle(pin_id, requester, ToggleAction::Unsave)
            .await
            .map_err(Into::into)
    }

    async fn add_comment(
        &self,
        pin_id: &str,
        requester: &Requester,
        text: String,
    ) -> Result<PinView, PinsError> {
        self.service
            .add_comment(pin_id, requester, text)
            .await
            .map_err(Into::into)
    }

    async fn update_tags(
        &self,
        pin_id: &str,
        requester: &Requester,
        op: TagOp,
    ) -> Result<PinView, PinsError> {
        self.service
            .update_tags(pin_id, requester, op)
            .await
            .map_err(Into::into)
    }
}
