use std::sync::Arc;

use tokio_util::task::TaskTracker;
use tracing::{debug, info, instrument, warn};

use crate::contract::model::{Pin, PinView, Requester, TagOp, ToggleAction, UserRef};
use crate::domain::error::DomainError;
use crate::domain::ports::TagCatalog;
use crate::domain::repo::{PinAppend, PinFieldSet, PinUpdate, PinsRepository, FULL_EXPANSION};
use crate::domain::view::ViewShaper;

/// Domain service for pin interactions: save toggles, comments and tags.
/// Depends only on the repository and catalog ports, not on infra types.
///
/// Each operation reads and then writes without holding anything across the
/// two steps. Two concurrent saves by the same user can therefore both pass
/// the duplicate check; the store only guarantees that each single update is
/// atomic.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn PinsRepository>,
    catalog: Arc<dyn TagCatalog>,
    shaper: ViewShaper,
    background: TaskTracker,
}

/// Configuration for the domain service
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub admin_user_id: Option<String>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        repo: Arc<dyn PinsRepository>,
        catalog: Arc<dyn TagCatalog>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            repo,
            catalog,
            shaper: ViewShaper::new(config.admin_user_id),
            background: TaskTracker::new(),
        }
    }

    #[instrument(
        name = "pins.service.get_pin",
        skip(self, requester),
        fields(pin_id = %pin_id, user_id = %requester.user_id)
    )]
    pub async fn get_pin(&self, pin_id: &str, requester: &Requester) -> Result<PinView, DomainError> {
        let pin = self.load(pin_id).await?;
        Ok(self.shaper.shape(&pin, requester))
    }

    #[instrument(
        name = "pins.service.pin_toggle",
        skip(self, requester),
        fields(pin_id = %pin_id, user_id = %requester.user_id, action = ?action)
    )]
    pub async fn pin_toggle(
        &self,
        pin_id: &str,
        requester: &Requester,
        action: ToggleAction,
    ) -> Result<PinView, DomainError> {
        let pin = self.load(pin_id).await?;

        let saved_by = match action {
            ToggleAction::Save => {
                if pin.saved_by.iter().any(|s| s.user_id == requester.user_id) {
                    debug!("Requester already saved this pin, declining");
                    return Err(DomainError::already_saved(pin_id, &requester.user_id));
                }
                let mut saved_by = pin.saved_by;
                saved_by.push(requester.identity());
                saved_by
            }
            ToggleAction::Unsave => pin
                .saved_by
                .into_iter()
                .filter(|s| s.user_id != requester.user_id)
                .collect::<Vec<UserRef>>(),
        };

        let updated = self
            .update(pin_id, PinUpdate::Set(PinFieldSet::SavedBy(saved_by)))
            .await?;
        info!(savers = updated.saved_by.len(), "Saver list updated");
        Ok(self.shaper.shape(&updated, requester))
    }

    #[instrument(
        name = "pins.service.add_comment",
        skip(self, requester, text),
        fields(pin_id = %pin_id, user_id = %requester.user_id)
    )]
    pub async fn add_comment(
        &self,
        pin_id: &str,
        requester: &Requester,
        text: String,
    ) -> Result<PinView, DomainError> {
        let append = PinAppend::Comment {
            author: requester.identity(),
            text,
        };
        let updated = self.update(pin_id, PinUpdate::Push(append)).await?;
        info!(comments = updated.comments.len(), "Comment added");
        Ok(self.shaper.shape(&updated, requester))
    }

    #[instrument(
        name = "pins.service.update_tags",
        skip(self, requester),
        fields(pin_id = %pin_id, user_id = %requester.user_id)
    )]
    pub async fn update_tags(
        &self,
        pin_id: &str,
        requester: &Requester,
        op: TagOp,
    ) -> Result<PinView, DomainError> {
        let pin = self.load(pin_id).await?;

        if pin.owner.user_id != requester.user_id {
            warn!(owner = %pin.owner.user_id, "Tag change by non-owner rejected");
            return Err(DomainError::not_owner(pin_id, &requester.user_id));
        }

        let update = match op {
            TagOp::Add(text) => {
                self.record_tag_detached(text.clone());
                PinUpdate::Push(PinAppend::Tag { text })
            }
            TagOp::Remove(tag_id) => {
                let tags = pin.tags.into_iter().filter(|t| t.id != tag_id).collect();
                PinUpdate::Set(PinFieldSet::Tags(tags))
            }
        };

        let updated = self.update(pin_id, update).await?;
        info!(tags = updated.tags.len(), "Tag list updated");
        Ok(self.shaper.shape(&updated, requester))
    }

    /// Stop accepting catalog writes and wait for the outstanding ones.
    pub async fn shutdown(&self) {
        self.background.close();
        debug!(pending = self.background.len(), "Draining tag catalog writes");
        self.background.wait().await;
    }

    // --- helpers ---

    async fn load(&self, pin_id: &str) -> Result<Pin, DomainError> {
        self.repo
            .find_by_id(pin_id)
            .await
            .map_err(|e| DomainError::repository(e.to_string()))?
            .ok_or_else(|| DomainError::pin_not_found(pin_id))
    }

    async fn update(&self, pin_id: &str, update: PinUpdate) -> Result<Pin, DomainError> {
        self.repo
            .update_by_id(pin_id, update, FULL_EXPANSION)
            .await
            .map_err(|e| DomainError::repository(e.to_string()))?
            .ok_or_else(|| DomainError::update_failed(pin_id))
    }

    /// Submit the catalog write without joining it; its result never reaches the caller.
    fn record_tag_detached(&self, text: String) {
        let catalog = Arc::clone(&self.catalog);
        self.background.spawn(async move {
            if let Err(e) = catalog.record(&text).await {
                warn!(tag = %text, "Tag catalog write failed (ignored): {}", e);
            }
        });
    }
}
