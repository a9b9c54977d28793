use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::contract::model::{Pin, UserRef};
use crate::domain::repo::{Expand, PinAppend, PinFieldSet, PinUpdate, PinsRepository};
use crate::infra::storage::entity::{
    CommentDocument, PinDocument, SeedData, TagDocument, UserDocument,
};
use crate::infra::storage::mapper::{
    document_to_contract, tag_to_document, user_to_document, UserDirectory,
};

const ALL_FIELDS: &[Expand] = &[Expand::Owner, Expand::SavedBy, Expand::Comments];

/// Process-local document store for pins.
///
/// Each update runs while holding the map entry for that pin, so single
/// updates are atomic per document. Nothing spans two calls.
#[derive(Default)]
pub struct InMemoryPinsRepository {
    pins: DashMap<String, PinDocument>,
    users: RwLock<UserDirectory>,
}

impl InMemoryPinsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: SeedData) -> Self {
        let repo = Self::new();
        for user in seed.users {
            repo.register_user(user);
        }
        for pin in seed.pins {
            repo.insert_pin(pin);
        }
        repo
    }

    /// Build a store from a JSON fixture file.
    pub fn load_seed_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read seed file {}", path.display()))?;
        let seed: SeedData = serde_json::from_str(&raw)
            .with_context(|| format!("invalid seed file {}", path.display()))?;
        info!(
            users = seed.users.len(),
            pins = seed.pins.len(),
            "Loaded pin seed data from {}",
            path.display()
        );
        Ok(Self::from_seed(seed))
    }

    pub fn register_user(&self, user: UserDocument) {
        self.users.write().insert(user.id.clone(), user);
    }

    /// Insert or replace a whole document.
    pub fn insert_pin(&self, pin: PinDocument) {
        self.pins.insert(pin.id.clone(), pin);
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    /// Savers and comment authors written by the service are authenticated
    /// identities; keep them so later expansions can name them.
    fn remember_identities(&self, update: &PinUpdate) {
        let identities: &[UserRef] = match update {
            PinUpdate::Set(PinFieldSet::SavedBy(savers)) => savers,
            PinUpdate::Push(PinAppend::Comment { author, .. }) => std::slice::from_ref(author),
            _ => return,
        };
        let mut users = self.users.write();
        for doc in identities.iter().filter_map(user_to_document) {
            users.insert(doc.id.clone(), doc);
        }
    }

    fn expand(&self, doc: &PinDocument, expand: &[Expand]) -> Pin {
        let users = self.users.read();
        document_to_contract(doc, &users, expand)
    }
}

fn apply(doc: &mut PinDocument, update: PinUpdate) {
    match update {
        PinUpdate::Set(PinFieldSet::SavedBy(savers)) => {
            doc.saved_by = savers.into_iter().map(|s| s.user_id).collect();
        }
        PinUpdate::Set(PinFieldSet::Tags(tags)) => {
            doc.tags = tags.iter().map(tag_to_document).collect();
        }
        PinUpdate::Push(PinAppend::Comment { author, text }) => doc.comments.push(CommentDocument {
            id: Uuid::new_v4().to_string(),
            user: author.user_id,
            comment: text,
            created_at: Utc::now(),
        }),
        PinUpdate::Push(PinAppend::Tag { text }) => doc.tags.push(TagDocument {
            id: Uuid::new_v4().to_string(),
            tag: text,
        }),
    }
}

#[async_trait]
impl PinsRepository for InMemoryPinsRepository {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Pin>> {
        let doc = self.pins.get(id).map(|entry| entry.value().clone());
        Ok(doc.map(|d| self.expand(&d, ALL_FIELDS)))
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: PinUpdate,
        expand: &[Expand],
    ) -> anyhow::Result<Option<Pin>> {
        let updated = match self.pins.get_mut(id) {
            Some(mut entry) => {
                self.remember_identities(&update);
                apply(entry.value_mut(), update);
                entry.value().clone()
            }
            None => {
                debug!(pin_id = %id, "Update target missing");
                return Ok(None);
            }
        };

        Ok(Some(self.expand(&updated, expand)))
    }
}
