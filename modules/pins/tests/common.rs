#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use parking_lot::Mutex;
use tokio::sync::Notify;

use pins::contract::model::{Comment, Pin, Requester, Tag, UserRef};
use pins::domain::error::DomainError;
use pins::domain::ports::TagCatalog;
use pins::domain::repo::{Expand, PinAppend, PinFieldSet, PinUpdate, PinsRepository};
use pins::domain::service::{Service, ServiceConfig};
use pins::infra::tag_catalog::InMemoryTagCatalog;

pub fn me() -> Requester {
    Requester::new("u-me", "tester-twitter", "twitter")
}

pub fn other() -> Requester {
    Requester::new("u-other", "tester-another", "other-service")
}

pub fn other_ref() -> UserRef {
    UserRef::new("u-other", "tester-another", "other-service")
}

/// Pin "3": owned and saved by u-other, one comment, no tags.
pub fn pin_three() -> Pin {
    Pin {
        id: "3".into(),
        image_link: "https://stub-3".into(),
        image_description: "description-3".into(),
        owner: other_ref(),
        saved_by: vec![other_ref()],
        comments: vec![Comment {
            id: "comment-Id-1".into(),
            author_user_id: "u-google".into(),
            author_display_name: "tester-google".into(),
            text: "unit tests".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }],
        tags: vec![],
    }
}

pub fn with_tags(mut pin: Pin, tags: &[(&str, &str)]) -> Pin {
    pin.tags = tags
        .iter()
        .map(|(id, text)| Tag {
            id: (*id).into(),
            text: (*text).into(),
        })
        .collect();
    pin
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCall {
    pub id: String,
    pub update: PinUpdate,
    pub expand: Vec<Expand>,
}

#[derive(Debug, Clone)]
enum UpdateMode {
    Apply,
    ReturnNone,
    Fail(String),
}

/// Scriptable repository that records every call.
pub struct MockPinsRepository {
    pin: Mutex<Option<Pin>>,
    users: HashMap<String, UserRef>,
    find_failure: Option<String>,
    update_mode: UpdateMode,
    find_calls: Mutex<Vec<String>>,
    update_calls: Mutex<Vec<UpdateCall>>,
    next_id: Mutex<u32>,
}

impl MockPinsRepository {
    pub fn with_pin(pin: Pin) -> Self {
        let mut users = HashMap::new();
        users.insert("u-me".to_string(), me().identity());
        users.insert("u-other".to_string(), other_ref());
        Self {
            pin: Mutex::new(Some(pin)),
            users,
            find_failure: None,
            update_mode: UpdateMode::Apply,
            find_calls: Mutex::new(Vec::new()),
            update_calls: Mutex::new(Vec::new()),
            next_id: Mutex::new(2),
        }
    }

    pub fn empty() -> Self {
        let repo = Self::with_pin(pin_three());
        *repo.pin.lock() = None;
        repo
    }

    pub fn failing_find(mut self, message: &str) -> Self {
        self.find_failure = Some(message.to_string());
        self
    }

    pub fn update_returns_none(mut self) -> Self {
        self.update_mode = UpdateMode::ReturnNone;
        self
    }

    pub fn failing_update(mut self, message: &str) -> Self {
        self.update_mode = UpdateMode::Fail(message.to_string());
        self
    }

    pub fn find_calls(&self) -> Vec<String> {
        self.find_calls.lock().clone()
    }

    pub fn update_calls(&self) -> Vec<UpdateCall> {
        self.update_calls.lock().clone()
    }

    pub fn current(&self) -> Option<Pin> {
        self.pin.lock().clone()
    }

    fn next_id(&self, prefix: &str) -> String {
        let mut n = self.next_id.lock();
        let id = format!("{prefix}-{}", *n);
        *n += 1;
        id
    }

    fn apply(&self, pin: &mut Pin, update: PinUpdate) {
        match update {
            PinUpdate::Set(PinFieldSet::SavedBy(savers)) => pin.saved_by = savers,
            PinUpdate::Set(PinFieldSet::Tags(tags)) => pin.tags = tags,
            PinUpdate::Push(PinAppend::Comment { author, text }) => {
                let display_name = self
                    .users
                    .get(&author.user_id)
                    .map(|u| u.display_name.clone())
                    .unwrap_or(author.display_name);
                pin.comments.push(Comment {
                    id: self.next_id("comment-Id"),
                    author_user_id: author.user_id,
                    author_display_name: display_name,
                    text,
                    created_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
                });
            }
            PinUpdate::Push(PinAppend::Tag { text }) => pin.tags.push(Tag {
                id: self.next_id("tag"),
                text,
            }),
        }
    }
}

#[async_trait]
impl PinsRepository for MockPinsRepository {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<Pin>> {
        self.find_calls.lock().push(id.to_string());
        if let Some(message) = &self.find_failure {
            anyhow::bail!("{message}");
        }
        Ok(self.pin.lock().clone().filter(|p| p.id == id))
    }

    async fn update_by_id(
        &self,
        id: &str,
        update: PinUpdate,
        expand: &[Expand],
    ) -> anyhow::Result<Option<Pin>> {
        self.update_calls.lock().push(UpdateCall {
            id: id.to_string(),
            update: update.clone(),
            expand: expand.to_vec(),
        });
        match &self.update_mode {
            UpdateMode::Fail(message) => anyhow::bail!("{message}"),
            UpdateMode::ReturnNone => Ok(None),
            UpdateMode::Apply => {
                let mut guard = self.pin.lock();
                match guard.as_mut().filter(|p| p.id == id) {
                    Some(pin) => {
                        self.apply(pin, update);
                        Ok(Some(pin.clone()))
                    }
                    None => Ok(None),
                }
            }
        }
    }
}

/// Catalog whose every write fails.
pub struct FailingCatalog;

#[async_trait]
impl TagCatalog for FailingCatalog {
    async fn record(&self, _text: &str) -> Result<(), DomainError> {
        Err(DomainError::catalog("catalog down"))
    }
}

/// Catalog that holds every write until `release` is called.
#[derive(Default)]
pub struct GatedCatalog {
    gate: Notify,
    pub recorded: Mutex<Vec<String>>,
}

impl GatedCatalog {
    pub fn release(&self) {
        self.gate.notify_one();
    }
}

#[async_trait]
impl TagCatalog for GatedCatalog {
    async fn record(&self, text: &str) -> Result<(), DomainError> {
        self.gate.notified().await;
        self.recorded.lock().push(text.to_string());
        Ok(())
    }
}

pub fn service_with(repo: Arc<MockPinsRepository>, catalog: Arc<dyn TagCatalog>) -> Service {
    Service::new(repo, catalog, ServiceConfig::default())
}

pub fn service_for(repo: Arc<MockPinsRepository>) -> Service {
    service_with(repo, Arc::new(InMemoryTagCatalog::new()))
}
