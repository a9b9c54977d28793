use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::ports::TagCatalog;

/// Append-only log of distinct tag texts, in first-seen order.
#[derive(Debug, Default)]
pub struct InMemoryTagCatalog {
    tags: Mutex<Vec<String>>,
}

impl InMemoryTagCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> Vec<String> {
        self.tags.lock().clone()
    }
}

#[async_trait]
impl TagCatalog for InMemoryTagCatalog {
    async fn record(&self, text: &str) -> Result<(), DomainError> {
        let mut tags = self.tags.lock();
        if !tags.iter().any(|t| t == text) {
            debug!(tag = %text, "New tag recorded");
            tags.push(text.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_first_seen_order_without_duplicates() {
        let catalog = InMemoryTagCatalog::new();
        for t in ["sea", "sky", "sea", "forest", "sky"] {
            catalog.record(t).await.unwrap();
        }
        assert_eq!(catalog.tags(), vec!["sea", "sky", "forest"]);
    }
}
