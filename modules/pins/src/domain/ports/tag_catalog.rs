use async_trait::async_trait;

use crate::domain::error::DomainError;

/// System-wide log of tag texts. Writes are best-effort: callers never let
/// the outcome affect their own result.
#[async_trait]
pub trait TagCatalog: Send + Sync {
    async fn record(&self, text: &str) -> Result<(), DomainError>;
}
