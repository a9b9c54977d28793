use async_trait::async_trait;
use serde::Serialize;
use tracing::instrument;
use url::Url;

use crate::domain::error::DomainError;
use crate::domain::ports::TagCatalog;

#[derive(Serialize)]
struct RecordTagBody<'a> {
    tag: &'a str,
}

/// HTTP adapter implementing the TagCatalog port: `POST <base>/api/tags`.
pub struct HttpTagCatalog {
    client: reqwest::Client,
    base: Url,
}

impl HttpTagCatalog {
    pub fn new(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }
}

#[async_trait]
impl TagCatalog for HttpTagCatalog {
    #[instrument(
        name = "pins.http.tag_catalog.record",
        skip_all,
        fields(catalog_base = %self.base, tag = %text)
    )]
    async fn record(&self, text: &str) -> Result<(), DomainError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| DomainError::catalog("invalid tag catalog base URL"))?
            .pop_if_empty()
            .extend(&["api", "tags"]);

        let response = self
            .client
            .post(url)
            .json(&RecordTagBody { tag: text })
            .send()
            .await
            .map_err(|e| DomainError::catalog(format!("POST /api/tags: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::catalog(format!("HTTP {}", response.status())));
        }

        Ok(())
    }
}
