use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tracing::{debug, info};
use url::Url;

use crate::api::rest::routes;
use crate::config::PinsConfig;
use crate::contract::client::PinsApi;
use crate::domain::ports::TagCatalog;
use crate::domain::repo::PinsRepository;
use crate::domain::service::{Service, ServiceConfig};
use crate::gateways::local::PinsLocalClient;
use crate::infra::storage::InMemoryPinsRepository;
use crate::infra::tag_catalog::{HttpTagCatalog, InMemoryTagCatalog};

const TAG_CATALOG_TIMEOUT: Duration = Duration::from_secs(5);

/// The pins module: owns the domain service and exposes it to REST and to
/// in-process callers.
#[derive(Clone)]
pub struct PinsModule {
    service: Arc<Service>,
}

impl PinsModule {
    /// Wire the domain service onto explicit adapters.
    pub fn new(
        repo: Arc<dyn PinsRepository>,
        catalog: Arc<dyn TagCatalog>,
        cfg: &PinsConfig,
    ) -> Self {
        let service_config = ServiceConfig {
            admin_user_id: cfg.admin_user_id.clone(),
        };
        Self {
            service: Arc::new(Service::new(repo, catalog, service_config)),
        }
    }

    /// Build the module from configuration: in-memory store (optionally
    /// seeded) and either the HTTP or the in-memory tag catalog.
    /// Relative seed paths are resolved against `base_dir`.
    pub fn from_config(cfg: &PinsConfig, base_dir: &Path) -> anyhow::Result<Self> {
        info!("Initializing pins module");
        debug!(
            "Loaded pins config: admin={:?}, seed_file={:?}, tag_catalog_url={:?}",
            cfg.admin_user_id, cfg.seed_file, cfg.tag_catalog_url
        );

        let repo = match &cfg.seed_file {
            Some(file) => InMemoryPinsRepository::load_seed_file(&base_dir.join(file))?,
            None => InMemoryPinsRepository::new(),
        };

        let catalog: Arc<dyn TagCatalog> = match &cfg.tag_catalog_url {
            Some(raw) => {
                let base = Url::parse(raw)
                    .with_context(|| format!("invalid tag_catalog_url '{raw}'"))?;
                let client = reqwest::Client::builder()
                    .timeout(TAG_CATALOG_TIMEOUT)
                    .build()
                    .context("failed to build tag catalog HTTP client")?;
                Arc::new(HttpTagCatalog::new(client, base))
            }
            None => Arc::new(InMemoryTagCatalog::new()),
        };

        Ok(Self::new(Arc::new(repo), catalog, cfg))
    }

    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// Local in-process client implementation.
    pub fn client(&self) -> Arc<dyn PinsApi> {
        Arc::new(PinsLocalClient::new(self.service()))
    }

    pub fn register_rest(&self, router: axum::Router) -> axum::Router {
        info!("Registering pins REST routes");
        routes::register_routes(router, self.service())
    }

    /// Wait for detached tag catalog writes; call once the listener has stopped.
    pub async fn shutdown(&self) {
        self.service.shutdown().await;
        info!("Pins module stopped");
    }
}
