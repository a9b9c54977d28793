use serde::{Deserialize, Serialize};

/// Configuration for the pins module (`modules.pins` in the app config)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PinsConfig {
    /// User reported as owning every pin in views.
    #[serde(default)]
    pub admin_user_id: Option<String>,
    /// JSON fixture loaded into the in-memory store at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
    /// Base URL of an external tag catalog; the in-memory catalog is used when absent.
    #[serde(default)]
    pub tag_catalog_url: Option<String>,
}
