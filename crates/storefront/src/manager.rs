//! Store configuration lifecycle
//!
//! Load, save, reset, export and import of [`StoreConfig`] documents on top
//! of a [`DocumentStore`]. Saves are merge writes carrying owner and
//! timestamp metadata next to the configuration sections, so loads have to
//! filter the metadata back out, which falls out of the typed document
//! ignoring unknown keys.

use std::sync::Arc;

use chrono::Utc;
use log::{info, warn};
use serde_json::{json, Value};
use thiserror::Error;

use crate::document::StoreConfig;
use crate::store::{DocumentStore, StoreError};

const STORES_COLLECTION: &str = "stores";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("configuration document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("imported configuration is missing required sections: {0}")]
    MissingSections(String),
}

/// Identity attached to configuration writes
#[derive(Debug, Clone)]
pub struct StoreOwner {
    pub id: String,
    pub email: String,
}

impl StoreOwner {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// Manages per-store configuration documents
pub struct ConfigManager {
    store: Arc<dyn DocumentStore>,
}

impl ConfigManager {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Load a store's configuration, falling back to defaults when the
    /// document is missing. Stored sections merge over the defaults.
    pub async fn load(&self, store_id: &str) -> Result<StoreConfig, ConfigError> {
        match self.store.get(STORES_COLLECTION, store_id).await? {
            Some(doc) => {
                let config = serde_json::from_value(doc)?;
                Ok(config)
            }
            None => {
                warn!("no configuration for store {store_id}, using defaults");
                Ok(StoreConfig::default())
            }
        }
    }

    /// Create the document for a new store with default configuration and
    /// owner metadata. Does nothing when the store already exists.
    pub async fn initialize(&self, store_id: &str, owner: &StoreOwner) -> Result<bool, ConfigError> {
        if self.store.exists(STORES_COLLECTION, store_id).await? {
            return Ok(false);
        }

        let now = Utc::now().to_rfc3339();
        let mut doc = serde_json::to_value(StoreConfig::default())?;
        merge_metadata(&mut doc, owner, &now, Some(&now));
        self.store
            .set(STORES_COLLECTION, store_id, doc, false)
            .await?;
        info!("initialized store {store_id} for {}", owner.email);
        Ok(true)
    }

    /// Persist a configuration, stamping owner and update-time metadata.
    /// The first save of a store also stamps its creation time.
    pub async fn save(
        &self,
        store_id: &str,
        config: &StoreConfig,
        owner: &StoreOwner,
    ) -> Result<(), ConfigError> {
        let existing = self.store.get(STORES_COLLECTION, store_id).await?;
        let has_created_at = existing
            .as_ref()
            .and_then(|doc| doc.get("createdAt"))
            .is_some();

        let now = Utc::now().to_rfc3339();
        let mut doc = serde_json::to_value(config)?;
        let created_at = (!has_created_at).then_some(now.as_str());
        merge_metadata(&mut doc, owner, &now, created_at);

        self.store
            .set(STORES_COLLECTION, store_id, doc, true)
            .await?;
        info!("saved configuration for store {store_id}");
        Ok(())
    }

    /// Reset a store back to the default configuration
    pub async fn restore_defaults(
        &self,
        store_id: &str,
        owner: &StoreOwner,
    ) -> Result<StoreConfig, ConfigError> {
        let defaults = StoreConfig::default();
        // Replace rather than merge so stale sections do not linger, but
        // keep the creation timestamp from the old document.
        let existing = self.store.get(STORES_COLLECTION, store_id).await?;
        let created_at = existing
            .as_ref()
            .and_then(|doc| doc.get("createdAt"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let now = Utc::now().to_rfc3339();
        let mut doc = serde_json::to_value(&defaults)?;
        merge_metadata(
            &mut doc,
            owner,
            &now,
            Some(created_at.as_deref().unwrap_or(&now)),
        );
        self.store
            .set(STORES_COLLECTION, store_id, doc, false)
            .await?;
        info!("restored default configuration for store {store_id}");
        Ok(defaults)
    }

    /// Serialize a configuration for download
    pub fn export_json(config: &StoreConfig) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(config)?)
    }

    /// Parse an uploaded configuration. The document must at least carry the
    /// `general` and `colors` sections; everything it omits is defaulted.
    pub fn import_json(raw: &str) -> Result<StoreConfig, ConfigError> {
        let value: Value = serde_json::from_str(raw)?;
        let missing: Vec<&str> = ["general", "colors"]
            .into_iter()
            .filter(|key| value.get(key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissingSections(missing.join(", ")));
        }
        Ok(serde_json::from_value(value)?)
    }
}

fn merge_metadata(doc: &mut Value, owner: &StoreOwner, updated_at: &str, created_at: Option<&str>) {
    if let Value::Object(map) = doc {
        map.insert("ownerId".into(), json!(owner.id));
        map.insert("ownerEmail".into(), json!(owner.email));
        map.insert("updatedAt".into(), json!(updated_at));
        if let Some(created) = created_at {
            map.insert("createdAt".into(), json!(created));
        }
    }
}
