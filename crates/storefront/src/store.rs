//! Document-store access
//!
//! The configurator persists store documents through a [`DocumentStore`].
//! [`RestDocumentStore`] talks to the hosted document API the production
//! storefront uses; [`FileDocumentStore`] keeps JSON files on disk for local
//! development and tests. Both honor merge writes so config updates never
//! clobber metadata fields written by other components.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid document id: {0}")]
    InvalidId(String),
    #[error("document store request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("document store returned {status}: {body}")]
    Api { status: StatusCode, body: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored document is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Async access to JSON documents grouped into collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a document, `None` when it does not exist
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError>;

    /// Write a document. With `merge` set, `value` is merged over the stored
    /// document field by field instead of replacing it.
    async fn set(&self, collection: &str, id: &str, value: Value, merge: bool)
        -> Result<(), StoreError>;

    async fn exists(&self, collection: &str, id: &str) -> Result<bool, StoreError> {
        Ok(self.get(collection, id).await?.is_some())
    }
}

/// Recursively merge `patch` over `base`; objects merge per key, everything
/// else is replaced by the patch value.
pub fn deep_merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base_map), Value::Object(patch_map)) => {
            for (key, patch_value) in patch_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, patch_value),
                    None => {
                        base_map.insert(key, patch_value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

fn check_id(id: &str) -> Result<(), StoreError> {
    let ok = !id.is_empty()
        && id.len() <= 128
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StoreError::InvalidId(id.to_string()))
    }
}

/// Client for the hosted document API
///
/// Documents live at `{base_url}/{collection}/{id}`. Reads return 404 for
/// missing documents; merge writes are read-merge-write since the API only
/// supports whole-document PUT.
pub struct RestDocumentStore {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl RestDocumentStore {
    pub fn new(base_url: &str, api_token: Option<String>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .user_agent("webgen-ai/1.0.0")
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        })
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl DocumentStore for RestDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        check_id(id)?;
        let url = self.document_url(collection, id);
        debug!("GET {url}");
        let response = self.authorize(self.client.get(&url)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(StoreError::Api { status, body })
            }
        }
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        value: Value,
        merge: bool,
    ) -> Result<(), StoreError> {
        check_id(id)?;
        let payload = if merge {
            match self.get(collection, id).await? {
                Some(mut existing) => {
                    deep_merge(&mut existing, value);
                    existing
                }
                None => value,
            }
        } else {
            value
        };

        let url = self.document_url(collection, id);
        debug!("PUT {url}");
        let response = self
            .authorize(self.client.put(&url))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(StoreError::Api { status, body })
        }
    }
}

/// JSON-file store for local development
///
/// One file per document under `{root}/{collection}/{id}.json`.
pub struct FileDocumentStore {
    root: PathBuf,
}

impl FileDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, collection: &str, id: &str) -> PathBuf {
        self.root.join(collection).join(format!("{id}.json"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentStore for FileDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>, StoreError> {
        check_id(id)?;
        let path = self.document_path(collection, id);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn set(
        &self,
        collection: &str,
        id: &str,
        value: Value,
        merge: bool,
    ) -> Result<(), StoreError> {
        check_id(id)?;
        let payload = if merge {
            match self.get(collection, id).await? {
                Some(mut existing) => {
                    deep_merge(&mut existing, value);
                    existing
                }
                None => value,
            }
        } else {
            value
        };

        let path = self.document_path(collection, id);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write to a sibling temp file first so readers never see a torn file
        let tmp = path.with_extension("json.tmp");
        let bytes = serde_json::to_vec_pretty(&payload)?;
        tokio::fs::write(&tmp, &bytes).await?;
        if let Err(err) = tokio::fs::rename(&tmp, &path).await {
            warn!("atomic rename failed for {}: {err}", path.display());
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deep_merge_prefers_patch_leaves_and_keeps_base_siblings() {
        let mut base = json!({
            "general": { "storeName": "Old", "storeType": "physical" },
            "ownerId": "u1"
        });
        deep_merge(
            &mut base,
            json!({ "general": { "storeName": "New" }, "updatedAt": "now" }),
        );
        assert_eq!(base["general"]["storeName"], "New");
        assert_eq!(base["general"]["storeType"], "physical");
        assert_eq!(base["ownerId"], "u1");
        assert_eq!(base["updatedAt"], "now");
    }

    #[test]
    fn deep_merge_replaces_non_object_values() {
        let mut base = json!({ "colors": ["a", "b"] });
        deep_merge(&mut base, json!({ "colors": { "primary": "#fff" } }));
        assert_eq!(base["colors"]["primary"], "#fff");
    }

    #[test]
    fn ids_with_path_separators_are_rejected() {
        assert!(check_id("../etc/passwd").is_err());
        assert!(check_id("store/../../x").is_err());
        assert!(check_id("").is_err());
        assert!(check_id("demo-store_01").is_ok());
    }

    #[tokio::test]
    async fn file_store_roundtrips_documents() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path());

        assert!(store.get("stores", "demo").await.unwrap().is_none());
        assert!(!store.exists("stores", "demo").await.unwrap());

        store
            .set("stores", "demo", json!({ "a": 1 }), false)
            .await
            .unwrap();
        let doc = store.get("stores", "demo").await.unwrap().unwrap();
        assert_eq!(doc["a"], 1);
        assert!(store.exists("stores", "demo").await.unwrap());
    }

    #[tokio::test]
    async fn file_store_merge_write_preserves_existing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path());

        store
            .set(
                "stores",
                "demo",
                json!({ "general": { "storeName": "A" }, "ownerId": "u1" }),
                false,
            )
            .await
            .unwrap();
        store
            .set(
                "stores",
                "demo",
                json!({ "general": { "storeSlogan": "B" } }),
                true,
            )
            .await
            .unwrap();

        let doc = store.get("stores", "demo").await.unwrap().unwrap();
        assert_eq!(doc["general"]["storeName"], "A");
        assert_eq!(doc["general"]["storeSlogan"], "B");
        assert_eq!(doc["ownerId"], "u1");
    }

    #[tokio::test]
    async fn file_store_replace_write_drops_old_fields() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileDocumentStore::new(dir.path());

        store
            .set("stores", "demo", json!({ "a": 1, "b": 2 }), false)
            .await
            .unwrap();
        store
            .set("stores", "demo", json!({ "a": 3 }), false)
            .await
            .unwrap();

        let doc = store.get("stores", "demo").await.unwrap().unwrap();
        assert_eq!(doc["a"], 3);
        assert!(doc.get("b").is_none());
    }

    #[test]
    fn rest_store_trims_trailing_slash() {
        let store = RestDocumentStore::new("https://docs.example.com/v1/", None).unwrap();
        assert_eq!(
            store.document_url("stores", "demo"),
            "https://docs.example.com/v1/stores/demo"
        );
    }
}
