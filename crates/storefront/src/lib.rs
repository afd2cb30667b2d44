//! Storefront configuration
//!
//! The storefront and its admin configurator share one per-store JSON
//! document. This crate provides the typed document ([`StoreConfig`]), the
//! document-store backends that persist it, and [`ConfigManager`] for the
//! load/save/reset/import/export lifecycle.

pub mod document;
pub mod manager;
pub mod store;

pub use document::StoreConfig;
pub use manager::{ConfigError, ConfigManager, StoreOwner};
pub use store::{deep_merge, DocumentStore, FileDocumentStore, RestDocumentStore, StoreError};
