//! Site generation over hosted completion models
//!
//! Turns a structured [`SiteRequest`] into sanitized HTML, CSS and JS by
//! prompting a completion backend and post-processing the raw output. The
//! backend is pluggable: [`backend::replicate::ReplicateBackend`] talks to a
//! hosted predictions API, while [`backend::local::LocalDemoBackend`] renders
//! a canned demo page for environments without an API token.

pub mod backend;
pub mod config;
pub mod extract;
pub mod fallback;
pub mod prompt;
pub mod sanitize;
pub mod service;
pub mod types;

pub use backend::{BackendError, CompletionBackend, CompletionRequest};
pub use config::GenerationConfig;
pub use service::{GenerationError, GenerationOutcome, GenerationService};
pub use types::{BusinessType, Feature, GeneratedSite, Goal, SiteRequest, SiteStats, Style};
