//! WebGen AI backend
//!
//! Env-driven bootstrap: picks the hosted completion backend when
//! `REPLICATE_API_TOKEN` is set, otherwise runs with the local demo
//! backend, and serves the API over axum.

mod error;
mod routes;
mod state;
mod validate;

use std::net::SocketAddr;
use std::sync::Arc;

use log::{info, warn};

use generation::backend::local::LocalDemoBackend;
use generation::backend::replicate::ReplicateBackend;
use generation::{CompletionBackend, GenerationConfig, GenerationService};
use storefront::{ConfigManager, DocumentStore, FileDocumentStore, RestDocumentStore};

use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GenerationConfig::from_env();
    let (backend, has_ai): (Arc<dyn CompletionBackend>, bool) =
        match std::env::var("REPLICATE_API_TOKEN") {
            Ok(token) if !token.trim().is_empty() => {
                info!("using hosted completion backend with model {}", config.model);
                (Arc::new(ReplicateBackend::new(token.trim())?), true)
            }
            _ => {
                warn!("REPLICATE_API_TOKEN not set, running in local demo mode");
                (Arc::new(LocalDemoBackend::new()), false)
            }
        };
    let service = Arc::new(GenerationService::new(backend, config));

    let store: Arc<dyn DocumentStore> = match std::env::var("STORE_API_URL") {
        Ok(url) if !url.trim().is_empty() => {
            info!("store documents via {url}");
            let token = std::env::var("STORE_API_TOKEN").ok();
            Arc::new(RestDocumentStore::new(url.trim(), token)?)
        }
        _ => {
            let dir = std::env::var("STORE_DATA_DIR").unwrap_or_else(|_| "data".to_string());
            info!("store documents on disk under {dir}");
            Arc::new(FileDocumentStore::new(dir))
        }
    };
    let configs = ConfigManager::new(store);

    let state = Arc::new(AppState::new(service, configs, has_ai));
    let router = routes::build_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!("WebGen AI backend listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
