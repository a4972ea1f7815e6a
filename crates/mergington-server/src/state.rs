//! Application state shared by all handlers.
//!
//! The [`Catalog`] does its own per-activity locking, so [`AppState`] only
//! needs an `Arc` around it. No lock is taken at this level.

use std::path::PathBuf;
use std::sync::Arc;

use mergington_core::{CapacityPolicy, Catalog};

use crate::config::{ConfigError, ServerConfig};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The activity catalog.
    pub catalog: Arc<Catalog>,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Creates a new `AppState` around `catalog`, serving static files from
    /// `./static`.
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
            static_dir: PathBuf::from(crate::config::DEFAULT_STATIC_DIR),
        }
    }

    /// Creates an `AppState` over a fresh copy of the built-in seed.
    pub fn seeded(capacity: CapacityPolicy) -> Self {
        Self::new(Catalog::seeded(capacity))
    }

    /// Builds the state described by `config`, loading the seed file if one
    /// is configured.
    pub fn from_config(config: &ServerConfig) -> Result<Self, ConfigError> {
        Ok(AppState {
            catalog: Arc::new(config.load_catalog()?),
            static_dir: config.static_dir.clone(),
        })
    }
}
