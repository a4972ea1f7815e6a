//! Server configuration.
//!
//! [`ServerConfig`] is parsed from command-line flags, each with an
//! environment variable fallback:
//! - `MERGINGTON_HOST`: listen address (default: "0.0.0.0")
//! - `MERGINGTON_PORT`: listen port (default: 8000)
//! - `MERGINGTON_STATIC_DIR`: directory served under `/static` (default: "static")
//! - `MERGINGTON_SEED_FILE`: JSON catalog to load instead of the built-in seed
//! - `MERGINGTON_ALLOW_OVERBOOKING`: accept signups past `max_participants`

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::Parser;

use mergington_core::{CapacityPolicy, Catalog, CatalogError};

pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors raised while turning a [`ServerConfig`] into application state.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The seed file could not be opened.
    #[error("cannot open seed file {}: {source}", path.display())]
    SeedFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file was read but is not a valid catalog.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Mergington High School activities server.
#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-server", about = "Mergington High School activities API")]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "MERGINGTON_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on.
    #[arg(short, long, env = "MERGINGTON_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Directory served under `/static`.
    #[arg(long, env = "MERGINGTON_STATIC_DIR", default_value = DEFAULT_STATIC_DIR)]
    pub static_dir: PathBuf,

    /// JSON catalog to load instead of the built-in seed.
    #[arg(long, env = "MERGINGTON_SEED_FILE")]
    pub seed_file: Option<PathBuf>,

    /// Accept signups past an activity's `max_participants`.
    #[arg(long, env = "MERGINGTON_ALLOW_OVERBOOKING")]
    pub allow_overbooking: bool,
}

impl ServerConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn capacity_policy(&self) -> CapacityPolicy {
        if self.allow_overbooking {
            CapacityPolicy::Unbounded
        } else {
            CapacityPolicy::Enforce
        }
    }

    /// Builds the catalog from the seed file, or the built-in seed if none
    /// is configured.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let capacity = self.capacity_policy();
        let Some(path) = &self.seed_file else {
            return Ok(Catalog::seeded(capacity));
        };

        let file = File::open(path).map_err(|source| ConfigError::SeedFile {
            path: path.clone(),
            source,
        })?;
        let catalog = Catalog::from_json_reader(BufReader::new(file), capacity)?;
        tracing::info!("loaded {} activities from {}", catalog.len(), path.display());
        Ok(catalog)
    }
}
