use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// The projects root is the only place in the system that knows where
/// snapshots live on disk; it is passed down explicitly, never read from
/// ambient process state.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Directory containing one subdirectory per project.
    pub projects_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8750".parse().unwrap(),
            projects_root: PathBuf::from("projects"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file; absent keys keep defaults.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ServerError::Config(e.to_string()))
    }
}
