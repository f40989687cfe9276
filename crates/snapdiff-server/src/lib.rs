//! HTTP server for snapdiff.
//!
//! Serves the browsing flow over a projects root: pick a project, pick
//! two versions, explore the per-file status, open a line diff of any
//! file. All state is the immutable [`ServerConfig`]; every request
//! resolves against the filesystem afresh.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::SnapdiffServer;
