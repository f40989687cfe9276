use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;

/// The snapdiff HTTP server.
pub struct SnapdiffServer {
    config: Arc<ServerConfig>,
}

impl SnapdiffServer {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.config.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!(
            "snapdiff serving {} on {}",
            self.config.projects_root.display(),
            self.config.bind_addr
        );
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = SnapdiffServer::new(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8750".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = SnapdiffServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
