//! Lifecycle contract for transports that front a service router.
//!
//! A transport is configured with `init()`, begins accepting requests in
//! `start()`, and stops in `stop()`. It is built from the same configuration
//! map as the router, which must be callable once `start()` has returned.

use async_trait::async_trait;

use crate::service::config::ConfigMap;

/// HTTP transport lifecycle with its configurable endpoint settings.
#[async_trait]
pub trait HttpServer: Send + Sync {
    fn web_root(&self) -> Option<&str>;

    fn set_web_root(&mut self, web_root: String);

    fn jdbc_url(&self) -> Option<&str>;

    fn set_jdbc_url(&mut self, jdbc_url: String);

    fn host(&self) -> &str;

    fn set_host(&mut self, host: String);

    fn port(&self) -> u16;

    fn set_port(&mut self, port: u16);

    /// Apply the configuration map before `start()`.
    fn init(&mut self, config: &ConfigMap) -> anyhow::Result<()>;

    /// Begin serving requests.
    async fn start(&mut self) -> anyhow::Result<()>;

    /// Stop serving requests.
    async fn stop(&mut self) -> anyhow::Result<()>;
}
