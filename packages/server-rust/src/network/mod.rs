//! Transport-facing configuration and lifecycle contract.

pub mod config;
pub mod lifecycle;

pub use config::HttpServerConfig;
pub use lifecycle::HttpServer;
