//! `svcgate` Server — service call router, executor seams, and transport contract.

pub mod network;
pub mod service;
pub mod telemetry;

pub use network::{HttpServer, HttpServerConfig};
pub use service::{
    Executors, Invocation, RouterConfig, RouterError, RouterService, ServiceRouter, Session,
    SessionFactory,
};
