//! Service executor seams.
//!
//! The router never executes service logic itself. System services (names
//! containing the system marker) go to a [`SystemServiceExecutor`]; every
//! other name goes to a [`UserServiceExecutor`] together with the router's
//! session.

use std::sync::Arc;

use serde_json::{Map, Value};
use svcgate_core::ServiceResult;

use super::session::Session;

/// Keyword arguments of a structured call.
pub type ArgMap = Map<String, Value>;

/// Errors raised by a service executor.
///
/// The variant decides how the structured call path reacts: a `Declared`
/// failure is reported in-band only, a `Runtime` failure is reported and then
/// returned to the caller. The encoded path reports both in-band.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    /// Expected failure declared by the service contract.
    #[error("{0}")]
    Declared(String),
    /// Unexpected failure inside the executor or the service.
    #[error("{0}")]
    Runtime(#[from] anyhow::Error),
}

impl ExecutionError {
    /// Convenience constructor for a declared failure.
    #[must_use]
    pub fn declared(message: impl Into<String>) -> Self {
        Self::Declared(message.into())
    }

    #[must_use]
    pub fn is_runtime(&self) -> bool {
        matches!(self, Self::Runtime(_))
    }
}

/// Executor for the reserved system-service namespace.
pub trait SystemServiceExecutor: Send + Sync {
    /// Execute `method_name` on the system service with keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the service fails.
    fn execute(
        &self,
        service_name: &str,
        method_name: &str,
        args: &ArgMap,
    ) -> Result<ServiceResult, ExecutionError>;

    /// Execute `name` (`service.method`, possibly qualified) with a JSON
    /// argument payload.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the service fails.
    fn execute_json(&self, name: &str, json_args: &str) -> Result<ServiceResult, ExecutionError>;
}

/// Executor for user-defined services.
pub trait UserServiceExecutor: Send + Sync {
    /// Execute `method_name` on the user service with keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the service fails.
    fn execute(
        &self,
        session: &dyn Session,
        service_name: &str,
        method_name: &str,
        args: &ArgMap,
        disable_dynamic_compile: bool,
    ) -> Result<ServiceResult, ExecutionError>;

    /// Execute `name` (`service.method`, possibly qualified) with a JSON
    /// argument payload.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the service fails.
    fn execute_json(
        &self,
        session: &dyn Session,
        name: &str,
        json_args: &str,
    ) -> Result<ServiceResult, ExecutionError>;
}

/// The pair of executors a router dispatches to.
#[derive(Clone)]
pub struct Executors {
    pub system: Arc<dyn SystemServiceExecutor>,
    pub user: Arc<dyn UserServiceExecutor>,
}

impl Executors {
    #[must_use]
    pub fn new(
        system: Arc<dyn SystemServiceExecutor>,
        user: Arc<dyn UserServiceExecutor>,
    ) -> Self {
        Self { system, user }
    }
}
