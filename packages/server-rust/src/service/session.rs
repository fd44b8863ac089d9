//! Session collaborator seam.

use std::any::Any;

/// A database session handle owned by a router for its whole lifetime.
///
/// The router never locks around the session. Whether concurrent calls
/// through one router are safe is a property of the implementation.
pub trait Session: Send + Sync + Any {
    /// The connection URL this session was opened with.
    fn url(&self) -> &str;

    /// Enables executors to downcast to their concrete session type.
    fn as_any(&self) -> &dyn Any;
}

/// Opens sessions for a connection URL.
pub trait SessionFactory {
    /// Open a session for the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    fn create_session(&self, url: &str) -> anyhow::Result<Box<dyn Session>>;
}
