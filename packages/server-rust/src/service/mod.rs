//! Service call routing.
//!
//! 1. **Configuration** (`config`): default namespace and connection URL
//! 2. **Collaborators** (`session`, `executor`): traits for the session and
//!    the system/user executors that actually run services
//! 3. **Routing** (`router`): qualification, dispatch, result encoding
//! 4. **Resolution** (`resolve`): the routing decision without execution
//! 5. **Tower adapter** (`dispatch`): `tower::Service<Invocation>` over a router

pub mod config;
pub mod dispatch;
pub mod executor;
pub mod operation;
pub mod resolve;
pub mod router;
pub mod session;

// Re-export key types for convenient access.
pub use config::{ConfigError, ConfigMap, RouterConfig};
pub use dispatch::RouterService;
pub use executor::{ArgMap, ExecutionError, Executors, SystemServiceExecutor, UserServiceExecutor};
pub use operation::{Invocation, RouterError};
pub use resolve::{resolve_encoded, resolve_named, ExecutorTarget, Resolution};
pub use router::{ServiceRouter, METHOD_ARGS_KEY};
pub use session::{Session, SessionFactory};
