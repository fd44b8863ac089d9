//! Invocation shapes accepted by the router and the errors it raises.

use std::num::ParseIntError;

use super::config::ConfigError;
use super::executor::{ArgMap, ExecutionError};

/// A raw service invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    /// Structured call with keyword arguments.
    Named {
        service_name: String,
        method_name: String,
        args: ArgMap,
        disable_dynamic_compile: bool,
    },
    /// Structured call with a pre-encoded JSON argument payload.
    NamedJson {
        service_name: String,
        method_name: String,
        json_args: String,
    },
    /// Encoded command `"<type>;<name>;<jsonArgs>"`.
    Encoded(String),
}

impl Invocation {
    /// Structured call with dynamic compilation left enabled.
    #[must_use]
    pub fn named(service_name: impl Into<String>, method_name: impl Into<String>, args: ArgMap) -> Self {
        Self::Named {
            service_name: service_name.into(),
            method_name: method_name.into(),
            args,
            disable_dynamic_compile: false,
        }
    }

    #[must_use]
    pub fn encoded(command: impl Into<String>) -> Self {
        Self::Encoded(command.into())
    }
}

/// Errors the router returns instead of an in-band result.
///
/// Executor failures are normally reported inside the returned string.
/// Only the variants below reach the caller as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// The leading type token of an encoded command is not an integer.
    /// Fatal for the call; never reported in-band.
    #[error("malformed request type `{token}`: {source}")]
    MalformedType {
        token: String,
        #[source]
        source: ParseIntError,
    },
    /// A runtime executor failure on the structured call path, returned
    /// after it has been logged.
    #[error("failed to execute service: {service}.{method}, cause: {source}")]
    Execution {
        service: String,
        method: String,
        #[source]
        source: ExecutionError,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to create session for {url}: {source}")]
    Session {
        url: String,
        #[source]
        source: anyhow::Error,
    },
}
