//! Name resolution without execution: which executor an invocation reaches
//! and under which qualified name.

use serde::Serialize;
use svcgate_core::{is_system_service, CommandError, DefaultNamespace, ParsedCommand};

/// Executor selected for a qualified service name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutorTarget {
    System,
    User,
}

impl ExecutorTarget {
    #[must_use]
    pub fn for_name(qualified_name: &str) -> Self {
        if is_system_service(qualified_name) {
            Self::System
        } else {
            Self::User
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
        }
    }
}

/// How an invocation resolves against a default namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Name as supplied by the caller.
    pub original_name: String,
    /// Name used for lookup before qualification.
    pub lookup_name: String,
    /// Name handed to the executor.
    pub qualified_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_args: Option<String>,
    pub target: ExecutorTarget,
}

/// Resolves a structured call's service name.
#[must_use]
pub fn resolve_named(namespace: &DefaultNamespace, service_name: &str, method_name: &str) -> Resolution {
    let qualified_name = namespace.qualify_service_name(service_name);
    Resolution {
        original_name: service_name.to_string(),
        lookup_name: service_name.to_string(),
        target: ExecutorTarget::for_name(&qualified_name),
        qualified_name,
        method_name: Some(method_name.to_string()),
        request_type: None,
        json_args: None,
    }
}

/// Resolves an encoded command.
///
/// # Errors
///
/// Returns [`CommandError`] if the command cannot be parsed.
pub fn resolve_encoded(namespace: &DefaultNamespace, command: &str) -> Result<Resolution, CommandError> {
    let parsed = ParsedCommand::parse(command)?;
    let qualified_name = namespace.qualify_command_name(&parsed.lookup_name);
    Ok(Resolution {
        original_name: parsed.original_name,
        lookup_name: parsed.lookup_name,
        target: ExecutorTarget::for_name(&qualified_name),
        qualified_name,
        method_name: None,
        request_type: Some(parsed.request_type.code()),
        json_args: Some(parsed.json_args),
    })
}
