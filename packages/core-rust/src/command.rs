//! Encoded command codec: `"<type>;<name>;<jsonArgs>"` requests and
//! `[status, name, result]` replies.
//!
//! Only the first two `;` are structural. The argument payload may contain
//! further `;` characters and is always carried verbatim.

use std::fmt;
use std::num::ParseIntError;

use serde::Deserialize;
use serde_json::json;

use crate::name::to_underscore;

/// Argument payload used when a command carries no arguments.
pub const NO_ARGS: &str = "[]";

/// Request type code for "execute a service method".
pub const EXECUTE_REQUEST: i32 = 1;

/// Request type carried in the leading token of an encoded command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// `1`: execute the named service method.
    Execute,
    /// Any other code. Reported in-band, never executed.
    Unknown(i32),
}

impl RequestType {
    /// Maps a numeric type code to a request type.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        if code == EXECUTE_REQUEST {
            Self::Execute
        } else {
            Self::Unknown(code)
        }
    }

    /// Returns the numeric type code.
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Execute => EXECUTE_REQUEST,
            Self::Unknown(code) => code,
        }
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors from parsing an encoded command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command has no `;` at all.
    #[error("invalid service: {command}")]
    MissingDelimiter { command: String },
    /// The leading type token is not an integer.
    #[error("malformed request type `{token}`: {source}")]
    MalformedType {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// A decoded command, holding both the name as sent and its lookup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub request_type: RequestType,
    /// Name exactly as the caller sent it; echoed back in the reply.
    pub original_name: String,
    /// Underscored name used for qualification and lookup.
    pub lookup_name: String,
    /// Argument payload after the second delimiter, or [`NO_ARGS`].
    pub json_args: String,
}

impl ParsedCommand {
    /// Parses `"<type>;<name>[;<jsonArgs>]"`.
    ///
    /// # Errors
    ///
    /// - [`CommandError::MissingDelimiter`] if the command contains no `;`
    /// - [`CommandError::MalformedType`] if the leading token is not an `i32`
    pub fn parse(command: &str) -> Result<Self, CommandError> {
        let Some((token, rest)) = command.split_once(';') else {
            return Err(CommandError::MissingDelimiter {
                command: command.to_string(),
            });
        };

        let code = token
            .parse::<i32>()
            .map_err(|source| CommandError::MalformedType {
                token: token.to_string(),
                source,
            })?;

        let (name, json_args) = rest.split_once(';').unwrap_or((rest, NO_ARGS));

        Ok(Self {
            request_type: RequestType::from_code(code),
            original_name: name.to_string(),
            lookup_name: to_underscore(name),
            json_args: json_args.to_string(),
        })
    }
}

/// Builds an execute command for `service.method` with a pre-encoded payload.
#[must_use]
pub fn encode_command(service_name: &str, method_name: &str, json_args: &str) -> String {
    format!("{EXECUTE_REQUEST};{service_name}.{method_name};{json_args}")
}

/// Status code in the first slot of a command reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyStatus {
    Success,
    Failure,
}

impl ReplyStatus {
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Self::Success => 2,
            Self::Failure => 3,
        }
    }

    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            2 => Some(Self::Success),
            3 => Some(Self::Failure),
            _ => None,
        }
    }
}

/// Reply to an encoded command, serialized as `[status, name, result]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandReply {
    pub status: ReplyStatus,
    /// The caller's original (pre-underscore) name.
    pub name: String,
    /// Encoded result or failure message.
    pub result: String,
}

impl CommandReply {
    #[must_use]
    pub fn new(status: ReplyStatus, name: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            status,
            name: name.into(),
            result: result.into(),
        }
    }

    /// Encodes the reply as a compact JSON array.
    #[must_use]
    pub fn encode(&self) -> String {
        json!([self.status.code(), self.name, self.result]).to_string()
    }

    /// Decodes a reply produced by [`encode`](Self::encode).
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a `[status, name, result]` array
    /// or the status is not a known code.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct Wire(u8, String, String);

        let Wire(code, name, result) = serde_json::from_str(text)?;
        let status = ReplyStatus::from_code(code).ok_or_else(|| {
            <serde_json::Error as serde::de::Error>::custom(format!("unknown reply status {code}"))
        })?;
        Ok(Self {
            status,
            name,
            result,
        })
    }
}
