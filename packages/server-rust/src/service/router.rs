//! Service call routing: qualifies service names, picks the system or user
//! executor, and encodes the result for the caller's wire shape.

use serde_json::Value;
use svcgate_core::{
    encode_command, CommandError, CommandReply, ParsedCommand, ReplyStatus, RequestType,
    ServiceResult,
};
use tracing::{error, info, info_span};

use super::config::{ConfigMap, RouterConfig};
use super::executor::{ArgMap, ExecutionError, Executors};
use super::operation::{Invocation, RouterError};
use super::resolve::ExecutorTarget;
use super::session::{Session, SessionFactory};

/// Argument key whose value is a pre-encoded JSON argument list.
pub const METHOD_ARGS_KEY: &str = "methodArgs";

// ---------------------------------------------------------------------------
// ServiceRouter
// ---------------------------------------------------------------------------

/// Routes service invocations to the system or user executor.
///
/// Owns one session, opened at construction and reused for every call.
/// Structured calls return a bare encoded result; encoded commands return a
/// `[status, name, result]` JSON array. Executor failures are reported
/// in-band, except runtime failures on the structured path, which are
/// logged and returned as [`RouterError::Execution`].
pub struct ServiceRouter {
    config: RouterConfig,
    session: Box<dyn Session>,
    executors: Executors,
}

impl ServiceRouter {
    /// Opens the router's session and builds the router.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Config`] if no connection URL can be derived
    /// and [`RouterError::Session`] if the session cannot be opened.
    pub fn new(
        config: RouterConfig,
        sessions: &dyn SessionFactory,
        executors: Executors,
    ) -> Result<Self, RouterError> {
        let url = config.connection_url()?;
        let session = sessions
            .create_session(&url)
            .map_err(|source| RouterError::Session {
                url: url.clone(),
                source,
            })?;
        info!(url = %url, "service router session opened");
        Ok(Self {
            config,
            session,
            executors,
        })
    }

    /// Builds a router from a raw configuration map.
    ///
    /// # Errors
    ///
    /// See [`ServiceRouter::new`].
    pub fn from_map(
        config: &ConfigMap,
        sessions: &dyn SessionFactory,
        executors: Executors,
    ) -> Result<Self, RouterError> {
        Self::new(RouterConfig::from_map(config), sessions, executors)
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &dyn Session {
        self.session.as_ref()
    }

    /// Dispatches any invocation shape.
    ///
    /// # Errors
    ///
    /// Propagates the errors of the matching `execute_*` method.
    pub fn execute(&self, invocation: &Invocation) -> Result<String, RouterError> {
        match invocation {
            Invocation::Named {
                service_name,
                method_name,
                args,
                disable_dynamic_compile,
            } => self.execute_named_call(service_name, method_name, args, *disable_dynamic_compile),
            Invocation::NamedJson {
                service_name,
                method_name,
                json_args,
            } => self.execute_named_call_json(service_name, method_name, json_args),
            Invocation::Encoded(command) => self.execute_encoded_command(command),
        }
    }

    /// Structured call with dynamic compilation left enabled.
    ///
    /// # Errors
    ///
    /// See [`ServiceRouter::execute_named_call`].
    pub fn execute_service(
        &self,
        service_name: &str,
        method_name: &str,
        args: &ArgMap,
    ) -> Result<String, RouterError> {
        self.execute_named_call(service_name, method_name, args, false)
    }

    /// Executes a structured call and returns the bare encoded result.
    ///
    /// An argument map holding [`METHOD_ARGS_KEY`] is treated as a
    /// pre-encoded payload and redispatched through the encoded path, whose
    /// reply array is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::Execution`] when the executor fails with
    /// [`ExecutionError::Runtime`]. Declared failures come back as
    /// `Ok("failed to execute service: ...")`.
    pub fn execute_named_call(
        &self,
        service_name: &str,
        method_name: &str,
        args: &ArgMap,
        disable_dynamic_compile: bool,
    ) -> Result<String, RouterError> {
        if let Some(pre_encoded) = args.get(METHOD_ARGS_KEY) {
            let json_args = match pre_encoded {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return self.execute_named_call_json(service_name, method_name, &json_args);
        }

        let service_name = self.config.namespace().qualify_service_name(service_name);
        let target = ExecutorTarget::for_name(&service_name);
        let _span = info_span!("service_call", service = %service_name, method = method_name).entered();
        info!("execute service: {service_name}.{method_name}");

        let outcome = match target {
            ExecutorTarget::System => {
                self.executors
                    .system
                    .execute(&service_name, method_name, args)
            }
            ExecutorTarget::User => self.executors.user.execute(
                self.session.as_ref(),
                &service_name,
                method_name,
                args,
                disable_dynamic_compile,
            ),
        };

        let result = match outcome {
            Ok(result) => {
                record_call("named", target, "ok");
                result
            }
            Err(err) => {
                let failure =
                    format!("failed to execute service: {service_name}.{method_name}, cause: {err}");
                error!(runtime = err.is_runtime(), "{failure}");
                record_call("named", target, "error");
                if matches!(err, ExecutionError::Runtime(_)) {
                    return Err(RouterError::Execution {
                        service: service_name,
                        method: method_name.to_string(),
                        source: err,
                    });
                }
                ServiceResult::from(failure)
            }
        };

        Ok(result.encode())
    }

    /// Structured call with a pre-encoded JSON payload, executed through the
    /// encoded path.
    ///
    /// # Errors
    ///
    /// See [`ServiceRouter::execute_encoded_command`].
    pub fn execute_named_call_json(
        &self,
        service_name: &str,
        method_name: &str,
        json_args: &str,
    ) -> Result<String, RouterError> {
        self.execute_encoded_command(&encode_command(service_name, method_name, json_args))
    }

    /// Executes an encoded `"<type>;<name>;<jsonArgs>"` command and returns
    /// the reply as a `[status, name, result]` JSON array.
    ///
    /// A command without any `;` yields `Ok("invalid service: <command>")`.
    ///
    /// # Errors
    ///
    /// Returns [`RouterError::MalformedType`] if the leading type token is
    /// not an integer. Every executor failure is reported in-band.
    pub fn execute_encoded_command(&self, command: &str) -> Result<String, RouterError> {
        let parsed = match ParsedCommand::parse(command) {
            Ok(parsed) => parsed,
            Err(err @ CommandError::MissingDelimiter { .. }) => return Ok(err.to_string()),
            Err(CommandError::MalformedType { token, source }) => {
                error!(command, "malformed request type `{token}`");
                return Err(RouterError::MalformedType { token, source });
            }
        };

        let service_name = self
            .config
            .namespace()
            .qualify_command_name(&parsed.lookup_name);

        let (status, result) = match parsed.request_type {
            RequestType::Execute => self.dispatch_json(&service_name, &parsed.json_args),
            RequestType::Unknown(code) => {
                let message = format!("unknown request type: {code}, serviceName: {service_name}");
                error!("{message}");
                metrics::counter!(
                    "svcgate_calls_total",
                    "path" => "encoded",
                    "executor" => "none",
                    "outcome" => "unknown_type"
                )
                .increment(1);
                (ReplyStatus::Failure, ServiceResult::from(message))
            }
        };

        Ok(CommandReply::new(status, parsed.original_name, result.encode()).encode())
    }

    fn dispatch_json(&self, service_name: &str, json_args: &str) -> (ReplyStatus, ServiceResult) {
        let target = ExecutorTarget::for_name(service_name);
        let _span = info_span!("service_call", service = service_name).entered();
        info!("execute service: {service_name}");

        let outcome = match target {
            ExecutorTarget::System => self.executors.system.execute_json(service_name, json_args),
            ExecutorTarget::User => {
                self.executors
                    .user
                    .execute_json(self.session.as_ref(), service_name, json_args)
            }
        };

        match outcome {
            Ok(result) => {
                record_call("encoded", target, "ok");
                (ReplyStatus::Success, result)
            }
            Err(err) => {
                let failure = format!("failed to execute service: {service_name}, cause: {err}");
                error!(runtime = err.is_runtime(), "{failure}");
                record_call("encoded", target, "error");
                (ReplyStatus::Failure, ServiceResult::from(failure))
            }
        }
    }
}

fn record_call(path: &'static str, target: ExecutorTarget, outcome: &'static str) {
    metrics::counter!(
        "svcgate_calls_total",
        "path" => path,
        "executor" => target.as_str(),
        "outcome" => outcome
    )
    .increment(1);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
