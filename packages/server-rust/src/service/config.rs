use std::collections::HashMap;
use std::num::ParseIntError;

use svcgate_core::DefaultNamespace;

/// Construction-time configuration map shared by routers and transports.
pub type ConfigMap = HashMap<String, String>;

/// Recognized configuration keys.
pub mod keys {
    pub const DEFAULT_DATABASE: &str = "default_database";
    pub const DEFAULT_SCHEMA: &str = "default_schema";
    pub const JDBC_URL: &str = "jdbc_url";
    pub const WEB_ROOT: &str = "web_root";
    pub const HOST: &str = "host";
    pub const PORT: &str = "port";
}

/// Scheme prefix of synthesized connection URLs.
pub const URL_PREFIX: &str = "jdbc:lealone:";
/// Marker selecting an embedded (in-process) database connection.
pub const URL_EMBED: &str = "embed:";

/// Errors from reading the configuration map.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no connection url: set `{}` or `{}`", keys::JDBC_URL, keys::DEFAULT_DATABASE)]
    MissingDatabase,
    #[error("invalid `{key}` value `{value}`: {source}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Immutable router configuration.
///
/// Holds the default namespace used for name qualification and an optional
/// connection URL override. Nothing here changes after construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouterConfig {
    /// Default database and schema for partial service names.
    pub namespace: DefaultNamespace,
    /// Overrides the synthesized embedded connection URL.
    pub jdbc_url: Option<String>,
}

impl RouterConfig {
    /// Reads `default_database`, `default_schema` and `jdbc_url`. Other keys
    /// are ignored.
    #[must_use]
    pub fn from_map(config: &ConfigMap) -> Self {
        Self {
            namespace: DefaultNamespace::new(
                config.get(keys::DEFAULT_DATABASE).cloned(),
                config.get(keys::DEFAULT_SCHEMA).cloned(),
            ),
            jdbc_url: config.get(keys::JDBC_URL).cloned(),
        }
    }

    #[must_use]
    pub fn namespace(&self) -> &DefaultNamespace {
        &self.namespace
    }

    /// URL used to open the router's session.
    ///
    /// `jdbc_url` wins when set. Otherwise an embedded URL for the default
    /// database is synthesized as `jdbc:lealone:embed:<db>;password=;user=root`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabase`] when neither `jdbc_url` nor a
    /// default database is configured.
    pub fn connection_url(&self) -> Result<String, ConfigError> {
        if let Some(url) = &self.jdbc_url {
            return Ok(url.clone());
        }
        let database = self
            .namespace
            .database
            .as_deref()
            .ok_or(ConfigError::MissingDatabase)?;
        Ok(format!("{URL_PREFIX}{URL_EMBED}{database};password=;user=root"))
    }
}
