//! Transport configuration read from the shared configuration map.

use crate::service::config::{keys, ConfigError, ConfigMap};

/// Settings a transport reads from the same map the router is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpServerConfig {
    /// Directory of static files served by the transport, if any.
    pub web_root: Option<String>,
    /// Connection URL override, shared with the router's `jdbc_url`.
    pub jdbc_url: Option<String>,
    /// Bind address for the server.
    pub host: String,
    /// Port to listen on. 0 means OS-assigned.
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            web_root: None,
            jdbc_url: None,
            host: "0.0.0.0".to_string(),
            port: 0,
        }
    }
}

impl HttpServerConfig {
    /// Reads `web_root`, `jdbc_url`, `host` and `port`, keeping defaults for
    /// missing keys.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] if `port` is not a valid `u16`.
    pub fn from_map(config: &ConfigMap) -> Result<Self, ConfigError> {
        let mut out = Self::default();
        if let Some(web_root) = config.get(keys::WEB_ROOT) {
            out.web_root = Some(web_root.clone());
        }
        if let Some(url) = config.get(keys::JDBC_URL) {
            out.jdbc_url = Some(url.clone());
        }
        if let Some(host) = config.get(keys::HOST) {
            out.host.clone_from(host);
        }
        if let Some(port) = config.get(keys::PORT) {
            out.port = port.parse().map_err(|source| ConfigError::InvalidNumber {
                key: keys::PORT,
                value: port.clone(),
                source,
            })?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_server_config_defaults() {
        let config = HttpServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 0);
        assert!(config.web_root.is_none());
        assert!(config.jdbc_url.is_none());
    }

    #[test]
    fn from_map_reads_all_keys() {
        let map: ConfigMap = [
            ("web_root", "./web"),
            ("jdbc_url", "jdbc:lealone:embed:db"),
            ("host", "127.0.0.1"),
            ("port", "9000"),
            ("default_database", "db"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = HttpServerConfig::from_map(&map).unwrap();
        assert_eq!(config.web_root.as_deref(), Some("./web"));
        assert_eq!(config.jdbc_url.as_deref(), Some("jdbc:lealone:embed:db"));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn from_map_rejects_bad_port() {
        let map: ConfigMap = [("port".to_string(), "http".to_string())].into_iter().collect();
        let err = HttpServerConfig::from_map(&map).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidNumber { key: "port", .. }));
    }
}
