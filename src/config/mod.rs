//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Complete service configuration
///
/// Every section and key is optional; missing values take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookshelfConfig {
    pub server: ServerConfig,
    pub graphql: GraphQLConfig,
    pub store: StoreConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,

    /// Attach a permissive CORS layer
    pub cors: bool,
}

/// GraphQL exposure settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphQLConfig {
    /// Endpoint path; playground and SDL live under it
    pub path: String,

    /// Serve the GraphQL Playground UI at `{path}/playground`
    pub playground: bool,
}

/// In-memory store settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Load the built-in two-book dataset at startup
    pub seed: bool,

    /// Optional YAML file with extra books, appended after the built-in seed
    pub seed_file: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            cors: true,
        }
    }
}

impl Default for GraphQLConfig {
    fn default() -> Self {
        Self {
            path: "/graphql".to_string(),
            playground: true,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: true,
            seed_file: None,
        }
    }
}

impl BookshelfConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = ConfigError::read_file(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.to_string()),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            file: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the server cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: self.server.host.clone(),
                message: "host must not be empty".to_string(),
            });
        }

        let path = &self.graphql.path;
        if !path.starts_with('/') || path.ends_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "graphql.path".to_string(),
                value: path.clone(),
                message: "path must start with '/' and not end with '/'".to_string(),
            });
        }

        Ok(())
    }

    /// `host:port` for the TCP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BookshelfConfig::default();

        assert_eq!(config.listen_addr(), "127.0.0.1:4000");
        assert_eq!(config.graphql.path, "/graphql");
        assert!(config.graphql.playground);
        assert!(config.store.seed);
        assert!(config.store.seed_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
server:
  port: 8080
store:
  seed: false
"#;
        let config = BookshelfConfig::from_yaml_str(yaml).unwrap();

        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.store.seed);
        assert_eq!(config.graphql, GraphQLConfig::default());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = BookshelfConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = BookshelfConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_graphql_path() {
        let yaml = r#"
graphql:
  path: graphql
"#;
        let err = BookshelfConfig::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "graphql.path"));
    }

    #[test]
    fn test_graphql_path_trailing_slash_rejected() {
        for path in ["/api/", "/"] {
            let yaml = format!("graphql:\n  path: {}\n", path);
            let err = BookshelfConfig::from_yaml_str(&yaml).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue { ref value, .. } if value == path),
                "{} should be rejected",
                path
            );
        }

        let config = BookshelfConfig::from_yaml_str("graphql:\n  path: /api/graphql\n").unwrap();
        assert_eq!(config.graphql.path, "/api/graphql");
    }

    #[test]
    fn test_empty_host_rejected() {
        let mut config = BookshelfConfig::default();
        config.server.host = "  ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let err = BookshelfConfig::from_yaml_str("server: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { file: None, .. }));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  host: 0.0.0.0\ngraphql:\n  playground: false").unwrap();

        let path = file.path().to_str().unwrap();
        let config = BookshelfConfig::from_yaml_file(path).unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.graphql.playground);
    }

    #[test]
    fn test_missing_file() {
        let err = BookshelfConfig::from_yaml_file("/no/such/bookshelf.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }
}
