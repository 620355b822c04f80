//! Typed error handling for the bookshelf service
//!
//! Every fallible store, config or server operation returns a
//! [`BookshelfError`], so callers can match on the specific category instead
//! of inspecting strings.
//!
//! # Error Categories
//!
//! - [`BookError`]: domain rule violations on book operations
//! - [`StorageError`]: failures of the underlying store
//! - [`ConfigError`]: configuration loading and validation
//!
//! Absent records are not errors: lookups return `Ok(None)`.
//!
//! # Example
//!
//! ```rust,ignore
//! match service.create(new_book).await {
//!     Ok(book) => println!("created {}", book.id),
//!     Err(BookshelfError::Book(BookError::DuplicateTitle { title })) => {
//!         println!("'{}' is already on the shelf", title);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Message returned when a title is already taken
pub const TITLE_MUST_BE_UNIQUE: &str = "El título debe ser único";

/// Machine-readable code for caller input errors
pub const BAD_USER_INPUT: &str = "BAD_USER_INPUT";

/// The main error type of the service
#[derive(Debug, Error)]
pub enum BookshelfError {
    /// Book domain errors
    #[error(transparent)]
    Book(#[from] BookError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error body for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl BookshelfError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookshelfError::Book(e) => e.status_code(),
            BookshelfError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            BookshelfError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            BookshelfError::Book(e) => e.error_code(),
            BookshelfError::Storage(_) => "STORAGE_ERROR",
            BookshelfError::Config(_) => "CONFIG_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            BookshelfError::Book(BookError::DuplicateTitle { title }) => {
                Some(serde_json::json!({ "field": "title", "value": title }))
            }
            BookshelfError::Config(ConfigError::InvalidValue { field, value, .. }) => {
                Some(serde_json::json!({ "field": field, "value": value }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for BookshelfError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Book Errors
// =============================================================================

/// Domain rule violations on book operations
#[derive(Debug, Error)]
pub enum BookError {
    /// Another book already carries this title
    #[error("{}", TITLE_MUST_BE_UNIQUE)]
    DuplicateTitle { title: String },
}

impl BookError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookError::DuplicateTitle { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            BookError::DuplicateTitle { .. } => BAD_USER_INPUT,
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Failures of the book store itself
#[derive(Debug, Error)]
pub enum StorageError {
    /// A writer panicked while holding the store lock
    #[error("Failed to acquire {operation} lock on book store")]
    LockPoisoned { operation: &'static str },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration and seed files
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading a file
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },

    /// Failed to parse YAML content
    #[error("Failed to parse {}: {message}", .file.as_deref().unwrap_or("config"))]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl ConfigError {
    /// Read a file, mapping a missing path to [`ConfigError::FileNotFound`]
    pub fn read_file(path: &str) -> Result<String, ConfigError> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.to_string(),
            },
            _ => ConfigError::Io {
                path: path.to_string(),
                message: e.to_string(),
            },
        })
    }
}

pub type Result<T, E = BookshelfError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn duplicate() -> BookshelfError {
        BookError::DuplicateTitle {
            title: "City of Glass".to_string(),
        }
        .into()
    }

    #[test]
    fn test_duplicate_title_is_bad_user_input() {
        let err = duplicate();

        assert_eq!(err.error_code(), "BAD_USER_INPUT");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), TITLE_MUST_BE_UNIQUE);
    }

    #[test]
    fn test_duplicate_title_response_details() {
        let response = duplicate().to_response();

        assert_eq!(response.code, "BAD_USER_INPUT");
        assert_eq!(response.message, "El título debe ser único");
        let details = response.details.unwrap();
        assert_eq!(details["field"], "title");
        assert_eq!(details["value"], "City of Glass");
    }

    #[test]
    fn test_storage_error_is_internal() {
        let err: BookshelfError = StorageError::LockPoisoned { operation: "write" }.into();

        assert_eq!(err.error_code(), "STORAGE_ERROR");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("write lock"));
        assert!(err.to_response().details.is_none());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::ParseError {
            file: Some("bookshelf.yaml".to_string()),
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse bookshelf.yaml: bad indent");

        let err = ConfigError::ParseError {
            file: None,
            message: "bad indent".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to parse config: bad indent");
    }

    #[test]
    fn test_read_missing_file() {
        let err = ConfigError::read_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_into_response_status() {
        let response = duplicate().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
