//! Error types and exit codes for graf
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, rejected edge insertion)
//!
//! A search that finishes without reaching its target is not an error:
//! engines return `Ok` with an empty path.

mod macros;

use thiserror::Error;

/// Exit codes for the graf binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, invalid edge (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graf operations
#[derive(Error, Debug)]
pub enum GrafError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("invalid weight {weight} on edge {from} -> {to} (weights must be finite and non-negative)")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("traversal interrupted")]
    Interrupted,

    #[error("{0}")]
    Other(String),
}

impl GrafError {
    /// Create an error for a node identifier absent from the graph
    pub fn node_not_found(id: impl std::fmt::Display) -> Self {
        GrafError::NodeNotFound { id: id.to_string() }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GrafError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GrafError::UnknownFormat(_)
            | GrafError::UsageError(_)
            | GrafError::InvalidValue { .. } => ExitCode::Usage,

            GrafError::NodeNotFound { .. }
            | GrafError::InvalidOperation(_)
            | GrafError::InvalidWeight { .. } => ExitCode::Data,

            GrafError::Io(_)
            | GrafError::Json(_)
            | GrafError::Toml(_)
            | GrafError::Interrupted
            | GrafError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            GrafError::UnknownFormat(_) => "unknown_format",
            GrafError::UsageError(_) => "usage_error",
            GrafError::InvalidValue { .. } => "invalid_value",
            GrafError::NodeNotFound { .. } => "node_not_found",
            GrafError::InvalidOperation(_) => "invalid_operation",
            GrafError::InvalidWeight { .. } => "invalid_weight",
            GrafError::Io(_) => "io_error",
            GrafError::Json(_) => "json_error",
            GrafError::Toml(_) => "toml_error",
            GrafError::Interrupted => "interrupted",
            GrafError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graf operations
pub type Result<T> = std::result::Result<T, GrafError>;
