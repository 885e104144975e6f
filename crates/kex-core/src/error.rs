//! Error types and exit codes for kex
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, malformed config)
//! - 3: Record store error (search, delete, analyze or transport failure)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Record store error (3)
    Store = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during kex operations
#[derive(Error, Debug)]
pub enum KexError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("invalid config in {path}: {reason}")]
    InvalidConfig { path: String, reason: String },

    // Record store errors (exit code 3)
    #[error("topic catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("search failed: {reason}")]
    QueryFailed { reason: String },

    #[error("Failed to delete analysis {id}: {reason}")]
    DeleteFailed { id: String, reason: String },

    #[error("Deleted analysis {id}, but refreshing the list failed: {reason}")]
    RefreshFailed { id: String, reason: String },

    #[error("analysis failed: {reason}")]
    AnalyzeFailed { reason: String },

    #[error("record store responded with status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("transport error for {url}: {reason}")]
    Transport { url: String, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl KexError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        KexError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed local operation
    pub fn failed(operation: &str, error: impl std::fmt::Display) -> Self {
        KexError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Wrap a store-level failure as a search failure
    pub fn query_failed(error: impl std::fmt::Display) -> Self {
        KexError::QueryFailed {
            reason: error.to_string(),
        }
    }

    /// Wrap a store-level failure as a delete failure for `id`
    pub fn delete_failed(id: &str, error: impl std::fmt::Display) -> Self {
        KexError::DeleteFailed {
            id: id.to_string(),
            reason: error.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            KexError::UnknownFormat(_)
            | KexError::DuplicateFormat
            | KexError::UsageError(_)
            | KexError::InvalidValue { .. }
            | KexError::InvalidConfig { .. } => ExitCode::Usage,

            KexError::CatalogUnavailable { .. }
            | KexError::QueryFailed { .. }
            | KexError::DeleteFailed { .. }
            | KexError::RefreshFailed { .. }
            | KexError::AnalyzeFailed { .. }
            | KexError::Status { .. }
            | KexError::Transport { .. } => ExitCode::Store,

            KexError::Io(_)
            | KexError::Json(_)
            | KexError::FailedOperation { .. }
            | KexError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            KexError::UnknownFormat(_) => "unknown_format",
            KexError::DuplicateFormat => "duplicate_format",
            KexError::UsageError(_) => "usage_error",
            KexError::InvalidValue { .. } => "invalid_value",
            KexError::InvalidConfig { .. } => "invalid_config",
            KexError::CatalogUnavailable { .. } => "catalog_unavailable",
            KexError::QueryFailed { .. } => "query_failed",
            KexError::DeleteFailed { .. } => "delete_failed",
            KexError::RefreshFailed { .. } => "refresh_failed",
            KexError::AnalyzeFailed { .. } => "analyze_failed",
            KexError::Status { .. } => "status",
            KexError::Transport { .. } => "transport",
            KexError::Io(_) => "io_error",
            KexError::Json(_) => "json_error",
            KexError::FailedOperation { .. } => "failed_operation",
            KexError::Other(_) => "other",
        }
    }

    /// Message shown to an interactive user for a recoverable failure.
    pub fn user_message(&self) -> String {
        match self {
            KexError::QueryFailed { reason } => format!("Failed to search analyses: {}", reason),
            KexError::DeleteFailed { .. } => "Failed to delete analysis".to_string(),
            KexError::AnalyzeFailed { reason } => format!("Failed to analyze text: {}", reason),
            other => other.to_string(),
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

/// Result type alias for kex operations
pub type Result<T> = std::result::Result<T, KexError>;
