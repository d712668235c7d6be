//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. All failures
//! here are terminal and local to the triggering operation: there is no
//! retry path and no transient-error class in this system.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication
    #[error("Invalid email or password")]
    InvalidCredentials,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    // Validation
    #[error("{0}")]
    Validation(String),

    /// Optional data a consumer asked for before its pipeline stage ran.
    /// Views are expected to default or hide the affected region instead of
    /// surfacing this; it only escapes when a caller demands the payload.
    #[error("{0} is not available yet")]
    AbsentData(String),

    // Storage errors
    #[error("Storage I/O error")]
    Io(#[from] std::io::Error),

    #[error("Storage encoding error")]
    Encoding(#[from] serde_json::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client surfaces
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::NotFound => "NOT_FOUND",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::AbsentData(_) => "ABSENT_DATA",
            AppError::Io(_) => "STORAGE_IO_ERROR",
            AppError::Encoding(_) => "STORAGE_ENCODING_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Show full message for caller errors
            AppError::Validation(msg) => msg.clone(),
            AppError::AbsentData(what) => format!("{} is not available yet", what),

            // Hide details for storage/internal errors
            AppError::Io(e) => {
                tracing::error!("storage I/O error: {:?}", e);
                "A storage error occurred".to_string()
            }
            AppError::Encoding(e) => {
                tracing::error!("storage encoding error: {:?}", e);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;

    /// Treat a missing optional payload as an `AbsentData` error,
    /// naming the thing that is missing.
    fn ok_or_absent(self, what: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }

    fn ok_or_absent(self, what: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::AbsentData(what.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn absent(what: impl Into<String>) -> Self {
        AppError::AbsentData(what.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Flatten validator errors into a single user-facing message.
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
