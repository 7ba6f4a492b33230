//! Error types for the FitTrack core
//!
//! This module defines error types using thiserror for ergonomic error handling.
//! Errors are categorized by domain (network, media, storage, file) so callers
//! can present meaningful messages and decide whether a retry makes sense.

use thiserror::Error;

/// Result type alias using our FitTrackError type
pub type Result<T> = std::result::Result<T, FitTrackError>;

/// Main error type for the FitTrack core
///
/// Each variant includes descriptive error messages and relevant context.
#[derive(Error, Debug)]
pub enum FitTrackError {
    // ===== Network / Media Errors =====

    /// Generic download failure
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    /// Network connectivity error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
        /// Whether this error might be transient
        is_transient: bool,
    },

    /// Server returned unexpected status code
    #[error("Server responded with unexpected status code: {status_code}")]
    UnexpectedStatusCode { status_code: u16, url: String },

    /// Remote locator could not be resolved to a fetchable URL
    #[error("Failed to resolve download URL for locator: {0}")]
    UrlResolutionFailed(String),

    /// Invalid download URL format or protocol
    #[error("Invalid download URL: {0}")]
    InvalidDownloadUrl(String),

    // ===== File Errors =====

    /// File or directory not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Generic file I/O error
    #[error("File I/O error: {0}")]
    FileIoError(String),

    /// Invalid file path
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Media directory doesn't exist and couldn't be created
    #[error("Media directory unavailable: {0}")]
    MediaDirectoryUnavailable(String),

    // ===== Database Errors =====

    /// Generic database error
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Database query execution failed
    #[error("Database query failed: {0}")]
    QueryFailed(String),

    /// Database schema migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Seeding premade content failed
    #[error("Database seeding failed: {0}")]
    SeedFailed(String),

    /// Database record not found
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    // ===== Configuration/State Errors =====

    /// Application state is invalid for the requested operation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Configuration is invalid or incomplete
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    /// Generic input validation error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ===== General Errors =====

    /// Operation timed out
    #[error("Operation timed out after {0} seconds")]
    Timeout(u64),

    /// Internal error that should not normally occur
    #[error("Internal error: {0}")]
    InternalError(String),

    // ===== External Library Errors =====
    // Automatic conversions from external error types

    /// HTTP client error from reqwest
    #[error("HTTP client error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),

    /// Database driver error from sqlx
    #[error("Database error: {0}")]
    SqlxError(#[from] sqlx::Error),

    /// URL parse error
    #[error("URL parse error: {0}")]
    UrlParseError(#[from] url::ParseError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper methods for creating common errors
impl FitTrackError {
    /// Create a RecordNotFound error with a resource name
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        FitTrackError::RecordNotFound(resource.into())
    }

    /// Create an InvalidInput error with a message
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        FitTrackError::InvalidInput(message.into())
    }

    /// Create an InternalError with a message
    pub fn internal<S: Into<String>>(message: S) -> Self {
        FitTrackError::InternalError(message.into())
    }

    /// Create a NetworkError
    pub fn network_error<S: Into<String>>(message: S, is_transient: bool) -> Self {
        FitTrackError::NetworkError {
            message: message.into(),
            is_transient,
        }
    }

    /// Check if error is retryable (network errors, timeouts, etc.)
    ///
    /// Returns `true` for transient errors that might succeed on a later
    /// sync run. The batch engine itself never retries within a run; this
    /// is for callers deciding whether to surface "try again" to the user.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            FitTrackError::NetworkError { is_transient: true, .. }
                | FitTrackError::Timeout(_)
                | FitTrackError::UnexpectedStatusCode { status_code: 500..=599, .. }
        )
    }

    /// Check if error is related to file/disk operations
    pub fn is_file_error(&self) -> bool {
        matches!(
            self,
            FitTrackError::FileNotFound(_)
                | FitTrackError::FileIoError(_)
                | FitTrackError::InvalidPath(_)
                | FitTrackError::MediaDirectoryUnavailable(_)
                | FitTrackError::IoError(_)
        )
    }

    /// Get user-friendly error message suitable for display
    ///
    /// Technical details are omitted where they wouldn't help the user.
    pub fn user_message(&self) -> String {
        match self {
            FitTrackError::NetworkError { .. } | FitTrackError::Timeout(_) => {
                "A network problem interrupted the operation. Please check your connection and try again.".to_string()
            }
            FitTrackError::UnexpectedStatusCode { .. } | FitTrackError::DownloadFailed(_) => {
                "Some exercise media could not be downloaded. Please try again later.".to_string()
            }
            FitTrackError::MediaDirectoryUnavailable(_) => {
                "The app's media folder is not accessible. Free up space or reinstall the app.".to_string()
            }
            FitTrackError::MigrationFailed(_) | FitTrackError::SeedFailed(_) => {
                "The workout database could not be initialized. Please restart the app.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<std::string::FromUtf8Error> for FitTrackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        FitTrackError::InternalError(format!("UTF-8 conversion error: {}", err))
    }
}

impl From<std::num::ParseIntError> for FitTrackError {
    fn from(err: std::num::ParseIntError) -> Self {
        FitTrackError::InvalidInput(format!("Failed to parse integer: {}", err))
    }
}
