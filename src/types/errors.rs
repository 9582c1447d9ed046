use std::fmt;

// === LibraryError ===

/// Errors related to bookmark library operations.
#[derive(Debug)]
pub enum LibraryError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// The target folder was not found.
    FolderNotFound(String),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            LibraryError::FolderNotFound(id) => write!(f, "Folder not found: {}", id),
        }
    }
}

impl std::error::Error for LibraryError {}

// === ConfigError ===

/// Errors related to client configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// A required configuration value is absent.
    MissingConfig(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingConfig(what) => {
                write!(f, "Missing required configuration: {}", what)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// === ApiError ===

/// Errors related to the remote data-access client.
#[derive(Debug)]
pub enum ApiError {
    /// A network or transport error occurred.
    NetworkError(String),
    /// The service returned a non-success status.
    StatusError(u16),
    /// Failed to deserialize a response body.
    DecodeError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NetworkError(msg) => write!(f, "API network error: {}", msg),
            ApiError::StatusError(code) => write!(f, "API returned status {}", code),
            ApiError::DecodeError(msg) => write!(f, "API decode error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}
