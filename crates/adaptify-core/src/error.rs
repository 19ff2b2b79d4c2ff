//! Error types for Adaptify core operations.
//!
//! Nothing in this crate is fatal to the site. Fallible primitives return
//! [`Result`], and the wrappers that implement "never surfaced to the user"
//! contracts (see [`crate::preferences::Preferences`]) log and swallow them.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Adaptify core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The preference storage backend rejected a read or write.
    #[error("Storage error for key '{key}': {reason}")]
    Storage {
        /// Key being accessed.
        key: String,
        /// Backend-specific reason.
        reason: String,
    },

    /// A stored appearance mode could not be parsed.
    #[error("Invalid appearance mode: {0}")]
    InvalidMode(String),

    /// A stored or requested language code is not supported.
    #[error("Unsupported language: {0}")]
    InvalidLanguage(String),

    /// A stored cookie consent decision could not be parsed.
    #[error("Invalid consent decision: {0}")]
    InvalidConsent(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Contact form input was rejected.
    #[error("Contact form invalid: {0}")]
    ContactForm(#[from] ContactFormError),

    /// File-backed preference store failure.
    #[error("File system error at {path}: {message}")]
    FileSystem {
        /// Path where the error occurred.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Build a storage error for `key`.
    pub fn storage(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Storage {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Reasons a contact form submission is rejected before it is sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ContactFormError {
    /// Name field is empty.
    #[error("name is required")]
    MissingName,
    /// Email field is empty.
    #[error("email is required")]
    MissingEmail,
    /// Email field does not look like an address.
    #[error("email address is not valid")]
    InvalidEmail,
    /// Message field is empty.
    #[error("message is required")]
    MissingMessage,
    /// Privacy consent checkbox is not ticked.
    #[error("privacy consent is required")]
    ConsentRequired,
}
