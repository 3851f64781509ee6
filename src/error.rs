//! Error types for cluster-inventory.
//!
//! Every derivation either returns a value or fails with one of these errors.
//! A [`Error::NotFound`] is a configuration error for the affected host: there
//! is no degraded mode, and retrying yields the same failure.

use thiserror::Error;

/// Result type alias for derivation operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for cluster-inventory.
#[derive(Error, Debug, Clone)]
pub enum Error {
    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// A required naming-convention match yielded nothing.
    #[error("{message}")]
    NotFound {
        /// Human readable description
        message: String,
        /// Naming prefix that was searched for, when relevant
        naming: Option<String>,
        /// Groups that were searched, when relevant
        groups: Vec<String>,
    },

    // ========================================================================
    // Naming Errors
    // ========================================================================
    /// A naming prefix is not a valid pattern fragment.
    #[error("Invalid naming pattern '{naming}': {source}")]
    InvalidNaming {
        /// The offending naming prefix
        naming: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create a not-found error with only a message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
            naming: None,
            groups: Vec::new(),
        }
    }

    /// Create a not-found error for a naming prefix searched over a group set.
    pub fn groups_not_found(
        message: impl Into<String>,
        naming: impl Into<String>,
        groups: &[impl AsRef<str>],
    ) -> Self {
        Error::NotFound {
            message: message.into(),
            naming: Some(naming.into()),
            groups: groups.iter().map(|g| g.as_ref().to_string()).collect(),
        }
    }

    /// Returns true for [`Error::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// The naming prefix attached to this error, if any.
    pub fn naming(&self) -> Option<&str> {
        match self {
            Error::NotFound { naming, .. } => naming.as_deref(),
            Error::InvalidNaming { naming, .. } => Some(naming),
        }
    }
}
