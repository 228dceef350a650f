//! Error types for the Strategos library.
//!
//! All errors are represented by the [`StrategosError`] enum. The compiler
//! itself is total: empty plans, empty blocks, and zero-term blocks degrade
//! to empty output instead of erroring, so the only failure is asking for a
//! database the crate does not know.
//!
//! # Examples
//!
//! ```
//! use strategos::builder::get_builder;
//!
//! match get_builder("google_scholar") {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(e.to_string().contains("Unknown database")),
//! }
//! ```

use thiserror::Error;

/// The main error type for Strategos operations.
#[derive(Error, Debug)]
pub enum StrategosError {
    /// The requested database name matched none of the supported engines.
    #[error("Unknown database: {name}. Supported: {}", crate::dialect::supported_names())]
    UnknownDatabase {
        /// The name as the caller supplied it.
        name: String,
    },
}

/// Result type alias for operations that may fail with [`StrategosError`].
pub type Result<T> = std::result::Result<T, StrategosError>;

impl StrategosError {
    /// Create a new unknown-database error.
    pub fn unknown_database<S: Into<String>>(name: S) -> Self {
        StrategosError::UnknownDatabase { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_lists_valid_names() {
        let error = StrategosError::unknown_database("google_scholar");
        let message = error.to_string();

        assert!(message.contains("Unknown database"));
        assert!(message.contains("google_scholar"));
        for name in [
            "pubmed",
            "scopus",
            "arxiv",
            "openalex",
            "semanticscholar",
            "crossref",
        ] {
            assert!(message.contains(name), "missing {name} in: {message}");
        }
    }
}
