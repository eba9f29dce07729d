//! Error types for fieldsql

use thiserror::Error;

/// The main error type for fieldsql operations
#[derive(Error, Debug)]
pub enum Error {
    /// An accessor reference could not be resolved to a column name
    #[error("cannot resolve accessor '{accessor}' to a column name")]
    Resolution { accessor: String },
}

/// Convenience Result type for fieldsql operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new resolution error for the given accessor text
    pub fn resolution(accessor: impl Into<String>) -> Self {
        Self::Resolution {
            accessor: accessor.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_error_creation() {
        let err = Error::resolution("foo-bar");
        assert!(matches!(err, Error::Resolution { .. }));
        assert_eq!(
            err.to_string(),
            "cannot resolve accessor 'foo-bar' to a column name"
        );
    }
}
