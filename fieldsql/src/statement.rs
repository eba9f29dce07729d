//! Assembled statement output type

use std::fmt;

/// The result of building a statement: the SQL text plus the number of
/// positional `?` placeholders the caller must bind, in the order they
/// appear in the text.
///
/// A builder with missing required state produces the
/// [incomplete](Statement::incomplete) sentinel instead of failing; its text
/// is the empty string, so callers treating "empty string = not ready" keep
/// working, while tests can assert on [`is_incomplete`](Statement::is_incomplete)
/// rather than matching empty text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Statement {
    sql: String,
    placeholders: usize,
}

impl Statement {
    pub(crate) fn new(sql: String, placeholders: usize) -> Self {
        Self { sql, placeholders }
    }

    /// The sentinel for a builder whose required state is missing
    pub fn incomplete() -> Self {
        Self {
            sql: String::new(),
            placeholders: 0,
        }
    }

    /// The assembled SQL text
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Number of positional placeholders to bind, in text order
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    /// Whether this is the sentinel for missing builder state
    pub fn is_incomplete(&self) -> bool {
        self.sql.is_empty()
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sql)
    }
}

impl AsRef<str> for Statement {
    fn as_ref(&self) -> &str {
        &self.sql
    }
}

impl PartialEq<str> for Statement {
    fn eq(&self, other: &str) -> bool {
        self.sql == other
    }
}

impl PartialEq<&str> for Statement {
    fn eq(&self, other: &&str) -> bool {
        self.sql == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_sentinel() {
        let stmt = Statement::incomplete();
        assert!(stmt.is_incomplete());
        assert_eq!(stmt.sql(), "");
        assert_eq!(stmt.placeholders(), 0);
    }

    #[test]
    fn test_complete_statement() {
        let stmt = Statement::new("DELETE FROM users WHERE id = ?".to_string(), 1);
        assert!(!stmt.is_incomplete());
        assert_eq!(stmt, "DELETE FROM users WHERE id = ?");
        assert_eq!(stmt.placeholders(), 1);
        assert_eq!(stmt.to_string(), "DELETE FROM users WHERE id = ?");
    }
}
