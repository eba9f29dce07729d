//! DELETE statement builder module

use super::common::QueryBuilder;
use crate::{FieldRef, Statement};

/// DELETE statement builder
///
/// Holds the table name plus a single condition column and emits
/// `DELETE FROM <table> WHERE <cond> = ?` with one placeholder for the
/// condition value.
#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table_name: String,
    condition_column: Option<String>,
}

impl DeleteBuilder {
    /// Create a new DELETE statement builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            condition_column: None,
        }
    }

    /// Set the WHERE condition column, resolved from a field accessor
    ///
    /// Calling this more than once overwrites the previous condition; only
    /// the last call is kept.
    ///
    /// # Examples
    /// ```
    /// use fieldsql::{accessor, delete, QueryBuilder};
    ///
    /// let stmt = delete("users").where_(accessor!(getId)).build();
    ///
    /// assert_eq!(stmt, "DELETE FROM users WHERE id = ?");
    /// ```
    pub fn where_(mut self, field: FieldRef) -> Self {
        self.condition_column = Some(field.column_name());
        self
    }
}

impl QueryBuilder for DeleteBuilder {
    /// The condition column is not validated: if [`where_`](Self::where_)
    /// was never called, the emitted text contains an empty condition token
    /// (`DELETE FROM <table> WHERE  = ?`).
    fn build(&self) -> Statement {
        if self.table_name.trim().is_empty() {
            return Statement::incomplete();
        }

        let mut sql = String::new();

        sql.push_str("DELETE FROM ");
        sql.push_str(&self.table_name);

        // WHERE clause
        sql.push_str(" WHERE ");
        sql.push_str(self.condition_column.as_deref().unwrap_or(""));
        sql.push_str(" = ?");

        Statement::new(sql, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accessor, delete};

    #[test]
    fn test_delete_builder() {
        let stmt = delete("users").where_(accessor!(getId)).build();
        assert_eq!(stmt, "DELETE FROM users WHERE id = ?");
        assert_eq!(stmt.placeholders(), 1);
    }

    #[test]
    fn test_delete_blank_table_is_incomplete() {
        let stmt = delete("").where_(accessor!(getId)).build();
        assert!(stmt.is_incomplete());

        let stmt = delete("  ").where_(accessor!(getId)).build();
        assert!(stmt.is_incomplete());
    }

    #[test]
    fn test_delete_without_condition_emits_empty_token() {
        // Known gap kept from the original design: build() does not check
        // that a condition column was set.
        let stmt = delete("users").build();
        assert_eq!(stmt, "DELETE FROM users WHERE  = ?");
    }

    #[test]
    fn test_last_where_call_wins() {
        let stmt = delete("users")
            .where_(accessor!(getEmail))
            .where_(accessor!(getId))
            .build();
        assert_eq!(stmt, "DELETE FROM users WHERE id = ?");
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = delete("users").where_(accessor!(getId));
        assert_eq!(builder.build(), builder.build());
    }
}
