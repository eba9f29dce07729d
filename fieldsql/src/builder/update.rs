//! UPDATE statement builder module

use super::common::QueryBuilder;
use crate::{FieldRef, Statement};

/// UPDATE statement builder
///
/// Accumulates SET column names plus a single condition column and emits
/// `UPDATE <table> SET <c> = ?, ... WHERE <cond> = ?`. Parameter values bind
/// in SET-list order, condition value last.
#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table_name: String,
    set_columns: Vec<String>,
    condition_column: Option<String>,
}

impl UpdateBuilder {
    /// Create a new UPDATE statement builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            set_columns: Vec::new(),
            condition_column: None,
        }
    }

    /// Add columns to the SET clause, resolved from field accessors
    ///
    /// Columns accumulate across calls and keep their call order.
    pub fn with<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = FieldRef>,
    {
        for field in fields {
            self.set_columns.push(field.column_name());
        }
        self
    }

    /// Set the WHERE condition column, resolved from a field accessor
    ///
    /// Calling this more than once overwrites the previous condition; only
    /// the last call is kept.
    ///
    /// # Examples
    /// ```
    /// use fieldsql::{accessor, update, QueryBuilder};
    ///
    /// let stmt = update("users")
    ///     .with([accessor!(getName)])
    ///     .where_(accessor!(getId))
    ///     .build();
    ///
    /// assert_eq!(stmt, "UPDATE users SET name = ? WHERE id = ?");
    /// ```
    pub fn where_(mut self, field: FieldRef) -> Self {
        self.condition_column = Some(field.column_name());
        self
    }
}

impl QueryBuilder for UpdateBuilder {
    /// The condition column is not validated: if [`where_`](Self::where_)
    /// was never called, the emitted text contains an empty condition token
    /// (`... WHERE  = ?`).
    fn build(&self) -> Statement {
        if self.set_columns.is_empty() || self.table_name.trim().is_empty() {
            return Statement::incomplete();
        }

        let mut sql = String::new();

        sql.push_str("UPDATE ");
        sql.push_str(&self.table_name);

        // SET clause
        sql.push_str(" SET ");
        sql.push_str(&self.set_columns.join(" = ?, "));
        sql.push_str(" = ?");

        // WHERE clause, condition value binds last
        sql.push_str(" WHERE ");
        sql.push_str(self.condition_column.as_deref().unwrap_or(""));
        sql.push_str(" = ?");

        Statement::new(sql, self.set_columns.len() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{accessor, update};

    #[test]
    fn test_update_builder() {
        let stmt = update("users")
            .with([accessor!(getName)])
            .where_(accessor!(getId))
            .build();
        assert_eq!(stmt, "UPDATE users SET name = ? WHERE id = ?");
        assert_eq!(stmt.placeholders(), 2);
    }

    #[test]
    fn test_update_multiple_set_columns() {
        let stmt = update("users")
            .with([accessor!(getName), accessor!(getEmail)])
            .where_(accessor!(getId))
            .build();
        assert_eq!(stmt, "UPDATE users SET name = ?, email = ? WHERE id = ?");
        assert_eq!(stmt.placeholders(), 3);
    }

    #[test]
    fn test_update_without_set_columns_is_incomplete() {
        let stmt = update("users").where_(accessor!(getId)).build();
        assert!(stmt.is_incomplete());
    }

    #[test]
    fn test_update_blank_table_is_incomplete() {
        let stmt = update(" \t")
            .with([accessor!(getName)])
            .where_(accessor!(getId))
            .build();
        assert!(stmt.is_incomplete());
    }

    #[test]
    fn test_update_without_condition_emits_empty_token() {
        // Known gap kept from the original design: build() does not check
        // that a condition column was set.
        let stmt = update("users").with([accessor!(getName)]).build();
        assert_eq!(stmt, "UPDATE users SET name = ? WHERE  = ?");
    }

    #[test]
    fn test_last_where_call_wins() {
        let stmt = update("users")
            .with([accessor!(getName)])
            .where_(accessor!(getEmail))
            .where_(accessor!(getId))
            .build();
        assert_eq!(stmt, "UPDATE users SET name = ? WHERE id = ?");
    }

    #[test]
    fn test_with_accumulates_in_call_order() {
        let chained = update("users")
            .with([accessor!(getName)])
            .with([accessor!(getEmail)])
            .where_(accessor!(getId))
            .build();
        let single = update("users")
            .with([accessor!(getName), accessor!(getEmail)])
            .where_(accessor!(getId))
            .build();
        assert_eq!(chained, single);
    }

    #[test]
    fn test_build_is_idempotent() {
        let builder = update("users")
            .with([accessor!(getName)])
            .where_(accessor!(getId));
        assert_eq!(builder.build(), builder.build());
    }
}
