//! INSERT statement builder module

use super::common::QueryBuilder;
use crate::{FieldRef, Statement};

/// INSERT statement builder
///
/// Accumulates column names resolved from field accessors, in call order,
/// and emits `INSERT INTO <table>(<columns>) VALUES (<placeholders>)` with
/// one `?` per column. Parameter values must be bound in column order.
#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table_name: String,
    columns: Vec<String>,
}

impl InsertBuilder {
    /// Create a new INSERT statement builder for the given table
    pub fn new(table: &str) -> Self {
        Self {
            table_name: table.to_string(),
            columns: Vec::new(),
        }
    }

    /// Add columns to the statement, resolved from field accessors
    ///
    /// Columns accumulate across calls and keep their call order; duplicate
    /// columns are not deduplicated.
    ///
    /// # Examples
    /// ```
    /// use fieldsql::{accessor, insert, QueryBuilder};
    ///
    /// let stmt = insert("users")
    ///     .with([accessor!(getName), accessor!(getEmail)])
    ///     .build();
    ///
    /// assert_eq!(stmt, "INSERT INTO users(name, email) VALUES (?, ?)");
    /// ```
    pub fn with<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = FieldRef>,
    {
        for field in fields {
            self.columns.push(field.column_name());
        }
        self
    }
}

impl QueryBuilder for InsertBuilder {
    fn build(&self) -> Statement {
        if self.columns.is_empty() || self.table_name.trim().is_empty() {
            return Statement::incomplete();
        }

        let mut sql = String::new();

        sql.push_str("INSERT INTO ");
        sql.push_str(&self.table_name);

        // Column list
        sql.push('(');
        sql.push_str(&self.columns.join(", "));
        sql.push_str(")");

        // VALUES clause, one placeholder per column
        sql.push_str(" VALUES (");
        sql.push_str(&vec!["?"; self.columns.len()].join(", "));
        sql.push(')');

        Statement::new(sql, self.columns.len())
    }
}
