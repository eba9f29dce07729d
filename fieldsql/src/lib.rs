//! fieldsql - parameterized SQL statements from typed field accessors
//!
//! This crate builds single-table INSERT, UPDATE and DELETE statements in a
//! fluent manner, deriving each column name from a typed accessor descriptor
//! instead of a hand-maintained string constant. The output is plain SQL
//! text with positional `?` placeholders; executing the statement and
//! binding parameter values, in placeholder order, is the caller's job.
//!
//! # Examples
//! ```
//! use fieldsql::{accessor, insert, update, delete, QueryBuilder};
//!
//! let stmt = insert("users")
//!     .with([accessor!(getName), accessor!(getEmail)])
//!     .build();
//! assert_eq!(stmt, "INSERT INTO users(name, email) VALUES (?, ?)");
//!
//! let stmt = update("users")
//!     .with([accessor!(getName)])
//!     .where_(accessor!(getId))
//!     .build();
//! assert_eq!(stmt, "UPDATE users SET name = ? WHERE id = ?");
//!
//! let stmt = delete("users").where_(accessor!(getId)).build();
//! assert_eq!(stmt, "DELETE FROM users WHERE id = ?");
//! ```

pub mod builder;
pub mod error;
pub mod field;
pub mod statement;

// Re-export main types
pub use builder::{DeleteBuilder, InsertBuilder, QueryBuilder, UpdateBuilder};
pub use error::{Error, Result};
pub use field::FieldRef;
pub use statement::Statement;

/// Create a new INSERT statement builder for the given table
pub fn insert(table: &str) -> InsertBuilder {
    InsertBuilder::new(table)
}

/// Create a new UPDATE statement builder for the given table
pub fn update(table: &str) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

/// Create a new DELETE statement builder for the given table
pub fn delete(table: &str) -> DeleteBuilder {
    DeleteBuilder::new(table)
}
