//! Common trait shared across all statement builders

use crate::Statement;

/// Core trait for all statement builders
pub trait QueryBuilder {
    /// Assemble the statement text from the builder's current state.
    ///
    /// Never fails and never mutates the builder: missing required state
    /// (blank table name, empty column list) yields
    /// [`Statement::incomplete`] instead of an error, and repeated calls on
    /// unchanged state return equal statements.
    fn build(&self) -> Statement;
}
