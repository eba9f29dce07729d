//! Statement builder module

pub mod common;
pub mod delete;
pub mod insert;
pub mod update;

// Re-export types from submodules
pub use common::QueryBuilder;
pub use delete::DeleteBuilder;
pub use insert::InsertBuilder;
pub use update::UpdateBuilder;
