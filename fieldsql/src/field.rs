//! Field accessor descriptors and column name resolution
//!
//! A [`FieldRef`] identifies a single field of a caller's record type by the
//! name of its getter-style accessor (`getUserId`, `isActive`, ...). Builders
//! resolve each descriptor into the database column name it denotes: the
//! literal text `get` is stripped and the remainder is converted from
//! camelCase to lower snake_case.

use std::borrow::Cow;

use crate::{Error, Result};

/// A typed reference to one field of a caller-defined record type.
///
/// The descriptor carries only the originating accessor name; resolution to a
/// column name is deterministic, so equal descriptors always resolve to the
/// same column.
///
/// The checked way to obtain one is the [`accessor!`](crate::accessor) macro,
/// which takes a plain identifier and therefore cannot produce a malformed
/// descriptor. For accessor names only known at run time, use
/// [`FieldRef::new`], which validates the text.
///
/// # Examples
/// ```
/// use fieldsql::accessor;
///
/// let field = accessor!(getUserId);
/// assert_eq!(field.column_name(), "user_id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-support",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct FieldRef {
    accessor: Cow<'static, str>,
}

impl FieldRef {
    /// Create a descriptor from a static accessor name without validation.
    ///
    /// This is the expansion target of the [`accessor!`](crate::accessor)
    /// macro, which guarantees the text is a well-formed identifier. Prefer
    /// the macro over calling this directly.
    pub const fn from_static(accessor: &'static str) -> Self {
        Self {
            accessor: Cow::Borrowed(accessor),
        }
    }

    /// Create a descriptor from an accessor name supplied at run time.
    ///
    /// Returns [`Error::Resolution`] if the text is not a well-formed
    /// accessor identifier (empty, starts with a digit, or contains
    /// characters outside `[A-Za-z0-9_]`).
    ///
    /// # Examples
    /// ```
    /// use fieldsql::FieldRef;
    ///
    /// let field = FieldRef::new("getCreatedAt").unwrap();
    /// assert_eq!(field.column_name(), "created_at");
    ///
    /// assert!(FieldRef::new("created-at").is_err());
    /// ```
    pub fn new(accessor: impl Into<String>) -> Result<Self> {
        let accessor = accessor.into();
        if !is_accessor_name(&accessor) {
            return Err(Error::resolution(accessor));
        }
        Ok(Self {
            accessor: Cow::Owned(accessor),
        })
    }

    /// The originating accessor name this descriptor was built from
    pub fn accessor(&self) -> &str {
        &self.accessor
    }

    /// Resolve the descriptor into its database column name.
    ///
    /// Every occurrence of the literal text `get` is removed (matching the
    /// substring anywhere in the name, not just as a prefix), then the
    /// remainder is converted to lower snake_case. An accessor name like
    /// `getBudget` therefore loses both `get` substrings and resolves to
    /// `bud`; see the module tests for the documented hazard.
    pub fn column_name(&self) -> String {
        let stripped = self.accessor.replace("get", "");
        camel_to_snake(&stripped)
    }
}

/// Create a [`FieldRef`] from a getter-style accessor identifier.
///
/// The argument must be a plain Rust identifier, so the descriptor is
/// checked at compile time and resolution can never fail.
///
/// # Examples
/// ```
/// use fieldsql::accessor;
///
/// let field = accessor!(getFirstName);
/// assert_eq!(field.column_name(), "first_name");
/// ```
#[macro_export]
macro_rules! accessor {
    ($name:ident) => {
        $crate::FieldRef::from_static(stringify!($name))
    };
}

// Accessor names follow identifier rules: leading ASCII letter or
// underscore, then ASCII alphanumerics and underscores.
fn is_accessor_name(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Convert camelCase text to lower snake_case.
///
/// An underscore is inserted before every upper-case letter that directly
/// follows a lower-case letter, then the whole string is lower-cased. A run
/// of upper-case letters with no preceding lower-case letter (`ID`) is not
/// split. Empty input yields empty output.
fn camel_to_snake(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 4);
    let mut prev_lower = false;
    for c in text.chars() {
        if c.is_ascii_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_ascii_lowercase();
        result.push(c.to_ascii_lowercase());
    }
    result
}
