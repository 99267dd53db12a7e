//! Error types for tree reads and writes.
//!
//! Reads report a [`TreeError`] to the caller. Writes through
//! [`Config::set`](crate::Config::set) never fail; the same failures are only
//! surfaced as a [`WriteError`] by [`Config::try_set`](crate::Config::try_set).

use thiserror::Error;

use super::value::Value;

/// Structured error types for path reads.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeError {
    /// The path was empty or contained an empty segment
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// A key along the path is absent or explicitly null
    #[error("No value at key '{key}'")]
    NoValue { key: String },

    /// A scalar was reached before the path was exhausted.
    ///
    /// The scalar is carried along since some callers accept a
    /// non-traversable final hop as the answer.
    #[error("Value at '{key}' is not traversable ({})", value.type_name())]
    NotTraversable { key: String, value: Box<Value> },

    /// An array index beyond the end of the array
    #[error("Index {index} out of range for array of length {len}")]
    OutOfRange { index: usize, len: usize },
}

impl TreeError {
    pub(crate) fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
        TreeError::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn not_traversable(key: impl Into<String>, value: &Value) -> Self {
        TreeError::NotTraversable {
            key: key.into(),
            value: Box::new(value.clone()),
        }
    }

    /// Check if this error is a malformed path
    pub fn is_invalid_path(&self) -> bool {
        matches!(self, TreeError::InvalidPath { .. })
    }

    /// Check if this error indicates a missing or null value
    pub fn is_not_found(&self) -> bool {
        matches!(self, TreeError::NoValue { .. })
    }

    /// Check if the walk stopped at something it could not descend into.
    ///
    /// Out-of-range indices are reported as not traversable as well.
    pub fn is_not_traversable(&self) -> bool {
        matches!(
            self,
            TreeError::NotTraversable { .. } | TreeError::OutOfRange { .. }
        )
    }

    /// Check if this error is an out-of-range array index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, TreeError::OutOfRange { .. })
    }

    /// The scalar the walk stopped at, if any
    pub fn partial_value(&self) -> Option<&Value> {
        match self {
            TreeError::NotTraversable { value, .. } => Some(value),
            _ => None,
        }
    }

    /// Consumes the error, returning the scalar the walk stopped at
    pub fn into_partial_value(self) -> Option<Value> {
        match self {
            TreeError::NotTraversable { value, .. } => Some(*value),
            _ => None,
        }
    }
}

/// Reasons a write was dropped.
///
/// [`Config::set`](crate::Config::set) swallows these and leaves the tree
/// untouched at the failing location.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The path could not be parsed
    #[error("Invalid path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    /// The first segment addresses an array but the root is always an object
    #[error("Path '{path}' starts with array token '{segment}' but the root is an object")]
    ArrayTokenAtRoot { path: String, segment: String },

    /// The last segment is an array token in object context
    #[error("Array token '{segment}' cannot be assigned as a key")]
    ArrayTokenAsLeaf { segment: String },

    /// An array index beyond the end of the array; arrays never grow on index writes
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A broadcast over the elements of something that is not an array
    #[error("Cannot broadcast '{segment}' over a value of type {found}")]
    NotAnArray {
        segment: String,
        found: &'static str,
    },

    /// A literal key was used inside an array
    #[error("Key '{key}' cannot address an array element")]
    KeyInArray { key: String },
}

impl WriteError {
    /// Check if this error is a malformed or misplaced path
    pub fn is_invalid_path(&self) -> bool {
        matches!(
            self,
            WriteError::InvalidPath { .. }
                | WriteError::ArrayTokenAtRoot { .. }
                | WriteError::ArrayTokenAsLeaf { .. }
                | WriteError::KeyInArray { .. }
        )
    }

    /// Check if this error is a broadcast against a node that is not an array
    pub fn is_not_an_array(&self) -> bool {
        matches!(self, WriteError::NotAnArray { .. })
    }

    /// Check if this error is an out-of-range array index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, WriteError::IndexOutOfRange { .. })
    }
}

impl From<TreeError> for crate::Error {
    fn from(err: TreeError) -> Self {
        crate::Error::Tree(err)
    }
}

impl From<WriteError> for crate::Error {
    fn from(err: WriteError) -> Self {
        crate::Error::Write(err)
    }
}
