//!
//! cfgtree: path-addressable configuration trees.
//! This library loads hierarchical configuration data and lets callers read and write it through dotted paths.
//!
//! ## Core Concepts
//!
//! * **Trees (`tree::Config`)**: The root of a configuration, always an object. Owns every node below it.
//! * **Values (`tree::Value`)**: A node in the tree: an object, an array, or a scalar (null, bool, integer, float, string).
//! * **Paths (`tree::Path`)**: Dotted addresses such as `servers.0.host`, with the special segments:
//!     * `*`: every entry of a container; fans a read out into an array of matches.
//!     * `+`: append to an array on writes.
//!     * `$`: every element of an array; a plain key against anything else.
//!     * digits: an array index; a plain key against an object.
//! * **Interpolation (`interpolate`)**: `{{path}}` markers in string leaves are substituted with values from the same tree.
//! * **Decoding (`decode`)**: JSON, YAML and XML input, normalized eagerly into tree nodes.
//! * **Registries (`registry::Registry`)**: Named collections of trees owned by the caller.

pub mod decode;
pub mod interpolate;
pub mod registry;
pub mod tree;

/// Re-export the main types for easier access.
pub use decode::{DecodeError, Format};
pub use interpolate::{Delimiters, Interpolator};
pub use registry::Registry;
pub use tree::{Config, Path, Segment, TreeError, Value, WriteError};

/// Result type used throughout the cfgtree library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the cfgtree library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structured read errors from the tree module
    #[error(transparent)]
    Tree(tree::TreeError),

    /// Dropped writes reported by `Config::try_set`
    #[error(transparent)]
    Write(tree::WriteError),

    /// Structured decode errors from the decode module
    #[error(transparent)]
    Decode(decode::DecodeError),

    /// Pattern errors from the interpolate module
    #[error(transparent)]
    Interpolate(interpolate::InterpolateError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Io(_) => "io",
            Error::Tree(_) => "tree",
            Error::Write(_) => "tree",
            Error::Decode(_) => "decode",
            Error::Interpolate(_) => "interpolate",
        }
    }

    /// Check if this error indicates a value was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_not_found(),
            Error::Io(io_err) => io_err.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if this error is a malformed or misplaced path.
    pub fn is_invalid_path(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_invalid_path(),
            Error::Write(write_err) => write_err.is_invalid_path(),
            _ => false,
        }
    }

    /// Check if this error indicates an array index past the end.
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Error::Tree(tree_err) => tree_err.is_out_of_range(),
            Error::Write(write_err) => write_err.is_out_of_range(),
            _ => false,
        }
    }

    /// Check if this error came from decoding input data.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    /// Check if this error is an unknown format tag.
    pub fn is_invalid_format(&self) -> bool {
        match self {
            Error::Decode(decode_err) => decode_err.is_invalid_format(),
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
