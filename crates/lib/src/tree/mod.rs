//! Configuration trees.
//!
//! [`Config`] is the root of a tree and the main entry point: it is always an
//! object, owns every node below it, and exposes path-based reads and writes.
//!
//! # Usage
//!
//! ```
//! use cfgtree::{Config, Value};
//!
//! let mut config = Config::new();
//! config.set("server.host", "localhost");
//! config.set("server.ports.+", 80);
//! config.set("server.ports.+", 443);
//!
//! assert_eq!(config.get_string("server.host"), "localhost");
//! assert_eq!(config.get_int_or("server.ports.1", 0), 443);
//! assert_eq!(
//!     config.get("server.ports.*")?.into_owned(),
//!     Value::from(vec![80, 443])
//! );
//! # Ok::<(), cfgtree::tree::TreeError>(())
//! ```

use std::{borrow::Cow, collections::hash_map, fmt};

use tracing::debug;

use crate::interpolate::{Delimiters, Interpolator};

pub mod array;
pub(crate) mod cast;
pub mod classify;
pub mod errors;
pub(crate) mod mutate;
pub(crate) mod navigate;
pub mod object;
pub mod path;
pub mod value;

pub use array::Array;
pub use errors::{TreeError, WriteError};
pub use object::Object;
pub use path::{Path, PathError, Segment};
pub use value::{NodeKind, Value};

/// The root of a configuration tree.
///
/// # Core Operations
///
/// - **Reads**: [`get`](Config::get) returns the value or an error;
///   [`get_default`](Config::get_default) and the typed `get_*` accessors
///   never fail and fall back to a default instead.
/// - **Writes**: [`set`](Config::set) creates missing containers and never
///   fails; invalid writes are dropped. [`try_set`](Config::try_set) reports
///   why a write was dropped.
/// - **Merging**: [`update`](Config::update) copies top-level entries over.
/// - **Templates**: [`prepare`](Config::prepare) substitutes `{{path}}`
///   markers in string leaves.
///
/// # Path syntax
///
/// Segments are separated by `.`. `*` addresses every entry of a container;
/// `+` appends to an array on writes; `$` addresses every array element;
/// all-digit segments index arrays. Against objects, every segment other than
/// `*` is a literal key.
///
/// ## Wildcards at the end of a path
///
/// A terminal `*` returns the container it is applied to, unchanged, for
/// objects and arrays alike.
///
/// ```
/// # use cfgtree::{Config, Value};
/// let mut config = Config::new();
/// config.set("users.+.name", "a");
/// config.set("users.+.name", "b");
///
/// let names = config.get("users.*.name").unwrap().into_owned();
/// assert_eq!(names, Value::from(vec!["a", "b"]));
///
/// // Out of range
/// assert!(config.get("users.5").unwrap_err().is_not_traversable());
/// assert_eq!(config.get_default("users.5", "z"), Value::from("z"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    root: Object,
}

impl Config {
    /// Creates a new empty tree
    pub fn new() -> Self {
        Self {
            root: Object::new(),
        }
    }

    /// Wraps an existing object as a tree root
    pub fn from_object(root: Object) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Object {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Object {
        &mut self.root
    }

    pub fn into_object(self) -> Object {
        self.root
    }

    /// Number of top-level keys
    pub fn len(&self) -> usize {
        self.root.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns true if `path` resolves to a non-null value
    pub fn contains_key(&self, path: &str) -> bool {
        self.get(path).is_ok_and(|value| !value.is_null())
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.root.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.root.keys()
    }

    /// Resolves a dotted path.
    ///
    /// Direct hits are borrowed from the tree. Paths that fan out through
    /// `*`, `$` or `+` produce a new array holding one entry per match;
    /// entries that fail to resolve are left out.
    ///
    /// # Errors
    ///
    /// - [`TreeError::InvalidPath`] for an empty path or empty segment
    /// - [`TreeError::NoValue`] when a key is absent or null
    /// - [`TreeError::NotTraversable`] when a scalar is hit before the path
    ///   ends; the scalar is carried in the error
    /// - [`TreeError::OutOfRange`] for an index past the end of an array
    pub fn get(&self, path: &str) -> Result<Cow<'_, Value>, TreeError> {
        let parsed: Path = path
            .parse()
            .map_err(|err: PathError| TreeError::invalid_path(path, err.to_string()))?;
        self.get_path(parsed.segments())
    }

    /// Resolves an already parsed path. See [`Config::get`].
    pub fn get_path(&self, segments: &[Segment]) -> Result<Cow<'_, Value>, TreeError> {
        navigate::resolve_object(&self.root, None, segments)
    }

    /// Resolves `path`, substituting `default` on any error or a null result
    pub fn get_default(&self, path: &str, default: impl Into<Value>) -> Value {
        match self.get(path) {
            Ok(value) if !value.is_null() => value.into_owned(),
            _ => default.into(),
        }
    }

    /// Gets a value as a string, or `""`
    pub fn get_string(&self, path: &str) -> String {
        self.get_string_or(path, "")
    }

    /// Gets a value as a string, or `default`.
    ///
    /// Numbers and booleans are formatted; containers render as compact
    /// JSON-like text.
    pub fn get_string_or(&self, path: &str, default: &str) -> String {
        cast::to_string(&self.get_default(path, default)).unwrap_or_else(|| default.to_string())
    }

    /// Gets a value as an integer, or `0`
    pub fn get_int(&self, path: &str) -> i64 {
        self.get_int_or(path, 0)
    }

    /// Gets a value as an integer, or `default`.
    ///
    /// Floats are truncated; numeric strings are parsed; booleans map to 0 and
    /// 1. `default` is returned both when nothing is stored at `path` and when
    /// the stored value cannot be cast, so `"app"` yields `default`, not 0.
    pub fn get_int_or(&self, path: &str, default: i64) -> i64 {
        cast::to_int(&self.get_default(path, default)).unwrap_or(default)
    }

    /// Gets a value as a float, or `0.0`
    pub fn get_float(&self, path: &str) -> f64 {
        self.get_float_or(path, 0.0)
    }

    /// Gets a value as a float, or `default`.
    ///
    /// As with [`Config::get_int_or`], a value that cannot be cast yields
    /// `default` rather than 0.0.
    pub fn get_float_or(&self, path: &str, default: f64) -> f64 {
        cast::to_float(&self.get_default(path, default)).unwrap_or(default)
    }

    /// Gets a value as a boolean, or `false`
    pub fn get_bool(&self, path: &str) -> bool {
        self.get_bool_or(path, false)
    }

    /// Gets a value as a boolean, or `default`.
    ///
    /// Non-zero numbers are true. Strings such as `yes`, `on`, `true` and `1`
    /// are true, their opposites false. Any other string, like a missing
    /// value, yields `default` rather than false.
    pub fn get_bool_or(&self, path: &str, default: bool) -> bool {
        cast::to_bool(&self.get_default(path, default)).unwrap_or(default)
    }

    /// Assigns `value` at `path`, creating intermediate containers as needed.
    ///
    /// Never fails. A write that cannot be applied (a malformed path, an array
    /// token opening the path, an index past the end of an array) is dropped
    /// without touching the tree, and the reason is logged at debug level.
    /// Use [`Config::try_set`] to observe it instead.
    ///
    /// An existing value of the wrong kind along the path is replaced, so
    /// setting `a.b` after `a` held a string turns `a` into an object. Digits
    /// and `$` applied to an existing object are plain keys: `codes.200`
    /// writes the key `"200"` when `codes` is an object.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) -> &mut Self {
        if let Err(err) = self.try_set(path, value) {
            debug!(path, error = %err, "Dropping write");
        }
        self
    }

    /// Assigns `value` at the parsed `segments`. See [`Config::set`].
    pub fn set_path(&mut self, segments: &[Segment], value: impl Into<Value>) -> &mut Self {
        if let Err(err) = mutate::set_in_object(&mut self.root, segments, value.into()) {
            debug!(path = %path::join(segments), error = %err, "Dropping write");
        }
        self
    }

    /// Assigns `value` at `path`, reporting writes that were dropped.
    ///
    /// A dropped write leaves the tree exactly as it was.
    pub fn try_set(&mut self, path: &str, value: impl Into<Value>) -> Result<&mut Self, WriteError> {
        let parsed: Path = path.parse().map_err(|err: PathError| WriteError::InvalidPath {
            path: path.to_string(),
            reason: err.to_string(),
        })?;
        mutate::set_in_object(&mut self.root, parsed.segments(), value.into())?;
        Ok(self)
    }

    /// Shallow merge: every top-level entry of `other` overwrites ours
    pub fn update(&mut self, other: Config) -> &mut Self {
        self.root.extend_from(other.root);
        self
    }

    /// Merges the object found at `path` into the root.
    ///
    /// Leaves the tree unchanged when `path` does not resolve to an object.
    pub fn update_by_path(&mut self, path: &str) -> &mut Self {
        match self.get(path).map(Cow::into_owned) {
            Ok(Value::Object(object)) => self.root.extend_from(object),
            Ok(other) => debug!(path, found = other.type_name(), "Not an object, nothing to merge"),
            Err(err) => debug!(path, error = %err, "Nothing to merge"),
        }
        self
    }

    /// Substitutes `left path right` markers in every string leaf.
    ///
    /// See the [`interpolate`](crate::interpolate) module for the exact
    /// single-pass semantics.
    pub fn prepare(&mut self, delimiters: &Delimiters) -> crate::Result<&mut Self> {
        let interpolator = Interpolator::new(delimiters)?;
        Ok(self.prepare_with(&interpolator))
    }

    /// Substitutes markers using an already compiled interpolator
    pub fn prepare_with(&mut self, interpolator: &Interpolator) -> &mut Self {
        let rewritten = interpolator.interpolate(self);
        debug!(rewritten, "Interpolated string leaves");
        self
    }

    /// Compact JSON-like rendering with sorted keys, for display.
    pub fn to_json_string(&self) -> String {
        self.root.to_json_string()
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

impl From<Object> for Config {
    fn from(root: Object) -> Self {
        Self::from_object(root)
    }
}

impl From<Config> for Value {
    fn from(config: Config) -> Self {
        Value::Object(config.root)
    }
}

impl FromIterator<(String, Value)> for Config {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self::from_object(iter.into_iter().collect())
    }
}

/// Builder pattern methods
impl Config {
    /// Builder method to set a value and return self
    pub fn with(mut self, path: &str, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }
}
