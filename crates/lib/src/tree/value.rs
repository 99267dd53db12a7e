//! Value types for configuration trees.
//!
//! [`Value`] is the single recursive node type of a tree. A node is either a
//! container ([`Value::Object`], [`Value::Array`]) or a scalar leaf.

use std::{collections::HashMap, fmt};

use super::{array::Array, object::Object};

/// Shape of a node as seen by the traversal engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// String-keyed mapping
    Object,
    /// Ordered sequence
    Array,
    /// Anything else, including null
    Scalar,
}

/// A node of a configuration tree.
///
/// # Value Types
///
/// ## Scalars (leaves)
/// - [`Value::Null`] - explicit null, kept rather than omitted
/// - [`Value::Bool`] - booleans
/// - [`Value::Int`] - 64-bit signed integers
/// - [`Value::Float`] - 64-bit floats
/// - [`Value::Text`] - UTF-8 strings, the only leaves interpolation rewrites
///
/// ## Containers
/// - [`Value::Object`] - nested string-keyed mapping
/// - [`Value::Array`] - ordered sequence
///
/// `Value` compares directly with primitives:
///
/// ```
/// # use cfgtree::Value;
/// let text = Value::Text("hello".to_string());
/// let number = Value::Int(42);
///
/// assert!(text == "hello");
/// assert!(number == 42);
/// assert!(!(text == 42));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Object(Object),
    Array(Array),
}

impl Value {
    /// Classifies this node for traversal
    pub fn kind(&self) -> NodeKind {
        match self {
            Value::Object(_) => NodeKind::Object,
            Value::Array(_) => NodeKind::Array,
            _ => NodeKind::Scalar,
        }
    }

    /// Returns true if this is a scalar leaf
    pub fn is_scalar(&self) -> bool {
        self.kind() == NodeKind::Scalar
    }

    /// Returns true if a path may continue through this node
    pub fn is_container(&self) -> bool {
        !self.is_scalar()
    }

    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Object(_) => "object",
            Value::Array(_) => "array",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Value::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Converts to a JSON-like string for display and debugging.
    ///
    /// Object keys are sorted so the output is stable. This is not a
    /// serialization format; nothing reads it back.
    ///
    /// ```
    /// # use cfgtree::Value;
    /// assert_eq!(Value::Text("hi".into()).to_json_string(), "\"hi\"");
    /// assert_eq!(Value::Null.to_json_string(), "null");
    /// ```
    pub fn to_json_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) if n.is_finite() => n.to_string(),
            Value::Float(_) => "null".to_string(),
            Value::Text(s) => quote(s),
            Value::Object(object) => object.to_json_string(),
            Value::Array(array) => {
                let mut result = String::with_capacity(array.len() * 8);
                result.push('[');
                for (i, item) in array.iter().enumerate() {
                    if i > 0 {
                        result.push(',');
                    }
                    result.push_str(&item.to_json_string());
                }
                result.push(']');
                result
            }
        }
    }
}

/// Quotes and escapes a string as a JSON string literal
pub(crate) fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Text prints raw; containers print in the compact JSON-like form.
///
/// This is the rendering used when a value is substituted into a template.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Object(_) | Value::Array(_) => write!(f, "{}", self.to_json_string()),
        }
    }
}

// Convenient From implementations for common types
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(Value::Int)
            .unwrap_or(Value::Float(value as f64))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::from(value as u64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Sequences become arrays, element by element.
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

/// Maps become objects, entry by entry.
impl<K: Into<String>, V: Into<Value>> From<HashMap<K, V>> for Value {
    fn from(map: HashMap<K, V>) -> Self {
        Value::Object(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// PartialEq implementations for comparing Value with primitives
impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<String> for Value {
    fn eq(&self, other: &String) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Value {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Value::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<Value> for &str {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for i64 {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

impl PartialEq<Value> for bool {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}
