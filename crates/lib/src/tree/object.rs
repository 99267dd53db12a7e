//! String-keyed container nodes.

use std::collections::{HashMap, hash_map};

use super::value::{Value, quote};

/// An object node: a mapping from string keys to child values.
///
/// Keys are unique and iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    children: HashMap<String, Value>,
}

impl Object {
    /// Creates a new empty object
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.children.contains_key(key)
    }

    /// Gets a direct child by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.children.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.children.get_mut(key)
    }

    /// Inserts a direct child, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.children.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.children.remove(key)
    }

    /// Returns the child slot for `key`, inserting `Null` when absent.
    pub(crate) fn slot(&mut self, key: &str) -> &mut Value {
        self.children.entry(key.to_string()).or_default()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.children.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, String, Value> {
        self.children.iter_mut()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.children.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.children.values()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.children.values_mut()
    }

    /// Shallow merge: every top-level entry of `other` overwrites ours.
    pub fn extend_from(&mut self, other: Object) {
        self.children.extend(other.children);
    }

    /// Compact JSON-like rendering with keys sorted.
    pub fn to_json_string(&self) -> String {
        let mut keys: Vec<&String> = self.children.keys().collect();
        keys.sort();

        let mut result = String::with_capacity(self.children.len() * 16);
        result.push('{');
        for (i, key) in keys.into_iter().enumerate() {
            if i > 0 {
                result.push(',');
            }
            result.push_str(&quote(key));
            result.push(':');
            result.push_str(&self.children[key].to_json_string());
        }
        result.push('}');
        result
    }
}

impl FromIterator<(String, Value)> for Object {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

/// Builder pattern methods
impl Object {
    /// Sets a direct child and returns self
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }
}
