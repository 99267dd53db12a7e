//! Ordered container nodes.

use std::{slice, vec};

use super::value::Value;

/// An array node: an ordered, densely indexed sequence of values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    items: Vec<Value>,
}

impl Array {
    /// Creates a new empty array
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an array of `len` null elements.
    ///
    /// Index writes never grow an array, so a fixed-size array is the way to
    /// make positions addressable before anything is stored in them.
    pub fn with_len(len: usize) -> Self {
        Self {
            items: vec![Value::Null; len],
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.items.get_mut(index)
    }

    /// Appends a value at the end
    pub fn push(&mut self, value: impl Into<Value>) {
        self.items.push(value.into());
    }

    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.items
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a mut Array {
    type Item = &'a mut Value;
    type IntoIter = slice::IterMut<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
