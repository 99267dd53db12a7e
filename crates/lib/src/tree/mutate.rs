//! Path assignment for writes.
//!
//! Missing intermediate containers are created on the way down. The kind of
//! container a node must hold is decided by the segment applied to it next,
//! together with what is already stored there:
//!
//! - a key asks for an object and `+` for an array
//! - digits, `*` and `$` address the elements of an existing array
//! - against an existing object, digits and `$` are literal keys
//! - `$` against anything else is a literal key as well
//!
//! An existing node of the wrong kind is replaced by an empty container of
//! the demanded kind, dropping its data. Every write is checked against the
//! tree before anything is changed, so a rejected write leaves it untouched.

use tracing::debug;

use super::{
    array::Array,
    errors::WriteError,
    object::Object,
    path::{Segment, join},
    value::Value,
};

/// Assigns `value` at `segments` below `object`.
pub(crate) fn set_in_object(
    object: &mut Object,
    segments: &[Segment],
    value: Value,
) -> Result<(), WriteError> {
    let Some((first, rest)) = segments.split_first() else {
        return Err(WriteError::InvalidPath {
            path: String::new(),
            reason: "empty path".to_string(),
        });
    };

    if first.is_array_chain() {
        return Err(if rest.is_empty() {
            WriteError::ArrayTokenAsLeaf {
                segment: first.as_str().to_string(),
            }
        } else {
            WriteError::ArrayTokenAtRoot {
                path: join(segments),
                segment: first.as_str().to_string(),
            }
        });
    }

    let key = first.as_str();
    check(object.get(key), rest)?;
    assign(object.slot(key), key, rest, value)
}

enum Container {
    Array,
    Object,
}

/// Decides which container `slot` must hold for `next` to apply to it.
fn container_for(slot: &Value, next: &Segment) -> Result<Container, WriteError> {
    match (next, slot) {
        (Segment::Key(_), _) => Ok(Container::Object),
        (Segment::Append, _) => Ok(Container::Array),
        (_, Value::Array(_)) => Ok(Container::Array),
        (Segment::Current, _) | (Segment::Index { .. }, Value::Object(_)) => {
            Ok(Container::Object)
        }
        // A fresh array has no element to index
        (Segment::Index { index, .. }, _) => Err(WriteError::IndexOutOfRange {
            index: *index,
            len: 0,
        }),
        (Segment::Wildcard, Value::Null) => Ok(Container::Array),
        (Segment::Wildcard, other) => Err(WriteError::NotAnArray {
            segment: next.as_str().to_string(),
            found: other.type_name(),
        }),
    }
}

/// Walks `segments` from `slot` without modifying anything, failing where
/// the write would. `None` stands for a missing or freshly created node.
fn check(slot: Option<&Value>, segments: &[Segment]) -> Result<(), WriteError> {
    let Some((next, rest)) = segments.split_first() else {
        return Ok(());
    };
    let null = Value::Null;
    let slot = slot.unwrap_or(&null);

    match container_for(slot, next)? {
        Container::Object => check(
            slot.as_object().and_then(|object| object.get(next.as_str())),
            rest,
        ),
        Container::Array => {
            let elements = slot.as_array().map(Array::as_slice).unwrap_or_default();
            match next {
                Segment::Append => check(None, rest),
                Segment::Index { index, .. } => match elements.get(*index) {
                    Some(element) => check(Some(element), rest),
                    None => Err(WriteError::IndexOutOfRange {
                        index: *index,
                        len: elements.len(),
                    }),
                },
                _ => elements
                    .iter()
                    .try_for_each(|element| check(Some(element), rest)),
            }
        }
    }
}

/// Continues a write through `slot`, which is stored under `key`, coercing
/// it to the container `segments` needs.
fn assign(
    slot: &mut Value,
    key: &str,
    segments: &[Segment],
    value: Value,
) -> Result<(), WriteError> {
    let Some((next, rest)) = segments.split_first() else {
        *slot = value;
        return Ok(());
    };

    match container_for(slot, next)? {
        Container::Object => {
            let object = ensure_object(slot, key);
            assign(object.slot(next.as_str()), next.as_str(), rest, value)
        }
        Container::Array => set_in_array(ensure_array(slot, key), next, rest, value),
    }
}

/// Applies the array token `first`, then `rest`, inside `array`.
fn set_in_array(
    array: &mut Array,
    first: &Segment,
    rest: &[Segment],
    value: Value,
) -> Result<(), WriteError> {
    match first {
        Segment::Append => {
            let mut fresh = Value::Null;
            assign(&mut fresh, first.as_str(), rest, value)?;
            array.push(fresh);
        }
        Segment::Wildcard | Segment::Current => {
            for element in array.iter_mut() {
                assign(element, first.as_str(), rest, value.clone())?;
            }
        }
        Segment::Index { index, text } => {
            let len = array.len();
            let Some(element) = array.get_mut(*index) else {
                return Err(WriteError::IndexOutOfRange { index: *index, len });
            };
            assign(element, text, rest, value)?;
        }
        Segment::Key(key) => return Err(WriteError::KeyInArray { key: key.clone() }),
    }
    Ok(())
}

fn ensure_object<'a>(slot: &'a mut Value, key: &str) -> &'a mut Object {
    match slot {
        Value::Object(object) => object,
        _ => {
            if !slot.is_null() {
                debug!(key, replaced = slot.type_name(), "Replacing value with object");
            }
            *slot = Value::Object(Object::new());
            ensure_object(slot, key)
        }
    }
}

fn ensure_array<'a>(slot: &'a mut Value, key: &str) -> &'a mut Array {
    match slot {
        Value::Array(array) => array,
        _ => {
            if !slot.is_null() {
                debug!(key, replaced = slot.type_name(), "Replacing value with array");
            }
            *slot = Value::Array(Array::new());
            ensure_array(slot, key)
        }
    }
}
