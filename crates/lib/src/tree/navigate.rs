//! Path resolution for reads.
//!
//! Walks an [`Object`] or [`Array`] segment by segment. Direct hits borrow
//! from the tree; fan-out through `*`, `$` or `+` collects clones of every
//! match into a fresh [`Value::Array`].

use std::borrow::Cow;

use super::{
    array::Array,
    errors::TreeError,
    object::Object,
    path::{Segment, join},
    value::Value,
};

/// Resolves `segments` starting at `object`.
///
/// `holder` is the value wrapping `object`, if it has one, so that a
/// terminal wildcard can return the container without copying it. The tree
/// root has no holder.
pub(crate) fn resolve_object<'a>(
    object: &'a Object,
    holder: Option<&'a Value>,
    segments: &[Segment],
) -> Result<Cow<'a, Value>, TreeError> {
    let Some((leaf, dirs)) = segments.split_last() else {
        return Err(TreeError::invalid_path("", "empty path"));
    };

    let mut current = object;
    let mut holder = holder;

    for (i, segment) in dirs.iter().enumerate() {
        if let Segment::Wildcard = segment {
            return Ok(Cow::Owned(fan_out(current.values(), &segments[i + 1..])));
        }

        let child = lookup(current, segments, i)?;
        match child {
            Value::Object(object) => {
                current = object;
                holder = Some(child);
            }
            Value::Array(array) => return resolve_array(array, child, &segments[i + 1..]),
            scalar => return Err(TreeError::not_traversable(join(&segments[..=i]), scalar)),
        }
    }

    if let Segment::Wildcard = leaf {
        // A terminal wildcard returns the container itself
        return Ok(match holder {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(Value::Object(current.clone())),
        });
    }
    lookup(current, segments, dirs.len()).map(Cow::Borrowed)
}

/// Looks up `segments[i]` in `object`; absent and null children are missing.
fn lookup<'a>(object: &'a Object, segments: &[Segment], i: usize) -> Result<&'a Value, TreeError> {
    match object.get(segments[i].as_str()) {
        None | Some(Value::Null) => Err(TreeError::NoValue {
            key: join(&segments[..=i]),
        }),
        Some(child) => Ok(child),
    }
}

/// Resolves `segments` inside `array`, which is wrapped by `holder`.
pub(crate) fn resolve_array<'a>(
    array: &'a Array,
    holder: &'a Value,
    segments: &[Segment],
) -> Result<Cow<'a, Value>, TreeError> {
    let Some((first, rest)) = segments.split_first() else {
        return Err(TreeError::invalid_path("", "empty path"));
    };

    match first {
        Segment::Wildcard | Segment::Current | Segment::Append => {
            if rest.is_empty() {
                return Ok(Cow::Borrowed(holder));
            }
            Ok(Cow::Owned(fan_out(array.iter(), rest)))
        }
        Segment::Index { index, .. } => {
            let Some(element) = array.get(*index) else {
                return Err(TreeError::OutOfRange {
                    index: *index,
                    len: array.len(),
                });
            };
            if rest.is_empty() {
                return Ok(Cow::Borrowed(element));
            }
            match element {
                Value::Object(object) => resolve_object(object, Some(element), rest),
                Value::Array(inner) => resolve_array(inner, element, rest),
                scalar => Err(TreeError::not_traversable(first.as_str(), scalar)),
            }
        }
        Segment::Key(key) => Err(TreeError::invalid_path(
            join(segments),
            format!("key '{key}' cannot address an array element"),
        )),
    }
}

/// Resolves `segments` against any node; scalars cannot be descended into.
fn resolve_value<'a>(value: &'a Value, segments: &[Segment]) -> Result<Cow<'a, Value>, TreeError> {
    match value {
        Value::Object(object) => resolve_object(object, Some(value), segments),
        Value::Array(array) => resolve_array(array, value, segments),
        scalar => Err(TreeError::not_traversable("", scalar)),
    }
}

/// Resolves `rest` against every container among `children`.
///
/// Failures and scalar children are skipped; the result keeps the iteration
/// order of the children.
fn fan_out<'a>(children: impl Iterator<Item = &'a Value>, rest: &[Segment]) -> Value {
    children
        .filter(|child| child.is_container())
        .filter_map(|child| resolve_value(child, rest).ok())
        .map(Cow::into_owned)
        .collect::<Array>()
        .into()
}
