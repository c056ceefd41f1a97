//! Dotted-path queries over a parsed [`Value`] tree.
//!
//! A path is a string of dot-separated segments: `.` denotes the root
//! itself, `.key` an object member, `.0` an array element, and segments
//! chain left to right (`.hello.world.0`). Resolution never mutates the
//! tree and never falls back to a default — every miss is a distinct
//! [`QueryError`].
//!
//! There is no escape mechanism for keys that themselves contain a dot;
//! such keys are unreachable through this interface. Segments are only
//! interpreted as indices when the current value is an array, so an object
//! key that looks like an integer (`{"0": …}`) resolves normally.

use crate::error::{Error, QueryError, Result};
use crate::types::Value;

/// Conversion from a resolved [`Value`] into a caller-requested type.
///
/// Implementations exist for `f64` (number), `bool`, `String`, `()` (null
/// check), and `Value` itself (untyped access). A mismatch between the
/// requested type and the stored variant is a
/// [`QueryError::TypeMismatch`], never a silent default.
pub trait FromValue<'a>: Sized {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError>;
}

impl<'a> FromValue<'a> for f64 {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError> {
        match value {
            Value::Number(n) => Ok(*n),
            other => Err(mismatch("number", other)),
        }
    }
}

impl<'a> FromValue<'a> for bool {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError> {
        match value {
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch("bool", other)),
        }
    }
}

impl<'a> FromValue<'a> for String {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError> {
        match value {
            Value::String(s) => Ok(s.clone().into_owned()),
            other => Err(mismatch("string", other)),
        }
    }
}

/// Null check: succeeds exactly when the resolved value is `null`.
impl<'a> FromValue<'a> for () {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError> {
        match value {
            Value::Null => Ok(()),
            other => Err(mismatch("null", other)),
        }
    }
}

impl<'a> FromValue<'a> for Value<'a> {
    fn from_value(value: &Value<'a>) -> std::result::Result<Self, QueryError> {
        Ok(value.clone())
    }
}

fn mismatch(requested: &'static str, found: &Value<'_>) -> QueryError {
    QueryError::TypeMismatch {
        requested,
        found: found.kind(),
    }
}

/// Resolve `path` against `root` and convert the result to `T`.
///
/// ```
/// use pluck_core::{get, parse};
///
/// let doc = parse(r#"{"hello": {"world": ["hi"]}}"#).unwrap();
/// let greeting: String = get(&doc, ".hello.world.0").unwrap();
/// assert_eq!(greeting, "hi");
/// ```
pub fn get<'a, T: FromValue<'a>>(root: &Value<'a>, path: &str) -> Result<T> {
    let target = resolve(root, path)?;
    T::from_value(target).map_err(Error::from)
}

/// Walk the tree segment by segment, returning the addressed node.
fn resolve<'v, 'a>(root: &'v Value<'a>, path: &str) -> std::result::Result<&'v Value<'a>, QueryError> {
    if path == "." {
        return Ok(root);
    }
    let Some(rest) = path.strip_prefix('.') else {
        return Err(QueryError::InvalidPath(path.to_string()));
    };

    let mut current = root;
    for segment in rest.split('.') {
        if segment.is_empty() {
            return Err(QueryError::InvalidPath(path.to_string()));
        }
        current = match current {
            Value::Object(members) => members
                .get(segment)
                .ok_or_else(|| QueryError::KeyNotFound(segment.to_string()))?,
            Value::Array(items) => {
                let index: usize = segment
                    .parse()
                    .map_err(|_| QueryError::InvalidIndex(segment.to_string()))?;
                items.get(index).ok_or(QueryError::IndexOutOfRange {
                    index,
                    len: items.len(),
                })?
            }
            atom => {
                return Err(QueryError::NotAContainer {
                    kind: atom.kind(),
                    segment: segment.to_string(),
                })
            }
        };
    }
    Ok(current)
}
