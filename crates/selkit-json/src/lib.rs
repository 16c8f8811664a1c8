//! JSON helpers: serialization and positional construction.
//!
//! # Scope
//!
//! - [`to_json`] / [`to_json_pretty`] - serialize any `Serialize` value with
//!   `serde_json`. Struct fields keep declaration order; maps keep insertion
//!   order.
//! - [`from_json`] - parse a JSON object and construct a value by passing the
//!   object's values, in document order, to a [`Prototype`] as positional
//!   arguments.
//!
//! Keys are never consulted by [`from_json`]: `{"height": 5, "width": 2}`
//! handed to a `(width, height)` constructor yields width 5. Callers must
//! write keys in parameter order.

/// Error types.
pub mod error;
/// Positional constructors.
pub mod prototype;

pub use error::JsonError;
pub use prototype::{Arguments, Constructor, Positional, Prototype, json_kind};

use selkit_common::warning::warn_once;
use serde::Serialize;
use serde_json::Value;

/// Serialize `value` to a compact JSON string.
///
/// # Errors
/// [`JsonError::Serialize`] if the value's `Serialize` impl fails, e.g. a map
/// with non-string keys.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Serialize `value` to an indented JSON string.
///
/// # Errors
/// [`JsonError::Serialize`] if the value's `Serialize` impl fails.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(JsonError::Serialize)
}

/// Construct a `T` from `json` through `prototype`.
///
/// The top-level value must be an object (its values are used in document
/// order) or an array (its elements are used in order). Values beyond the
/// prototype's arity are ignored, with a one-time warning.
///
/// Object values follow the document exactly. Integer-like keys are not
/// hoisted to the front, so `{"b": 1, "2": 5}` passes `(1, 5)`.
///
/// # Errors
/// - [`JsonError::Parse`] if `json` is not valid JSON
/// - [`JsonError::NotAMapping`] if the top-level value is a scalar
/// - whatever the prototype's constructor reports for its arguments
pub fn from_json<T>(prototype: &Prototype<T>, json: &str) -> Result<T, JsonError> {
    let parsed: Value = serde_json::from_str(json)?;

    let values: Vec<Value> = match parsed {
        Value::Object(map) => map.into_iter().map(|(_, value)| value).collect(),
        Value::Array(items) => items,
        other => {
            return Err(JsonError::NotAMapping {
                prototype: prototype.name(),
                found: json_kind(&other),
            });
        }
    };

    if values.len() > prototype.arity() {
        let _ = warn_once(
            "JSON",
            &format!(
                "{} takes {} argument(s), ignoring {} extra value(s)",
                prototype.name(),
                prototype.arity(),
                values.len() - prototype.arity()
            ),
        );
    }

    prototype.construct(values)
}

/// [`from_json`] using `T`'s own [`Positional`] prototype.
///
/// # Errors
/// Same as [`from_json`].
pub fn from_json_as<T: Positional>(json: &str) -> Result<T, JsonError> {
    from_json(&T::prototype(), json)
}
