//! Positional construction.
//!
//! `from_json` builds values by handing the top-level JSON values, in document
//! order, to a constructor as positional arguments. Rust has no reflective
//! `new T(...args)`, so each constructible type is described by a
//! [`Prototype`]: a type tag plus a constructor over [`Arguments`].

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::JsonError;

/// Ordered positional arguments for a [`Prototype`] constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    prototype: &'static str,
    values: Vec<Value>,
}

impl Arguments {
    /// Wrap `values` as the arguments of a call to `prototype`.
    #[must_use]
    pub const fn new(prototype: &'static str, values: Vec<Value>) -> Self {
        Self { prototype, values }
    }

    /// Number of arguments supplied.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All arguments in order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The raw argument at `index`.
    ///
    /// # Errors
    /// [`JsonError::MissingArgument`] if fewer than `index + 1` arguments were given.
    pub fn value(&self, index: usize) -> Result<&Value, JsonError> {
        self.values.get(index).ok_or(JsonError::MissingArgument {
            prototype: self.prototype,
            index,
            count: self.values.len(),
        })
    }

    /// The argument at `index` as a number.
    ///
    /// # Errors
    /// [`JsonError::MissingArgument`] if absent, [`JsonError::InvalidArgument`]
    /// if it is not a JSON number.
    pub fn f64(&self, index: usize) -> Result<f64, JsonError> {
        let value = self.value(index)?;
        value
            .as_f64()
            .ok_or_else(|| self.invalid(index, format!("expected a number, found {}", json_kind(value))))
    }

    /// The argument at `index` as a string slice.
    ///
    /// # Errors
    /// [`JsonError::MissingArgument`] if absent, [`JsonError::InvalidArgument`]
    /// if it is not a JSON string.
    pub fn str(&self, index: usize) -> Result<&str, JsonError> {
        let value = self.value(index)?;
        value
            .as_str()
            .ok_or_else(|| self.invalid(index, format!("expected a string, found {}", json_kind(value))))
    }

    /// Deserialize the argument at `index` into any `T`.
    ///
    /// # Errors
    /// [`JsonError::MissingArgument`] if absent, [`JsonError::InvalidArgument`]
    /// if it does not deserialize as `T`.
    pub fn take<T: DeserializeOwned>(&self, index: usize) -> Result<T, JsonError> {
        let value = self.value(index)?;
        T::deserialize(value).map_err(|e| self.invalid(index, e.to_string()))
    }

    fn invalid(&self, index: usize, reason: String) -> JsonError {
        JsonError::InvalidArgument {
            prototype: self.prototype,
            index,
            reason,
        }
    }
}

/// Constructor signature used by [`Prototype`].
pub type Constructor<T> = fn(&Arguments) -> Result<T, JsonError>;

/// A named positional constructor for `T`.
pub struct Prototype<T> {
    name: &'static str,
    arity: usize,
    constructor: Constructor<T>,
}

impl<T> Prototype<T> {
    /// Describe a constructor named `name` that reads `arity` arguments.
    #[must_use]
    pub const fn new(name: &'static str, arity: usize, constructor: Constructor<T>) -> Self {
        Self {
            name,
            arity,
            constructor,
        }
    }

    /// The type tag, used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Number of positional parameters the constructor reads.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Call the constructor with `values` as positional arguments.
    ///
    /// # Errors
    /// Whatever the constructor reports for missing or ill-typed arguments.
    pub fn construct(&self, values: Vec<Value>) -> Result<T, JsonError> {
        (self.constructor)(&Arguments::new(self.name, values))
    }
}

// Manual impls: `T` itself need not be `Clone` or `Debug`.
impl<T> Clone for Prototype<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Prototype<T> {}

impl<T> std::fmt::Debug for Prototype<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prototype")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Types that can be constructed positionally by `from_json`.
///
/// ```
/// use selkit_json::{Arguments, JsonError, Positional, from_json};
///
/// struct Circle {
///     radius: f64,
/// }
///
/// impl Positional for Circle {
///     const NAME: &'static str = "Circle";
///     const ARITY: usize = 1;
///
///     fn from_arguments(args: &Arguments) -> Result<Self, JsonError> {
///         Ok(Self { radius: args.f64(0)? })
///     }
/// }
///
/// let circle = from_json(&Circle::prototype(), r#"{"radius":10}"#).unwrap();
/// assert_eq!(circle.radius, 10.0);
/// ```
pub trait Positional: Sized {
    /// Type tag used in error messages.
    const NAME: &'static str;
    /// Number of positional parameters.
    const ARITY: usize;

    /// Build a value from positional arguments.
    ///
    /// # Errors
    /// [`JsonError::MissingArgument`] or [`JsonError::InvalidArgument`] when
    /// the arguments do not fit.
    fn from_arguments(args: &Arguments) -> Result<Self, JsonError>;

    /// The [`Prototype`] describing this type.
    #[must_use]
    fn prototype() -> Prototype<Self> {
        Prototype::new(Self::NAME, Self::ARITY, Self::from_arguments)
    }
}

/// Lower-case name of a JSON value's kind.
#[must_use]
pub const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
