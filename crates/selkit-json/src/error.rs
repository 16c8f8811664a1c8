//! Error types for the JSON helpers.

use thiserror::Error;

/// Errors that can occur while serializing values or constructing them from JSON.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The input was not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The value could not be serialized.
    #[error("cannot serialize value: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The top-level JSON value has no ordered values to construct from.
    #[error("cannot construct {prototype} from a JSON {found}, expected an object or array")]
    NotAMapping {
        /// Name of the prototype being constructed.
        prototype: &'static str,
        /// Kind of JSON value that was found instead.
        found: &'static str,
    },

    /// Fewer values were supplied than the constructor reads.
    #[error("{prototype} reads argument {index}, but only {count} were given")]
    MissingArgument {
        /// Name of the prototype being constructed.
        prototype: &'static str,
        /// Zero-based position of the missing argument.
        index: usize,
        /// Number of arguments supplied.
        count: usize,
    },

    /// A positional argument had the wrong shape for its parameter.
    #[error("argument {index} of {prototype} is invalid: {reason}")]
    InvalidArgument {
        /// Name of the prototype being constructed.
        prototype: &'static str,
        /// Zero-based position of the argument.
        index: usize,
        /// What was wrong with it.
        reason: String,
    },
}
