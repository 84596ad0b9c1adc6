//! Error types for LINQ serialization and configuration.

use linqdsl_model::Operator;

/// Errors that abort a serialization call.
///
/// No partial text is returned alongside any of these.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The tree contains a construct LINQ output cannot express.
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(&'static str),

    /// A projection entry is not `[alias, selector]` or `[selector]`.
    #[error("malformed projection entry {index}: {message}")]
    MalformedProjection {
        /// Position of the offending entry.
        index: usize,
        /// What is wrong with it.
        message: String,
    },

    /// An operation has a different number of arguments than its operator takes.
    #[error("operator {operator} expects {expected} arguments, found {found}")]
    OperatorArity {
        /// The operator.
        operator: Operator,
        /// Arity of the operator.
        expected: usize,
        /// Arguments present.
        found: usize,
    },

    /// Writing to the output buffer failed.
    #[error("failed to write LINQ output: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Convenience result type for serialization.
pub type SerializeResult<T> = Result<T, SerializeError>;

/// Invalid serializer configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Unknown identifier case name.
    #[error("invalid identifier case: {0} (expected `pascal` or `preserve`)")]
    InvalidIdentifierCase(String),

    /// Parameter prefix is not a valid identifier.
    #[error("invalid parameter prefix: {0:?} (must be a non-empty identifier)")]
    InvalidParameterPrefix(String),
}
