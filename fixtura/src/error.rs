//! Error types for specification construction and queries.

use std::fmt;

/// Contract violations raised while building or querying a specification.
///
/// Every variant describes a programmer error at the call site. A request that
/// simply does not match is never an error; it yields `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecificationError {
    /// A required argument was absent
    ArgumentNull { argument: &'static str },

    /// A composite specification was built without any members
    EmptyComposite { kind: &'static str },
}

impl fmt::Display for SpecificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecificationError::ArgumentNull { argument } => {
                write!(f, "Argument cannot be null: {}", argument)
            }
            SpecificationError::EmptyComposite { kind } => {
                write!(f, "{} requires at least one specification", kind)
            }
        }
    }
}

impl std::error::Error for SpecificationError {}

impl SpecificationError {
    /// Create an error for a missing argument
    pub fn argument_null(argument: &'static str) -> Self {
        Self::ArgumentNull { argument }
    }

    /// Create an error for a composite built from nothing
    pub fn empty_composite(kind: &'static str) -> Self {
        Self::EmptyComposite { kind }
    }

    /// Name of the offending argument, if this is an `ArgumentNull` error
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            SpecificationError::ArgumentNull { argument } => Some(argument),
            SpecificationError::EmptyComposite { .. } => None,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SpecificationError>;

/// Unwrap an optional argument or report it as null.
pub(crate) fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or(SpecificationError::ArgumentNull { argument })
}
