//! Error classification and configuration errors.
//!
//! Validation and arithmetic return polars' own [`PolarsError`] untouched.
//! [`ErrorKind`] is only a view over it, splitting failures into the two
//! families callers usually branch on: an operand or element of the wrong
//! type, and a value or shape that does not fit.

use polars::prelude::PolarsError;
use std::fmt;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Coarse family of a polars failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operand or input type cannot take part in the operation.
    Type,
    /// Lengths, shapes or values are incompatible.
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type error"),
            ErrorKind::Value => write!(f, "value error"),
        }
    }
}

/// Classification helpers on [`PolarsError`].
pub trait PolarsErrorExt {
    /// Returns the family this error belongs to.
    fn kind(&self) -> ErrorKind;

    fn is_type_error(&self) -> bool {
        self.kind() == ErrorKind::Type
    }

    fn is_value_error(&self) -> bool {
        self.kind() == ErrorKind::Value
    }
}

impl PolarsErrorExt for PolarsError {
    fn kind(&self) -> ErrorKind {
        match self {
            PolarsError::Context { error, .. } => error.kind(),
            PolarsError::InvalidOperation(_)
            | PolarsError::SchemaMismatch(_)
            | PolarsError::SchemaFieldNotFound(_)
            | PolarsError::StructFieldNotFound(_) => ErrorKind::Type,
            _ => ErrorKind::Value,
        }
    }
}

/// Error type for loading [`AdapterConfig`](crate::config::AdapterConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_is_value_error() {
        let err = PolarsError::ShapeMismatch("lengths differ".into());
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.is_value_error());
    }

    #[test]
    fn test_invalid_operation_is_type_error() {
        let err = PolarsError::InvalidOperation("add not supported".into());
        assert!(err.is_type_error());
        assert!(PolarsError::SchemaMismatch("i64 vs str".into()).is_type_error());
    }

    #[test]
    fn test_context_classifies_inner_error() {
        let err = PolarsError::InvalidOperation("bad operand".into()).context("adding".into());
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn test_parse_error_message() {
        let err: ConfigError = toml::from_str::<toml::Value>("[adapter").unwrap_err().into();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
