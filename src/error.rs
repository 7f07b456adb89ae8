//! Error types for fragment compilation.

use thiserror::Error;

/// The main error type for building and compiling fragments.
///
/// Messages are part of the public contract: callers and tests match on
/// the exact text, so wording changes are breaking changes.
#[derive(Debug, Error)]
pub enum SqlError {
    /// A fragment needs an engine feature that is switched off.
    #[error("{0} clause is not supported in this engine.")]
    ClauseNotSupported(&'static str),

    /// A list that must hold at least one element is empty.
    #[error("List is empty.")]
    EmptyList,

    /// CASE without any WHEN branch.
    #[error("Add at least one \"when\" clause.")]
    EmptyCase,

    /// Invalid combination requested while building a fragment.
    #[error("{0}")]
    InvalidConstruction(String),

    #[error("Type \"{0}\" is not registered.")]
    TypeNotRegistered(String),

    #[error("Property \"{property}\" is not registered in type \"{ty}\".")]
    PropertyNotRegistered { ty: String, property: String },

    /// Function lookup miss while `functions_only_registered` is on.
    #[error("Function \"{0}\" is not supported in this engine.")]
    UnsupportedFunction(String),

    #[error("Invalid raw format: {0}")]
    RawFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SqlError {
    /// Create an invalid-construction error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConstruction(message.into())
    }

    /// Create a property-not-registered error.
    pub fn property(ty: impl Into<String>, property: impl Into<String>) -> Self {
        Self::PropertyNotRegistered {
            ty: ty.into(),
            property: property.into(),
        }
    }
}

/// Result type alias for fragment operations.
pub type SqlResult<T> = Result<T, SqlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SqlError::ClauseNotSupported("Distinct on").to_string(),
            "Distinct on clause is not supported in this engine."
        );
        assert_eq!(SqlError::EmptyList.to_string(), "List is empty.");
        assert_eq!(
            SqlError::EmptyCase.to_string(),
            "Add at least one \"when\" clause."
        );
        assert_eq!(
            SqlError::property("Person", "Address.Zip").to_string(),
            "Property \"Address.Zip\" is not registered in type \"Person\"."
        );
    }
}
