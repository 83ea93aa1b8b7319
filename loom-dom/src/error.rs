//! Error types for building and lowering code models.

use thiserror::Error;

/// Result type for code-model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error raised while building a code model.
///
/// Every error is local and synchronous: it is raised by the call that
/// received the bad input and leaves the receiver unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A required argument was empty or out of range.
    #[error("invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        /// Argument name.
        argument: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// A template was generated before its required settings were set.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message.
        message: String,
    },

    /// A value was inserted under a key that is already present.
    #[error("duplicate key '{key}' in {container}")]
    DuplicateKey {
        /// The conflicting key.
        key: String,
        /// Name of the container that rejected it.
        container: &'static str,
    },

    /// A loop init or increment statement does not lower to exactly one statement.
    #[error("loop {clause} statement lowers to {count} statements, expected exactly one")]
    AmbiguousLoopClause {
        /// Either `init` or `increment`.
        clause: &'static str,
        /// Number of statements the clause lowers to.
        count: usize,
    },

    /// A member was added to a class other than the one it was created for.
    #[error("member '{member}' was declared for '{owner}', not '{target}'")]
    ForeignMember {
        /// Member name.
        member: String,
        /// Declaring type recorded on the member.
        owner: String,
        /// Class the member was added to.
        target: String,
    },
}

impl Error {
    /// Creates an invalid-argument error.
    pub fn invalid_argument(argument: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Creates an invalid-configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            message: message.into(),
        }
    }

    /// Creates a duplicate-key error.
    pub fn duplicate_key(key: impl Into<String>, container: &'static str) -> Self {
        Self::DuplicateKey {
            key: key.into(),
            container,
        }
    }

    /// Returns true for argument-validation errors.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument { .. } | Self::AmbiguousLoopClause { .. }
        )
    }

    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }

    /// Returns true for duplicate-key errors.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}

/// Reject an empty name.
pub(crate) fn require_name(argument: &'static str, name: impl Into<String>) -> Result<String> {
    let name = name.into();
    if name.is_empty() {
        return Err(Error::invalid_argument(argument, "must not be empty"));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_name() {
        assert_eq!(require_name("name", "Foo"), Ok("Foo".to_string()));
        let err = require_name("name", "").unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(err.to_string(), "invalid argument `name`: must not be empty");
    }

    #[test]
    fn test_error_kinds() {
        assert!(Error::configuration("key type is undefined").is_configuration());
        assert!(Error::duplicate_key("id", "field map").is_duplicate_key());
        assert_eq!(
            Error::duplicate_key("id", "field map").to_string(),
            "duplicate key 'id' in field map"
        );
    }
}
