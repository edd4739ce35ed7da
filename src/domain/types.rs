//! Strongly-typed value objects used by domain entities.
//!
//! Identifiers issued by the external API are opaque strings. These wrappers
//! reject empty or whitespace-only values so that once an identifier reaches
//! the domain layer it can be treated as trusted.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier contained no non-whitespace characters.
    #[error("identifier cannot be empty")]
    EmptyId,
}

/// Macro to generate lightweight newtypes for opaque string identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
        )]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier, rejecting empty values.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyId);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the identifier as a `&str`.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the owned inner `String`.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(NoticeId, "Unique identifier for a notice.");
id_newtype!(ClientId, "Unique identifier for a client.");
id_newtype!(FolderId, "Unique identifier for a file-manager folder.");
id_newtype!(FileId, "Unique identifier for a stored file.");
id_newtype!(UserId, "Unique identifier for a dashboard user.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_newtype_trims_and_rejects_empty() {
        let id = NoticeId::new("  abc123  ").unwrap();
        assert_eq!(id.as_str(), "abc123");
        assert_eq!(NoticeId::new("   "), Err(TypeConstraintError::EmptyId));
        assert_eq!(NoticeId::new(""), Err(TypeConstraintError::EmptyId));
    }

    #[test]
    fn id_newtype_round_trips_through_string() {
        let id = ClientId::try_from("c1".to_string()).unwrap();
        assert_eq!(id.to_string(), "c1");
        assert_eq!(String::from(id), "c1");
    }
}
