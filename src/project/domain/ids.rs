//! Non-nil identifier types for projects and tasks.

use super::{ArgumentError, ProjectDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! non_nil_id {
    ($(#[$meta:meta])* $name:ident, $nil_error:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "Uuid", into = "Uuid")]
        pub struct $name(Uuid);

        impl $name {
            /// Wraps an existing UUID.
            ///
            /// # Errors
            ///
            /// Returns [`ProjectDomainError::InvalidArgument`] when `uuid` is
            /// the nil UUID.
            pub fn new(uuid: Uuid) -> Result<Self, ProjectDomainError> {
                if uuid.is_nil() {
                    return Err($nil_error.into());
                }
                Ok(Self(uuid))
            }

            /// Creates a new random (v4) identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Returns the wrapped UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl TryFrom<Uuid> for $name {
            type Error = ProjectDomainError;

            fn try_from(value: Uuid) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<Uuid> for $name {
            fn as_ref(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

non_nil_id!(
    /// Unique identifier for a project.
    ProjectId,
    ArgumentError::NilProjectId
);

non_nil_id!(
    /// Unique identifier for a task, distinct within its owning project.
    TaskId,
    ArgumentError::NilTaskId
);
