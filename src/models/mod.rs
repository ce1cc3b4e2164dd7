pub mod appointment;
pub mod doctor;
pub mod enums;
pub mod ids;
pub mod patient;

pub use appointment::*;
pub use doctor::*;
pub use enums::*;
pub use ids::*;
pub use patient::*;

use thiserror::Error;

/// Entity-layer failures.
///
/// `InvalidArgument` covers malformed or out-of-range input to a constructor
/// or setter. `IllegalState` covers an operation the entity's current state
/// forbids. Both surface synchronously and are never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    #[error("Cannot {operation} a {status} appointment")]
    IllegalState {
        operation: &'static str,
        status: &'static str,
    },
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }
}
