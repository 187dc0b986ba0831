//! Claims domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// Missing required field or unparseable input
    #[error("{0}")]
    Validation(String),

    #[error("Claim {0} not found")]
    NotFound(String),

    /// Identifier collision on create
    #[error("{0}")]
    Conflict(String),

    #[error("Storage failure: {0}")]
    Storage(PortError),
}

impl ClaimError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClaimError::NotFound(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ClaimError::Conflict(_))
    }
}

impl From<PortError> for ClaimError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { id, .. } => ClaimError::NotFound(id),
            PortError::Conflict { message } => ClaimError::Conflict(message),
            PortError::Validation { message, .. } => ClaimError::Validation(message),
            other => ClaimError::Storage(other),
        }
    }
}

impl From<ClaimError> for PortError {
    fn from(err: ClaimError) -> Self {
        match err {
            ClaimError::Validation(message) => PortError::validation(message),
            ClaimError::NotFound(id) => PortError::not_found("Claim", id),
            ClaimError::Conflict(message) => PortError::conflict(message),
            ClaimError::Storage(inner) => inner,
        }
    }
}
