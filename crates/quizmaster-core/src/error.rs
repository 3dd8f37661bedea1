//! Registry error types.
//!
//! These errors represent recoverable failures of registry and record
//! operations. Defined here so the console layer can classify them and
//! render a message without string matching.

use thiserror::Error;

use crate::model::ParticipantId;

/// Errors that can occur when operating on the competition registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A caller-supplied argument is outside the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No participant exists with the given identifier.
    #[error("no participant found for id {0}")]
    IdNotFound(ParticipantId),

    /// No participant exists with the given name.
    #[error("no participant found for name '{0}'")]
    NameNotFound(String),

    /// An answer was recorded for a participant with no open attempt.
    #[error("participant {0} has no attempt in progress")]
    NoActiveAttempt(ParticipantId),
}

impl RegistryError {
    /// Shorthand constructor for `InvalidArgument`.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RegistryError::InvalidArgument(message.into())
    }

    /// Returns `true` for lookup/removal misses, which the console layer
    /// reports and moves on from.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistryError::IdNotFound(_) | RegistryError::NameNotFound(_)
        )
    }

    /// Returns `true` for contract violations by the calling collaborator,
    /// which should be surfaced rather than swallowed.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            RegistryError::InvalidArgument(_) | RegistryError::NoActiveAttempt(_)
        )
    }
}
