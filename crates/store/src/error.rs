//! Unified error handling for store operations.

use capra_core::RequestStatus;
use thiserror::Error;

/// Application-level error type for store writes.
///
/// Validation failures carry the exact blocking message the screens show;
/// the attempted write is discarded and the collections stay untouched.
/// Id lookups that match nothing are NOT errors: those operations are
/// silent no-ops (see the individual store methods).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required pet-registration field is empty or whitespace-only.
    #[error("Por favor, preencha todos os campos obrigatórios.")]
    MissingRequiredFields,

    /// A required user-registration field is empty or whitespace-only.
    #[error("Por favor, preencha todos os campos.")]
    MissingFields,

    /// The strict transition table rejected a status move.
    ///
    /// Only produced when strict transitions are enabled in configuration;
    /// the default behavior accepts any move.
    #[error("não é possível mudar o status de {} para {}", .from.label(), .to.label())]
    InvalidTransition {
        /// Status the request is currently in.
        from: RequestStatus,
        /// Status the operator tried to move it to.
        to: RequestStatus,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            StoreError::MissingRequiredFields.to_string(),
            "Por favor, preencha todos os campos obrigatórios."
        );
        assert_eq!(
            StoreError::MissingFields.to_string(),
            "Por favor, preencha todos os campos."
        );
    }

    #[test]
    fn test_invalid_transition_names_labels() {
        let err = StoreError::InvalidTransition {
            from: RequestStatus::Completed,
            to: RequestStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "não é possível mudar o status de Concluído para Pendente"
        );
    }
}
