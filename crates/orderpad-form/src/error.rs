//! # Workflow Error Types
//!
//! Errors surfaced to the frontend by the form workflow.
//!
//! A submit attempt reports *every* failing field at once, so the user can
//! fix the whole form in one pass instead of playing whack-a-mole with one
//! error per attempt. Persistence problems are deliberately absent here:
//! losing a saved-order cookie is logged, never a failed submit.

use thiserror::Error;

use orderpad_core::ValidationError;

/// Form workflow errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// One or more fields failed validation.
    ///
    /// Each entry carries the failing [`orderpad_core::Field`]; the
    /// frontend highlights each one and shows its message.
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    /// Finalize was attempted with no items and nothing pending to
    /// auto-create one from.
    #[error("add at least one item before finalizing")]
    NoItems,
}

impl FormError {
    /// The individual field errors, if this is a validation failure.
    pub fn field_errors(&self) -> &[ValidationError] {
        match self {
            FormError::Invalid(errors) => errors,
            FormError::NoItems => &[],
        }
    }
}
