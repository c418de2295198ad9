//! # Error Types
//!
//! Domain-specific error types for orderpad-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Error Flow                                   │
//! │                                                                     │
//! │  ValidationError (this module) ← raised by setters / validators     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  FormError (orderpad-form) ← collected per submit attempt           │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  Frontend highlights the field named by `Field` and shows the       │
//! │  message. Validation failures are user feedback, never faults.      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every validation error carries the failing [`Field`]
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Field Identifier
// =============================================================================

/// Identifies which form field a validation error refers to.
///
/// The presentation layer branches on this to decide which input to
/// highlight; the enum is closed so that match arms stay exhaustive when a
/// field is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Item name on a line item.
    ItemName,
    /// Line item quantity.
    Quantity,
    /// Line item unit price.
    Price,
    /// Customer full name.
    CustomerName,
    /// Customer email address.
    Email,
    /// Customer phone number.
    Phone,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::ItemName => "item name",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::CustomerName => "customer name",
            Field::Email => "email",
            Field::Phone => "phone number",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised synchronously by `LineItem` setters and the form-field validators
/// when input violates a stated constraint. Always recoverable: the caller
/// re-prompts using the attached field identifier and message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty after trimming.
    #[error("{field} is required")]
    Required { field: Field },

    /// Text length is outside the allowed range.
    #[error("{field} must be between {min} and {max} characters")]
    LengthOutOfRange {
        field: Field,
        min: usize,
        max: usize,
    },

    /// Input cannot be parsed or contains disallowed characters.
    #[error("{field} {reason}")]
    InvalidFormat {
        field: Field,
        reason: &'static str,
    },

    /// Numeric value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: Field },

    /// Numeric value exceeds the allowed maximum.
    #[error("{field} must be at most {max}")]
    TooLarge { field: Field, max: i64 },
}

impl ValidationError {
    /// Returns the field this error refers to.
    pub const fn field(&self) -> Field {
        match self {
            ValidationError::Required { field }
            | ValidationError::LengthOutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::MustBePositive { field }
            | ValidationError::TooLarge { field, .. } => *field,
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
