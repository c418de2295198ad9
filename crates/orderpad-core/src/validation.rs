//! # Validation Module
//!
//! Form-field validation for Orderpad.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Field checks (THIS MODULE)                                │
//! │  ├── Raw string shape: required, length, character class            │
//! │  └── Immediate per-field feedback before anything is built          │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: Model invariants (order module)                           │
//! │  ├── LineItem setters re-check on construction and mutation         │
//! │  └── A constructed item is always valid                             │
//! │                                                                     │
//! │  Defense in depth: the model never trusts the form layer            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use orderpad_core::validation::{validate_email, validate_quantity};
//!
//! validate_email("jo@example.com").unwrap();
//! assert!(validate_quantity("3.7").is_err()); // fractional input rejected
//! ```

use crate::error::{Field, ValidationError, ValidationResult};
use crate::{MAX_ITEM_QUANTITY, MAX_UNIT_PRICE, NAME_MAX_CHARS, NAME_MIN_CHARS};

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be 2-50 characters
/// - Letters and spaces only
pub fn validate_customer_name(raw: &str) -> ValidationResult<()> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: Field::CustomerName,
        });
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::LengthOutOfRange {
            field: Field::CustomerName,
            min: NAME_MIN_CHARS,
            max: NAME_MAX_CHARS,
        });
    }

    if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidFormat {
            field: Field::CustomerName,
            reason: "must contain only letters and spaces",
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - `local@domain.tld` shape: word characters, dots and hyphens in the
///   local and domain parts, alphabetic TLD of at least 2 characters
pub fn validate_email(raw: &str) -> ValidationResult<()> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(ValidationError::Required { field: Field::Email });
    }

    let invalid = ValidationError::InvalidFormat {
        field: Field::Email,
        reason: "must look like name@example.com",
    };

    // A second '@' lands in the local part and fails the character check
    let Some((local, domain)) = email.rsplit_once('@') else {
        return Err(invalid);
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return Err(invalid);
    };

    let word_part = |s: &str| {
        !s.is_empty()
            && s.chars()
                .all(|c| c.is_alphanumeric() || c == '_' || c == '.' || c == '-')
    };

    if !word_part(local)
        || !word_part(host)
        || tld.chars().count() < 2
        || !tld.chars().all(|c| c.is_ascii_alphabetic())
    {
        return Err(invalid);
    }

    Ok(())
}

/// Validates a phone number.
///
/// ## Rules
/// - Must not be empty
/// - 10-15 digits after stripping every non-digit character, so formatted
///   input like `(555) 123-4567` is accepted
pub fn validate_phone(raw: &str) -> ValidationResult<()> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Required { field: Field::Phone });
    }

    let digits = raw.chars().filter(|c| c.is_ascii_digit()).count();
    if !(10..=15).contains(&digits) {
        return Err(ValidationError::InvalidFormat {
            field: Field::Phone,
            reason: "must contain 10 to 15 digits",
        });
    }

    Ok(())
}

/// Validates an item name as typed into the form.
///
/// Stricter than the model's own name rule: the form allows only letters,
/// digits and spaces, while the model accepts any 2-50 character text (a
/// replayed saved item never passes through this check).
pub fn validate_item_name(raw: &str) -> ValidationResult<()> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: Field::ItemName,
        });
    }

    let chars = name.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&chars) {
        return Err(ValidationError::LengthOutOfRange {
            field: Field::ItemName,
            min: NAME_MIN_CHARS,
            max: NAME_MAX_CHARS,
        });
    }

    if !name.chars().all(|c| c.is_alphanumeric() || c == ' ') {
        return Err(ValidationError::InvalidFormat {
            field: Field::ItemName,
            reason: "must contain only letters, numbers, and spaces",
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity field.
///
/// ## Rules
/// - Must not be empty
/// - Strict integer parse: fractional input fails, it is never truncated
/// - Must be in 1-1000
pub fn validate_quantity(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: Field::Quantity,
        });
    }

    let qty: i64 = raw.parse().map_err(|_| ValidationError::InvalidFormat {
        field: Field::Quantity,
        reason: "must be a whole number",
    })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: Field::Quantity,
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::TooLarge {
            field: Field::Quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price field.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a finite decimal number
/// - Must be strictly positive (zero-priced items are not allowed)
/// - Must not exceed 1,000,000 (the same cap the model enforces)
pub fn validate_price(raw: &str) -> ValidationResult<()> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required { field: Field::Price });
    }

    let price = raw
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(ValidationError::InvalidFormat {
            field: Field::Price,
            reason: "must be a decimal number",
        })?;

    if price <= 0.0 {
        return Err(ValidationError::MustBePositive { field: Field::Price });
    }

    if price > MAX_UNIT_PRICE as f64 {
        return Err(ValidationError::TooLarge {
            field: Field::Price,
            max: MAX_UNIT_PRICE,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Ada Lovelace").is_ok());

        assert_eq!(
            validate_customer_name("").unwrap_err().field(),
            Field::CustomerName
        );
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name("A").is_err());
        assert!(validate_customer_name(&"A".repeat(51)).is_err());
        assert!(validate_customer_name("R2D2").is_err()); // digits not allowed
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("jo@example.com").is_ok());
        assert!(validate_email("first.last-x_1@mail-host.example.org").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("missing@tld").is_err());
        assert!(validate_email("two@at@signs.com").is_err());
        assert!(validate_email("x@y.c").is_err()); // 1-char TLD
        assert!(validate_email("x@y.c0m").is_err()); // digit in TLD
        assert!(validate_email("spa ce@y.com").is_err());
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("5551234567").is_ok());
        assert!(validate_phone("(555) 123-4567").is_ok()); // formatting stripped
        assert!(validate_phone("+1 555 123 4567 890").is_ok()); // 15 digits

        assert!(validate_phone("").is_err());
        assert!(validate_phone("123456789").is_err()); // 9 digits
        assert!(validate_phone("1234567890123456").is_err()); // 16 digits
    }

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Widget 9000").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("W").is_err());
        assert!(validate_item_name("Widget!").is_err()); // punctuation
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity("1").is_ok());
        assert!(validate_quantity(" 1000 ").is_ok());

        assert_eq!(
            validate_quantity("").unwrap_err(),
            ValidationError::Required {
                field: Field::Quantity
            }
        );
        assert!(validate_quantity("3.7").is_err());
        assert!(validate_quantity("abc").is_err());
        assert!(validate_quantity("0").is_err());
        assert!(validate_quantity("-1").is_err());
        assert!(validate_quantity("1001").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("9.99").is_ok());
        assert!(validate_price("0.01").is_ok());

        assert!(validate_price("").is_err());
        assert!(validate_price("free").is_err());
        assert!(validate_price("0").is_err());
        assert!(validate_price("-5").is_err());
        assert!(validate_price("NaN").is_err());
        assert!(validate_price("inf").is_err());

        // same cap as the model's own price setter
        assert!(validate_price("1000000").is_ok());
        assert!(validate_price("1000000.01").is_err());
        assert!(validate_price("1e300").is_err());
    }
}
