//! Common validation utilities.

use validator::ValidationError;

/// Validates that a string has at least one non-whitespace character.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}

/// Validates that a work order quantity is at least 1.
pub fn validate_quantity(quantity: i32) -> Result<(), ValidationError> {
    if quantity >= 1 {
        Ok(())
    } else {
        let mut err = ValidationError::new("quantity_range");
        err.message = Some("Quantity must be at least 1".into());
        Err(err)
    }
}
