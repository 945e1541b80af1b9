//! # Error Types
//!
//! Domain-specific error types for levelup-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  levelup-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Form/input validation failures                  │
//! │                                                                         │
//! │  levelup-store errors (separate crate)                                  │
//! │  └── StoreError       - Storage slot failures                           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → View layer            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product code, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product code was not found in the catalog.
    ///
    /// ## When This Occurs
    /// - `add_item` referenced a code the catalog does not carry
    /// - A review form named a product that is not for sale
    ///
    /// Recovered locally: the operation aborts with no state change and the
    /// caller surfaces a message.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// One variant per rule shape, so the view can map them to field messages.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., bad email shape, unparseable date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Two fields that must agree do not (password confirmation).
    #[error("{field} does not match")]
    Mismatch { field: String },

    /// Registrant is younger than the minimum account age.
    #[error("must be at least {minimum_years} years old")]
    UnderAge { minimum_years: u32 },

    /// A review named a product code the catalog does not carry.
    #[error("product '{code}' is not in the catalog")]
    NotInCatalog { code: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownProduct("XX999".to_string());
        assert_eq!(err.to_string(), "Unknown product: XX999");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 2,
        };
        assert_eq!(err.to_string(), "name must be at least 2 characters");

        let err = ValidationError::UnderAge { minimum_years: 18 };
        assert_eq!(err.to_string(), "must be at least 18 years old");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Mismatch {
            field: "password confirmation".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
