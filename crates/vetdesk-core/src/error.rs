//! # Error Types
//!
//! Validation errors for vetdesk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  vetdesk-core (this file)                                              │
//! │  └── ValidationError  - Business-rule violations                       │
//! │                                                                         │
//! │  vetdesk-db (separate crate)                                           │
//! │  └── StoreError       - Database operation failures                    │
//! │                                                                         │
//! │  vetdesk-services (separate crate)                                     │
//! │  └── DomainError      - What the presentation layer sees               │
//! │                                                                         │
//! │  Flow: ValidationError ─┐                                              │
//! │        StoreError ──────┴──► DomainError ──► error dialog              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to a user-facing message naming the violated rule

use thiserror::Error;

/// Business-rule validation errors.
///
/// Raised by the pure validators before any store call is made. Each
/// variant renders the specific rule that was violated; validation stops
/// at the first failing rule, so callers always see exactly one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Value must be a positive number.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not in the allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// A date/time lies in the past (with the scheduling grace window).
    #[error("{field} must not be in the past")]
    PastDateTime { field: String },
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "reason".to_string(),
        };
        assert_eq!(err.to_string(), "reason is required");

        let err = ValidationError::TooShort {
            field: "reason".to_string(),
            min: 5,
        };
        assert_eq!(err.to_string(), "reason must be at least 5 characters");

        let err = ValidationError::PastDateTime {
            field: "scheduled_at".to_string(),
        };
        assert_eq!(err.to_string(), "scheduled_at must not be in the past");
    }
}
