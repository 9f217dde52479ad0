//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur while validating a single input field.
///
/// Every variant names the offending field and carries the received value so
/// the caller can point the user at exactly what to correct.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be a finite number, got {actual}")]
    NonFinite { field: String, actual: f64 },

    #[error("Field '{field}' must be greater than zero, got {actual}")]
    MustBePositive { field: String, actual: f64 },

    #[error("Field '{field}' cannot be negative, got {actual}")]
    Negative { field: String, actual: f64 },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has unrecognized value '{value}' (expected one of: {expected})")]
    UnknownVariant {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Field '{field}' is invalid: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates a non-finite number validation error.
    pub fn non_finite(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::NonFinite {
            field: field.into(),
            actual,
        }
    }

    /// Creates a must-be-positive validation error.
    pub fn must_be_positive(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::MustBePositive {
            field: field.into(),
            actual,
        }
    }

    /// Creates a negative value validation error.
    pub fn negative(field: impl Into<String>, actual: f64) -> Self {
        ValidationError::Negative {
            field: field.into(),
            actual,
        }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an unknown enum variant validation error.
    pub fn unknown_variant(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        ValidationError::UnknownVariant {
            field: field.into(),
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Creates a free-form invalid value error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed validation.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::NonFinite { field, .. }
            | ValidationError::MustBePositive { field, .. }
            | ValidationError::Negative { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::UnknownVariant { field, .. }
            | ValidationError::InvalidValue { field, .. } => field,
        }
    }
}

/// Field checks shared by every input struct.
pub(crate) mod check {
    use super::ValidationError;

    /// Rejects NaN and infinities.
    pub fn finite(field: &str, value: f64) -> Result<f64, ValidationError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ValidationError::non_finite(field, value))
        }
    }

    /// Requires a finite value strictly greater than zero.
    pub fn positive(field: &str, value: f64) -> Result<f64, ValidationError> {
        let value = finite(field, value)?;
        if value <= 0.0 {
            return Err(ValidationError::must_be_positive(field, value));
        }
        Ok(value)
    }

    /// Requires a finite value that is zero or greater.
    pub fn non_negative(field: &str, value: f64) -> Result<f64, ValidationError> {
        let value = finite(field, value)?;
        if value < 0.0 {
            return Err(ValidationError::negative(field, value));
        }
        Ok(value)
    }

    /// Requires a finite value inside `[min, max]`.
    pub fn in_range(field: &str, value: f64, min: f64, max: f64) -> Result<f64, ValidationError> {
        let value = finite(field, value)?;
        if value < min || value > max {
            return Err(ValidationError::out_of_range(field, min, max, value));
        }
        Ok(value)
    }
}

/// Stable machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidInput,
    InvalidConstraint,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::InvalidConstraint => "INVALID_CONSTRAINT",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("relationship_strength", 1.0, 10.0, 12.0);
        assert_eq!(
            format!("{}", err),
            "Field 'relationship_strength' must be between 1 and 10, got 12"
        );
    }

    #[test]
    fn validation_error_unknown_variant_lists_expected() {
        let err = ValidationError::unknown_variant("pricing_goal", "yolo", &["maintain", "market"]);
        assert_eq!(
            format!("{}", err),
            "Field 'pricing_goal' has unrecognized value 'yolo' (expected one of: maintain, market)"
        );
    }

    #[test]
    fn validation_error_exposes_field() {
        let err = ValidationError::must_be_positive("current_arr", 0.0);
        assert_eq!(err.field(), "current_arr");
    }

    #[test]
    fn check_finite_rejects_nan_and_infinity() {
        assert!(check::finite("x", f64::NAN).is_err());
        assert!(check::finite("x", f64::INFINITY).is_err());
        assert_eq!(check::finite("x", 1.5), Ok(1.5));
    }

    #[test]
    fn check_positive_rejects_zero() {
        assert!(matches!(
            check::positive("current_arr", 0.0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(check::positive("current_arr", 0.01).is_ok());
    }

    #[test]
    fn check_non_negative_accepts_zero() {
        assert_eq!(check::non_negative("quantified_value", 0.0), Ok(0.0));
        assert!(check::non_negative("quantified_value", -1.0).is_err());
    }

    #[test]
    fn check_in_range_is_inclusive() {
        assert!(check::in_range("score", 0.0, 0.0, 100.0).is_ok());
        assert!(check::in_range("score", 100.0, 0.0, 100.0).is_ok());
        assert!(check::in_range("score", 100.1, 0.0, 100.0).is_err());
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::InvalidInput), "INVALID_INPUT");
        assert_eq!(format!("{}", ErrorCode::InvalidConstraint), "INVALID_CONSTRAINT");
    }
}
