//! Pricing pipeline errors.

use thiserror::Error;

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Errors returned by the recommendation pipeline.
///
/// The pipeline is deterministic, so retrying with the same input always
/// fails the same way; the caller must correct the input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// A required input is non-finite, out of range, of the wrong sign, or an
    /// unrecognized categorical value.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The contract cap sits below the discount floor, so no increase
    /// satisfies both bounds.
    #[error("Contract cap {cap} is below the discount floor {floor}; the allowed range is empty")]
    InvalidConstraint { cap: f64, floor: f64 },
}

impl PricingError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PricingError::InvalidInput(_) => ErrorCode::InvalidInput,
            PricingError::InvalidConstraint { .. } => ErrorCode::InvalidConstraint,
        }
    }

    /// Returns the offending field name.
    pub fn field(&self) -> &str {
        match self {
            PricingError::InvalidInput(err) => err.field(),
            PricingError::InvalidConstraint { .. } => "price_increase_cap",
        }
    }
}
