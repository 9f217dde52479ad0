//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, errors and unit conversions that form the
//! vocabulary of the renewal pricing domain.

mod errors;
mod percentage;
pub mod units;

pub(crate) use errors::check;
pub use errors::{ErrorCode, ValidationError};
pub use percentage::Percentage;
