//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, errors, units)
//! - `renewal` - Renewal inputs, strategy choices and intake defaulting
//! - `pricing` - Pure scoring and recommendation services

pub mod foundation;
pub mod pricing;
pub mod renewal;
