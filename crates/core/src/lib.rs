//! `fulfillment-core` — shared domain primitives.
//!
//! This crate contains the **pure domain** error model shared by every
//! fulfillment service (no infrastructure concerns).

pub mod error;

pub use error::{DomainError, DomainResult};
