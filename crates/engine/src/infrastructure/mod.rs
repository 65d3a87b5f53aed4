//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod opus;
pub mod ports;
