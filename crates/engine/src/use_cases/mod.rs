//! Use cases - proxy flows orchestrated over the Opus port.

pub mod opus;

pub use opus::{OpusUseCaseError, OpusUseCases};
