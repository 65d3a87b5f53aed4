//! Application layer: use cases over the outbound ports.

pub mod services;
