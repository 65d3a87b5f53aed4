//! Infrastructure adapters: platform services and the Engine HTTP client.

pub mod http_client;
pub mod platform;
