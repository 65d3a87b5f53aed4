//! Outbound ports: platform services and the Engine proxy.

pub mod opus_api_port;
pub mod platform;
pub mod platform_port;

pub use opus_api_port::{ApiError, OpusApiPort, PickedFile};
pub use platform::{
    storage_keys, DocumentProvider, EngineConfigProvider, SleepProvider, StorageProvider,
};
pub use platform_port::PlatformPort;

#[cfg(test)]
pub use opus_api_port::MockOpusApiPort;
