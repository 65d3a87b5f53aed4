//! Common UI components

pub mod header;
pub mod toast;

pub use header::Header;
pub use toast::ToastHost;
