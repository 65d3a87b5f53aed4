//! Lendform Player
//!
//! The loan-application front-end: field components, form state, pages and
//! the platform adapters they run on. Multi-platform support is provided via
//! compile-time `cfg` selection.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod state;
pub mod ui;

pub use ui::presentation;
pub use ui::routes;

pub use ui::app;
pub use ui::{use_platform, Platform, Route};
