//! Lendform Engine library.
//!
//! Server-side proxy between the Player and the Opus workflow API. The Player
//! never sees the Opus service key; every upstream call goes through here.
//!
//! ## Structure
//!
//! - `use_cases/` - Proxy flows (upload, run job, fetch result)
//! - `infrastructure/` - The Opus port and its reqwest adapter
//! - `api/` - HTTP entry points
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use config::EngineConfig;
