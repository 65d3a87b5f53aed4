//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context instead of
//! depending on infrastructure adapter types.

use dioxus::prelude::*;

use crate::application::services::{AppDataService, OpusService};

#[derive(Clone)]
pub struct Services {
    pub app_data: AppDataService,
    pub opus: OpusService,
}

impl Services {
    pub fn new(app_data: AppDataService, opus: OpusService) -> Self {
        Self { app_data, opus }
    }
}

pub fn use_services() -> Services {
    use_context::<Services>()
}
