use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;
pub mod routes;

pub use routes::Route;

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::ToastState::new);

    let platform = use_platform();
    use_effect(move || platform.set_page_title("Lendform"));

    rsx! {
        document::Stylesheet {
            href: asset!("assets/css/output.css"),
        }

        div {
            class: "app-shell",
            Router::<routes::Route> {}
            presentation::components::common::ToastHost {}
        }
    }
}
