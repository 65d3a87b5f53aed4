use dioxus::prelude::*;

use crate::ui::routes::Route;

/// Top bar with a back link and an optional title
#[component]
pub fn Header(back: Route, #[props(default)] title: String) -> Element {
    rsx! {
        header {
            class: "app-header",
            Link { to: back, class: "app-header-back", "\u{2039} Back" }
            if !title.is_empty() {
                h1 { class: "app-header-title", "{title}" }
            }
        }
    }
}
