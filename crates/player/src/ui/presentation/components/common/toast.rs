//! Toast host
//!
//! Renders the toast stack and dismisses non-loading toasts after a delay.

use std::sync::Arc;

use dioxus::prelude::*;

use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::state::{use_toast_state, ToastKind};

const TOAST_DURATION_MS: u64 = 4_000;

#[component]
pub fn ToastHost() -> Element {
    let toasts = use_toast_state();
    let platform = use_context::<Arc<dyn PlatformPort>>();

    // Schedule dismissal for each toast id once
    let mut scheduled = use_signal(std::collections::HashSet::<u64>::new);
    use_effect(move || {
        for toast in toasts.toasts.read().iter() {
            if !toast.kind.auto_dismiss() || scheduled.peek().contains(&toast.id) {
                continue;
            }
            scheduled.write().insert(toast.id);
            let id = toast.id;
            let platform = platform.clone();
            let mut toasts = toasts;
            spawn(async move {
                platform.sleep_ms(TOAST_DURATION_MS).await;
                toasts.dismiss(id);
            });
        }
    });

    rsx! {
        div {
            class: "toast-stack",
            for toast in toasts.toasts.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Loading => "toast toast--loading",
                        ToastKind::Info => "toast toast--info",
                        ToastKind::Success => "toast toast--success",
                        ToastKind::Error => "toast toast--error",
                    },
                    role: "status",
                    onclick: move |_| {
                        let mut toasts = toasts;
                        toasts.dismiss(toast.id);
                    },
                    "{toast.message}"
                }
            }
        }
    }
}
