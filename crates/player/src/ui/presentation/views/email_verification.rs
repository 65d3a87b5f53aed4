//! "Check your email" page shown after the passcode is set.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::onboarding::{mask_email, ResendTimer};
use lendform_shared::AppData;

use super::email::EMAIL_KEY;
use super::resend;
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

const FALLBACK_ADDRESS: &str = "ks*****j@p.com";
const VERIFIED_REDIRECT_MS: u64 = 3_000;

/// Address to show: the query parameter, then the saved address, then a
/// placeholder. Real addresses are masked.
pub fn shown_address(query: &str, saved: &AppData) -> String {
    let saved = saved.extra.get(EMAIL_KEY).and_then(|v| v.as_str()).unwrap_or_default();
    match [query, saved].into_iter().find(|s| !s.trim().is_empty()) {
        Some(address) => mask_email(address.trim()),
        None => FALLBACK_ADDRESS.to_string(),
    }
}

#[component]
pub fn EmailVerificationView(email: String) -> Element {
    let services = use_services();
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let navigator = use_navigator();
    let mut timer = use_signal(ResendTimer::default);
    let mut verified = use_signal(|| false);

    let address = use_memo(use_reactive!(|email| shown_address(&email, &services.app_data.load())));

    let on_resend = {
        let platform = platform.clone();
        move |_| resend(timer, platform.clone(), "verification link")
    };

    let on_verify = move |_| {
        let platform = platform.clone();
        async move {
            verified.set(true);
            timer.write().reset();
            tracing::info!("Email verified");
            platform.sleep_ms(VERIFIED_REDIRECT_MS).await;
            if verified() {
                navigator.push(Route::BuyoutRoute {});
            }
        }
    };

    if verified() {
        return rsx! {
            div {
                class: "page",
                main {
                    class: "page-content",
                    div {
                        class: "banner banner--success",
                        h1 { class: "page-title", "Email verified!" }
                        p { class: "page-subtitle", "Thank you, your email was successfully verified" }
                    }
                    div {
                        class: "form-actions",
                        Link { to: Route::BuyoutRoute {}, class: "button button--primary", "Continue" }
                    }
                }
            }
        };
    }

    let timer_state = timer();
    let sending = timer_state.is_sending();
    let can_resend = timer_state.can_resend();
    let resend_label = if sending { "Sending..." } else { "Resend link" };
    let remaining = timer_state.remaining();

    rsx! {
        div {
            class: "page",
            Header { back: Route::PasscodeRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "Check your email" }
                p {
                    class: "page-subtitle",
                    "To make sure you receive all official bank communication, we sent a verification link to "
                    strong { "{address}" }
                    ". If you can't find the email, make sure to check your Spam, Junk or Promotions folder."
                }
                div {
                    class: "form-actions form-actions--stacked",
                    Link { to: Route::PasscodeRoute {}, class: "button button--secondary", "Change email" }
                    a { href: "mailto:", class: "button button--primary", "Open your email app" }
                    button {
                        r#type: "button",
                        class: "button button--link",
                        disabled: !can_resend,
                        onclick: on_resend,
                        "{resend_label}"
                    }
                    if remaining > 0 {
                        p { class: "field-description", "Resend ({remaining}s)" }
                    }
                    button {
                        r#type: "button",
                        class: "button button--secondary",
                        onclick: on_verify,
                        "Demo: Verify Email"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_address_wins() {
        let saved = AppData::default().with_extra(EMAIL_KEY, json!("saved@example.com"));
        assert_eq!(shown_address("lok@example.com", &saved), "lo*****@example.com");
    }

    #[test]
    fn test_saved_address_then_placeholder() {
        let saved = AppData::default().with_extra(EMAIL_KEY, json!("saved@example.com"));
        assert_eq!(shown_address("", &saved), "sa*****@example.com");
        assert_eq!(shown_address("  ", &AppData::default()), FALLBACK_ADDRESS);
    }
}
