//! Mobile registration wizard: mobile number, then the one-time code sent
//! to it.
//!
//! Each step owns its own form, so switching steps starts from that step's
//! defaults. The resend cooldown starts when the code step opens.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::onboarding::ResendTimer;
use lendform_domain::{DigitProps, FieldDescriptor, FormValues, Rule, Schema, TextCheck};
use serde_json::json;

use super::{push_pattern, resend, run_countdown};
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::FieldRenderer;
use crate::ui::presentation::state::use_form_state;
use crate::ui::routes::Route;

const MANDATORY: &str = "Mandatory Field";
pub const COUNTRY_PREFIX: &str = "+971";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Mobile,
    Code { phone: String },
}

pub fn phone_number(mobile: &str) -> String {
    format!("{COUNTRY_PREFIX}{mobile}")
}

pub fn mobile_descriptors() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::digit_input(
        "mobile",
        DigitProps::default()
            .integers_only()
            .with_max_length(12)
            .with_leading(COUNTRY_PREFIX)
            .with_placeholder("Mobile number"),
    )
    .with_label("Mobile number")]
}

pub fn mobile_schema() -> Schema {
    let mut checks = vec![TextCheck::min_len(1, MANDATORY)];
    push_pattern(&mut checks, r"^\d{7,12}$", "Enter a valid number");
    Schema::new().field("mobile", Rule::text(checks))
}

pub fn code_descriptors() -> Vec<FieldDescriptor> {
    vec![FieldDescriptor::digit_input(
        "code",
        DigitProps::default()
            .integers_only()
            .with_max_length(6)
            .with_placeholder("------"),
    )
    .with_label("Verification code")]
}

pub fn code_schema() -> Schema {
    let mut checks = vec![
        TextCheck::min_len(6, "Enter 6 digits"),
        TextCheck::max_len(6, "Enter 6 digits"),
    ];
    push_pattern(&mut checks, r"^\d+$", "Digits only");
    Schema::new().field("code", Rule::text(checks))
}

fn blank(name: &str) -> FormValues {
    FormValues::from_value(json!({ name: "" })).unwrap_or_default()
}

#[component]
pub fn MobileOtpView() -> Element {
    let navigator = use_navigator();
    let mut step = use_signal(|| Step::Mobile);

    let on_back = move |_| match step() {
        Step::Code { .. } => step.set(Step::Mobile),
        Step::Mobile => {
            navigator.push(Route::ProductsRoute {});
        }
    };

    const MOBILE_KEY: &str = "mobile";
    const CODE_KEY: &str = "code";
    let body = match step() {
        Step::Mobile => rsx! {
            MobileStep {
                key: "{MOBILE_KEY}",
                on_sent: move |phone: String| step.set(Step::Code { phone }),
            }
        },
        Step::Code { phone } => rsx! {
            CodeStep { key: "{CODE_KEY}", phone }
        },
    };

    rsx! {
        div {
            class: "page",
            header {
                class: "app-header",
                button {
                    r#type: "button",
                    class: "app-header-back",
                    onclick: on_back,
                    "\u{2039} Back"
                }
            }
            main {
                class: "page-content",
                {body}
            }
        }
    }
}

#[component]
fn MobileStep(on_sent: EventHandler<String>) -> Element {
    let form = use_form_state(|| (mobile_schema(), mobile_descriptors(), blank("mobile")));

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = form.clone();
        if let Some(values) = form.validate() {
            let phone = phone_number(values.get_str("mobile"));
            tracing::info!(%phone, "Sending OTP");
            on_sent.call(phone);
        }
    };

    rsx! {
        h1 { class: "page-title", "First things first!" }
        p { class: "page-subtitle", "Register with your UAE mobile number" }
        form {
            class: "form",
            onsubmit,
            FieldRenderer { name: "mobile".to_string() }
            div {
                class: "form-actions",
                button {
                    r#type: "submit",
                    class: "button button--round button--primary",
                    aria_label: "Next",
                    "\u{203a}"
                }
            }
        }
    }
}

#[component]
fn CodeStep(phone: String) -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let navigator = use_navigator();
    let form = use_form_state(|| (code_schema(), code_descriptors(), blank("code")));
    let timer = use_signal(ResendTimer::default);

    use_hook({
        let platform = platform.clone();
        move || {
            let mut timer = timer;
            let run = timer.write().start();
            spawn(run_countdown(timer, run, platform));
        }
    });

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut form = form.clone();
        if let Some(values) = form.validate() {
            tracing::info!(code_length = values.get_str("code").len(), "Verifying OTP");
            navigator.push(Route::EmailRoute {});
        }
    };

    let on_resend = move |_| resend(timer, platform.clone(), "OTP");
    let resend_label = timer.read().label("Resend");
    let can_resend = timer.read().can_resend();

    rsx! {
        h1 { class: "page-title", "Let's verify it.." }
        p { class: "page-subtitle", "A verification code was sent to" }
        p { class: "page-emphasis", "{phone}" }
        form {
            class: "form",
            onsubmit,
            FieldRenderer { name: "code".to_string() }
            div {
                button {
                    r#type: "button",
                    class: "button button--link",
                    disabled: !can_resend,
                    onclick: on_resend,
                    "{resend_label}"
                }
            }
            div {
                class: "form-actions",
                button {
                    r#type: "submit",
                    class: "button button--round button--primary",
                    aria_label: "Verify",
                    "\u{203a}"
                }
            }
        }
    }
}
