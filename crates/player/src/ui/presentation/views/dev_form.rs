//! Shared frame for the developer form pages
//!
//! Switches the form between its empty and filled defaults, toggles every
//! field's disabled flag, and shows the parsed payload after a submit.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::{CheckboxProps, FormValues};
use serde_json::Value;

use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::fields::CheckBox;
use crate::ui::presentation::state::{handle_submit, FormState, ToastKind, use_toast_state};
use crate::ui::routes::Route;

pub(crate) fn payload_message(values: &FormValues) -> String {
    format!("Payload: {}", values.to_value())
}

pub(crate) fn defaults_toggle_label(with_values: bool) -> &'static str {
    if with_values {
        "With Empty Values"
    } else {
        "With Default Values"
    }
}

/// Expects the page to have provided its `FormState` already.
#[component]
pub fn DevFormLayout(
    #[props(into)] title: String,
    empty: FormValues,
    filled: FormValues,
    children: Element,
) -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let toasts = use_toast_state();
    let form = use_context::<FormState>();
    let mut with_values = use_signal(|| false);
    let disabled = form.fields_disabled();

    let toggle_defaults = {
        let mut form = form.clone();
        move |_| {
            let next = !with_values();
            with_values.set(next);
            let defaults = if next { filled.clone() } else { empty.clone() };
            tracing::debug!(with_values = next, "Resetting developer form");
            form.reset(defaults);
        }
    };

    let toggle_disabled = {
        let mut form = form.clone();
        move |value: Value| form.set_fields_disabled(value.as_bool().unwrap_or_default())
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form.clone();
        let platform = platform.clone();
        let mut toasts = toasts;
        async move {
            if let Some(values) = handle_submit(form, platform).await {
                tracing::info!(values = %values.to_value(), "Developer form submitted");
                toasts.show(ToastKind::Info, payload_message(&values));
            }
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::HomeRoute {} }
            main {
                class: "page-content",
                div {
                    class: "dev-form-header",
                    h1 { class: "page-title", "{title}" }
                    div {
                        class: "dev-form-controls",
                        button {
                            r#type: "button",
                            class: "button button--link",
                            onclick: toggle_defaults,
                            "{defaults_toggle_label(with_values())}"
                        }
                        CheckBox {
                            value: Value::Bool(disabled),
                            config: CheckboxProps::single("Disabled All Fields"),
                            on_change: toggle_disabled,
                        }
                    }
                }
                form {
                    class: "form",
                    onsubmit,
                    {children}
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        "Submit"
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
    fn test_payload_message_is_json() {
        let values = FormValues::from_value(json!({"name": "Jay Smith"})).unwrap();
        assert_eq!(payload_message(&values), r#"Payload: {"name":"Jay Smith"}"#);
    }

    #[test]
    fn test_toggle_label_names_the_other_defaults() {
        assert_eq!(defaults_toggle_label(false), "With Default Values");
        assert_eq!(defaults_toggle_label(true), "With Empty Values");
    }
}
