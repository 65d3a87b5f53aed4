//! Checkbox in single (boolean) or option-list mode.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::fields::checkbox;
use lendform_domain::fields::FocusWithin;
use serde_json::Value;

use super::field_key;
use crate::ports::outbound::PlatformPort;

#[component]
pub fn CheckBox(
    value: Value,
    config: lendform_domain::CheckboxProps,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_change: EventHandler<Value>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let mut focus = use_signal(FocusWithin::default);

    let error_class = if has_error { " checkbox--error" } else { "" };
    let disabled_class = if disabled { " checkbox--disabled" } else { "" };

    if !config.is_multi() {
        let checked = checkbox::is_checked(&value);
        let label = config.label.clone().unwrap_or_default();
        let on_click = {
            let value = value.clone();
            move |_| {
                if let Some(next) = checkbox::toggle_single(&value, disabled) {
                    on_change.call(next);
                }
            }
        };
        let on_key = {
            let config = config.clone();
            move |evt: KeyboardEvent| {
                let key = field_key(&evt.key());
                if let Some(next) = checkbox::on_key(&config, &value, key, None, disabled) {
                    evt.prevent_default();
                    on_change.call(next);
                }
            }
        };
        return rsx! {
            div {
                class: "checkbox{error_class}{disabled_class}",
                role: "checkbox",
                aria_checked: "{checked}",
                aria_disabled: "{disabled}",
                tabindex: if disabled { "-1" } else { "0" },
                onclick: on_click,
                onkeydown: on_key,
                onblur: move |_| on_blur.call(()),
                span { class: if checked { "checkbox-box checkbox-box--checked" } else { "checkbox-box" } }
                if !label.is_empty() {
                    span { class: "checkbox-label", "{label}" }
                }
            }
        };
    }

    rsx! {
        div {
            class: "checkbox-list{error_class}{disabled_class}",
            role: "group",
            onfocusin: move |_| focus.write().enter(),
            onfocusout: move |_| {
                let ticket = focus.write().leave();
                let platform = platform.clone();
                spawn(async move {
                    platform.sleep_ms(0).await;
                    if focus.peek().has_left(ticket) {
                        on_blur.call(());
                    }
                });
            },
            for (index, option) in config.options.iter().cloned().enumerate() {
                {
                    let selected = checkbox::is_option_selected(&value, &option);
                    let on_click = {
                        let value = value.clone();
                        let option = option.clone();
                        move |_| {
                            if let Some(next) = checkbox::toggle_option(&value, &option, disabled) {
                                on_change.call(next);
                            }
                        }
                    };
                    let on_key = {
                        let value = value.clone();
                        let config = config.clone();
                        move |evt: KeyboardEvent| {
                            let key = field_key(&evt.key());
                            let attr = index.to_string();
                            if let Some(next) = checkbox::on_key(&config, &value, key, Some(&attr), disabled) {
                                evt.prevent_default();
                                on_change.call(next);
                            }
                        }
                    };
                    rsx! {
                        div {
                            key: "{index}",
                            class: "checkbox",
                            role: "checkbox",
                            "data-element-index": "{index}",
                            aria_checked: "{selected}",
                            tabindex: if disabled { "-1" } else { "0" },
                            onclick: on_click,
                            onkeydown: on_key,
                            span { class: if selected { "checkbox-box checkbox-box--checked" } else { "checkbox-box" } }
                            span { class: "checkbox-label", "{option.label}" }
                        }
                    }
                }
            }
        }
    }
}
