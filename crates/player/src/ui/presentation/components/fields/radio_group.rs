use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::fields::radio_group;
use lendform_domain::fields::FocusWithin;
use serde_json::Value;

use super::field_key;
use crate::ports::outbound::PlatformPort;

/// Single nullable choice; re-selecting the chosen option clears it.
#[component]
pub fn RadioGroup(
    value: Value,
    config: lendform_domain::RadioGroupProps,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_change: EventHandler<Value>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let mut focus = use_signal(FocusWithin::default);

    let error_class = if has_error { " radio-group--error" } else { "" };
    let disabled_class = if disabled { " radio-group--disabled" } else { "" };

    rsx! {
        div {
            class: "radio-group{error_class}{disabled_class}",
            role: "radiogroup",
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
                    let selected = radio_group::is_selected(&value, &option);
                    let on_click = {
                        let value = value.clone();
                        let option = option.clone();
                        move |_| {
                            if let Some(next) = radio_group::select(&value, &option, disabled) {
                                on_change.call(next);
                            }
                        }
                    };
                    let on_key = {
                        let value = value.clone();
                        let options = config.options.clone();
                        move |evt: KeyboardEvent| {
                            let key = field_key(&evt.key());
                            let attr = index.to_string();
                            if let Some(next) = radio_group::on_key(&options, &value, key, Some(&attr), disabled) {
                                evt.prevent_default();
                                on_change.call(next);
                            }
                        }
                    };
                    rsx! {
                        div {
                            key: "{index}",
                            class: if selected { "radio radio--selected" } else { "radio" },
                            role: "radio",
                            "data-element-index": "{index}",
                            aria_checked: "{selected}",
                            tabindex: if disabled { "-1" } else { "0" },
                            onclick: on_click,
                            onkeydown: on_key,
                            span { class: "radio-dot" }
                            span { class: "radio-label", "{option.label}" }
                        }
                    }
                }
            }
        }
    }
}
