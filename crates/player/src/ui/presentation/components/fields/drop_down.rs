//! Dropdown with value, object, and multi-select (chips) return types.
//!
//! Option rows swallow `mousedown` so focus stays on the controller while
//! clicking; `focusout` on the controller therefore means focus really left.

use std::rc::Rc;

use dioxus::prelude::*;
use lendform_domain::fields::dropdown::{
    controller_display, is_option_selected, is_placeholder, visible_options, ControllerDisplay,
    DropdownEvent, DropdownState,
};
use lendform_domain::fields::FieldKey;
use serde_json::Value;

use super::{control_class, field_key};

#[component]
pub fn DropDown(
    value: Value,
    config: lendform_domain::DropdownProps,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_change: EventHandler<Value>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let mut state = use_signal(DropdownState::new);
    let mut controller = use_signal(|| None::<Rc<MountedData>>);

    let dispatch = {
        let value = value.clone();
        let config = config.clone();
        use_callback(move |event: DropdownEvent| {
            let effect = state.write().handle(event, &config, &value, disabled);
            if let Some(next) = effect.change {
                on_change.call(next);
            }
            if effect.blur {
                on_blur.call(());
            }
            if effect.focus_controller {
                if let Some(element) = controller.peek().clone() {
                    spawn(async move {
                        let _ = element.set_focus(true).await;
                    });
                }
            }
        })
    };

    let open = state.read().open;
    let highlighted = state.read().highlighted;
    let visible = visible_options(&config, &value);
    let display = controller_display(&config, &value);
    let open_class = if open { " dropdown--open" } else { "" };

    rsx! {
        div {
            class: "dropdown{open_class}",
            div {
                class: "{control_class(has_error, disabled)} dropdown-controller",
                role: "combobox",
                aria_expanded: "{open}",
                aria_disabled: "{disabled}",
                tabindex: if disabled { "-1" } else { "0" },
                onmounted: move |evt| controller.set(Some(evt.data())),
                onclick: move |_| dispatch.call(DropdownEvent::ControllerClick),
                onkeydown: move |evt: KeyboardEvent| {
                    let key = field_key(&evt.key());
                    if matches!(key, FieldKey::Space | FieldKey::Enter | FieldKey::ArrowUp | FieldKey::ArrowDown) {
                        evt.prevent_default();
                    }
                    dispatch.call(DropdownEvent::Key(key));
                },
                onfocusout: move |_| dispatch.call(DropdownEvent::FocusOut),

                {match display {
                    ControllerDisplay::Placeholder(text) => rsx! {
                        span { class: "dropdown-placeholder", "{text}" }
                    },
                    ControllerDisplay::Label(text) => rsx! {
                        span { class: "dropdown-label", "{text}" }
                    },
                    ControllerDisplay::Chips(chips) => rsx! {
                        div { class: "dropdown-chips",
                            for chip in chips {
                                span {
                                    key: "{chip.label}",
                                    class: "dropdown-chip",
                                    "{chip.label}"
                                    if !disabled {
                                        button {
                                            r#type: "button",
                                            class: "dropdown-chip-remove",
                                            onmousedown: move |evt| evt.prevent_default(),
                                            onclick: {
                                                let chip = chip.clone();
                                                move |evt: MouseEvent| {
                                                    evt.stop_propagation();
                                                    dispatch.call(DropdownEvent::RemoveChip(chip.clone()));
                                                }
                                            },
                                            "\u{d7}"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
                span { class: "dropdown-caret", if open { "\u{25b4}" } else { "\u{25be}" } }
            }

            if open {
                ul {
                    class: "dropdown-options",
                    role: "listbox",
                    for (index, option) in visible.iter().enumerate() {
                        {
                            let placeholder = is_placeholder(&config, &visible, option);
                            let selected = is_option_selected(&config, &value, option);
                            let mut class = String::from("dropdown-option");
                            if selected {
                                class.push_str(" dropdown-option--selected");
                            }
                            if highlighted == Some(index) {
                                class.push_str(" dropdown-option--highlighted");
                            }
                            if placeholder {
                                class.push_str(" dropdown-option--placeholder");
                            }
                            if config.option_one_liner {
                                class.push_str(" dropdown-option--one-line");
                            }
                            rsx! {
                                li {
                                    key: "{index}",
                                    class: "{class}",
                                    role: "option",
                                    aria_selected: "{selected}",
                                    "data-element-index": "{index}",
                                    onmousedown: move |evt| evt.prevent_default(),
                                    onmouseenter: move |_| dispatch.call(DropdownEvent::OptionHover(index)),
                                    onclick: move |_| dispatch.call(DropdownEvent::OptionClick(index)),
                                    "{option.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
