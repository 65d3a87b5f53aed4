//! Single-line text input with masking, debouncing, and a password toggle.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::descriptor::InputType;
use lendform_domain::fields::text_input::{effective_type, InputUpdate, TextInputState};

use super::control_class;
use crate::ports::outbound::PlatformPort;

#[component]
pub fn TextInput(
    value: String,
    config: lendform_domain::TextInputProps,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_change: EventHandler<String>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let mut state = use_signal(|| TextInputState::new(value.clone()));

    use_effect(use_reactive!(|value| {
        state.write().sync_external(&value);
    }));
    // Second render of a masked keystroke
    use_effect(move || {
        if state.read().needs_settle() {
            state.write().settle();
        }
    });

    let input_type = effective_type(&config, state.read().show_password);
    let display = state.read().display().to_string();
    let show_toggle = config.input_type == InputType::Password && config.toggle_password;
    let toggle_label = if state.read().show_password { "Hide" } else { "Show" };
    let placeholder = config.placeholder.clone().unwrap_or_default();
    let max_length = config.max_length.map(|l| l.to_string());
    let read_only = config.read_only;
    let leading = config.leading_content.clone();
    let trailing = config.trailing_content.clone();

    rsx! {
        div {
            class: "{control_class(has_error, disabled)} field-control--text",

            if let Some(leading) = leading {
                span { class: "field-affix field-affix--leading", "{leading}" }
            }

            input {
                class: "field-input",
                r#type: input_type.as_str(),
                value: "{display}",
                placeholder: "{placeholder}",
                maxlength: max_length,
                readonly: read_only,
                disabled: disabled,
                oninput: move |evt: FormEvent| {
                    let update = state.write().on_input(&evt.value(), &config);
                    match update {
                        InputUpdate::Emit(next) => on_change.call(next),
                        InputUpdate::Schedule { ticket, delay_ms } => {
                            let platform = platform.clone();
                            spawn(async move {
                                platform.sleep_ms(delay_ms).await;
                                let fired = state.write().on_timer(ticket);
                                if let Some(next) = fired {
                                    on_change.call(next);
                                }
                            });
                        }
                    }
                },
                onblur: move |_| on_blur.call(()),
            }

            if show_toggle {
                button {
                    r#type: "button",
                    class: "field-affix field-affix--button",
                    disabled: disabled,
                    onclick: move |_| state.write().toggle_password(),
                    "{toggle_label}"
                }
            }

            if let Some(trailing) = trailing {
                span { class: "field-affix field-affix--trailing", "{trailing}" }
            }
        }
    }
}
