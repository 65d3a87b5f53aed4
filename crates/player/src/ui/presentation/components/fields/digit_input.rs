use dioxus::prelude::*;
use lendform_domain::fields::digits::{input_mode, normalize};
use lendform_domain::fields::EchoedText;

use super::control_class;

/// Numeric text input; every change is normalized before it is emitted.
#[component]
pub fn DigitInput(
    value: String,
    config: lendform_domain::DigitProps,
    #[props(default)] disabled: bool,
    #[props(default)] has_error: bool,
    on_change: EventHandler<String>,
    #[props(default)] on_blur: EventHandler<()>,
) -> Element {
    let mut text = use_signal(|| EchoedText::new(value.clone()));

    use_effect(use_reactive!(|value| {
        text.write().sync(&value);
    }));
    use_effect(move || {
        if text.read().needs_settle() {
            text.write().settle();
        }
    });

    let shown = text.read().shown().to_string();
    let placeholder = config.placeholder.clone().unwrap_or_default();
    let max_length = config.max_length.map(|l| l.to_string());

    rsx! {
        div {
            class: "{control_class(has_error, disabled)} field-control--digits",
            if let Some(leading) = &config.leading_content {
                span { class: "field-affix field-affix--leading", "{leading}" }
            }
            input {
                class: "field-input",
                r#type: "text",
                inputmode: input_mode(&config),
                value: "{shown}",
                placeholder: "{placeholder}",
                maxlength: max_length,
                readonly: config.read_only,
                disabled: disabled,
                oninput: {
                    let config = config.clone();
                    move |evt: FormEvent| {
                        let raw = evt.value();
                        let next = normalize(&raw, &config);
                        text.write().on_edit(&raw, &next);
                        on_change.call(next);
                    }
                },
                onblur: move |_| on_blur.call(()),
            }
            if let Some(trailing) = &config.trailing_content {
                span { class: "field-affix field-affix--trailing", "{trailing}" }
            }
        }
    }
}
