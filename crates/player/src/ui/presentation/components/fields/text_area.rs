use dioxus::prelude::*;
use lendform_domain::fields::textarea::auto_bullet;
use lendform_domain::fields::EchoedText;

use super::control_class;

#[component]
pub fn TextArea(
    value: String,
    config: lendform_domain::TextareaProps,
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
    let bulleted = config.auto_bullet;

    rsx! {
        div {
            class: "{control_class(has_error, disabled)} field-control--textarea",
            textarea {
                class: "field-input",
                rows: "{config.rows}",
                placeholder: "{placeholder}",
                value: "{shown}",
                disabled: disabled,
                oninput: move |evt: FormEvent| {
                    let raw = evt.value();
                    let next = if bulleted {
                        let previous = text.peek().shown().to_string();
                        auto_bullet(&previous, &raw)
                    } else {
                        raw.clone()
                    };
                    text.write().on_edit(&raw, &next);
                    on_change.call(next);
                },
                onblur: move |_| on_blur.call(()),
            }
        }
    }
}
