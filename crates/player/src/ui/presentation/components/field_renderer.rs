//! Field Renderer
//!
//! Resolves a field by name (or by `group.index.child` path inside an array
//! group), evaluates its disabled rule against the live form values, binds
//! its error, and renders the slots it yields in order.
//! Lookup failures render inline in place of the field.

use dioxus::prelude::*;
use lendform_domain::fields::text_input::InputKind;
use lendform_domain::{resolve_field, FieldKind, FieldSlot};
use serde_json::Value;

use super::fields::{CheckBox, DigitInput, DropDown, FileInput, RadioGroup, TextArea, TextInput};
use crate::ui::presentation::state::FormState;

#[component]
pub fn FieldRenderer(name: String, #[props(default)] array_path: Option<String>) -> Element {
    let form = use_context::<FormState>();

    let rendered = {
        let values = form.values.read();
        let errors = form.errors.read();
        resolve_field(&name, array_path.as_deref(), form.descriptors(), &values).map(|field| {
            let binding = field.bind(&errors);
            let current = values.get(&binding.path).cloned().unwrap_or(Value::Null);
            let parts: Vec<Element> = field
                .slots(&errors)
                .into_iter()
                .map(|slot| match slot {
                    FieldSlot::Label(label) => rsx! {
                        label { class: "field-label", "{label}" }
                    },
                    FieldSlot::Control(kind) => render_control(
                        form.clone(),
                        kind.clone(),
                        binding.path.clone(),
                        current.clone(),
                        binding.disabled,
                        binding.has_error,
                    ),
                    FieldSlot::Description(description) => rsx! {
                        p { class: "field-description", "{description}" }
                    },
                    FieldSlot::Message(message) => {
                        let message = message.unwrap_or_default();
                        rsx! {
                            p { class: "field-message", "{message}" }
                        }
                    }
                })
                .collect();
            (binding.path.clone(), binding.has_error, parts)
        })
    };

    let (path, has_error, parts) = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            return rsx! {
                div { class: "field field--missing", "{e}" }
            };
        }
    };

    let field_class = if has_error { "field field--error" } else { "field" };

    rsx! {
        div {
            class: "{field_class}",
            "data-field": "{path}",
            for part in parts {
                {part}
            }
        }
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn render_control(
    form: FormState,
    kind: FieldKind,
    path: String,
    current: Value,
    disabled: bool,
    has_error: bool,
) -> Element {
    let on_blur = {
        let mut form = form.clone();
        let path = path.clone();
        move |_| form.touch(&path)
    };
    let on_value = {
        let mut form = form.clone();
        let path = path.clone();
        move |value: Value| form.set_value(&path, value)
    };
    let on_text = {
        let mut form = form.clone();
        let path = path.clone();
        move |text: String| form.set_value(&path, Value::String(text))
    };

    match kind {
        FieldKind::TextInput(config) if InputKind::of(&config) == InputKind::File => {
            let mut form = form.clone();
            rsx! {
                FileInput {
                    config,
                    selected: current,
                    disabled,
                    has_error,
                    on_files: move |files| form.set_files(&path, files),
                    on_blur,
                }
            }
        }
        FieldKind::TextInput(config) => rsx! {
            TextInput { value: as_text(&current), config, disabled, has_error, on_change: on_text, on_blur }
        },
        FieldKind::DigitInput(config) => rsx! {
            DigitInput { value: as_text(&current), config, disabled, has_error, on_change: on_text, on_blur }
        },
        FieldKind::Textarea(config) => rsx! {
            TextArea { value: as_text(&current), config, disabled, has_error, on_change: on_text, on_blur }
        },
        FieldKind::Checkbox(config) => rsx! {
            CheckBox { value: current, config, disabled, has_error, on_change: on_value, on_blur }
        },
        FieldKind::RadioGroup(config) => rsx! {
            RadioGroup { value: current, config, disabled, has_error, on_change: on_value, on_blur }
        },
        FieldKind::Dropdown(config) => rsx! {
            DropDown { value: current, config, disabled, has_error, on_change: on_value, on_blur }
        },
    }
}
