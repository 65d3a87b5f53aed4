//! Array-of-object groups: append/remove helpers and a section component
//! rendering each element's child fields.

use dioxus::prelude::*;
use serde_json::Value;

use super::FieldRenderer;
use crate::ui::presentation::state::FormState;

#[derive(Clone)]
pub struct FieldArray {
    form: FormState,
    group: String,
}

pub fn use_field_array(group: &str) -> FieldArray {
    FieldArray {
        form: use_context::<FormState>(),
        group: group.to_string(),
    }
}

impl FieldArray {
    pub fn new(form: FormState, group: impl Into<String>) -> Self {
        Self {
            form,
            group: group.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.form.values.read().array_len(&self.group)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn append(&mut self, element: Value) {
        let pushed = self.form.values.write().push(&self.group, element);
        if let Err(e) = pushed {
            tracing::warn!(group = %self.group, error = %e, "Failed to append array element");
        }
    }

    /// Remove one element. Indices shift, so state under the group resets.
    pub fn remove(&mut self, index: usize) {
        let removed = self.form.values.write().remove_index(&self.group, index);
        if removed.is_some() {
            self.form.forget_under(&self.group);
        }
    }

    pub fn replace(&mut self, elements: Vec<Value>) {
        self.form.forget_under(&self.group);
        self.form.replace_value(&self.group, Value::Array(elements));
    }

    /// Length without subscribing the caller; for effects that also write.
    pub fn peek_len(&self) -> usize {
        self.form.values.peek().array_len(&self.group)
    }

    pub fn clear(&mut self) {
        if self.peek_len() > 0 {
            self.replace(Vec::new());
        }
    }
}

#[component]
pub fn FieldArraySection(
    group: String,
    title: String,
    item_label: String,
    fields: Vec<String>,
    initial: Value,
) -> Element {
    let array = use_field_array(&group);
    let len = array.len();

    rsx! {
        section {
            class: "field-array",
            h2 { class: "field-array-title", "{title}" }
            div {
                class: "field-array-items",
                for (index, number) in (0..len).map(|i| (i, i + 1)) {
                    div {
                        key: "{group}-{index}",
                        class: "field-array-item",
                        div {
                            class: "field-array-item-header",
                            span { "{item_label} #{number}" }
                            if len > 1 {
                                button {
                                    r#type: "button",
                                    class: "button button--small",
                                    onclick: {
                                        let mut array = array.clone();
                                        move |_| array.remove(index)
                                    },
                                    "Remove"
                                }
                            }
                        }
                        div {
                            class: "field-array-item-fields",
                            for child in fields.iter() {
                                FieldRenderer {
                                    key: "{group}.{index}.{child}",
                                    name: child.clone(),
                                    array_path: format!("{group}.{index}.{child}"),
                                }
                            }
                        }
                    }
                }
            }
            div {
                class: "field-array-actions",
                button {
                    r#type: "button",
                    class: "button button--round",
                    aria_label: "Add {item_label}",
                    onclick: {
                        let mut array = array.clone();
                        let initial = initial.clone();
                        move |_| array.append(initial.clone())
                    },
                    "+"
                }
            }
        }
    }
}
