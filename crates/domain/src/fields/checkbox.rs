//! Checkbox: a single boolean toggle, or a multi-select over an option list.

use serde_json::Value;

use super::{element_index, FieldKey};
use crate::descriptor::CheckboxProps;
use crate::option::SelectOption;
use crate::value::{contains_object, is_equal};

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Single mode: the next value after activation.
pub fn toggle_single(current: &Value, disabled: bool) -> Option<Value> {
    (!disabled).then(|| Value::Bool(!truthy(current)))
}

pub fn is_checked(current: &Value) -> bool {
    truthy(current)
}

/// Option mode: remove every entry equal to `option`, or append it.
pub fn toggle_option(current: &Value, option: &SelectOption, disabled: bool) -> Option<Value> {
    if disabled {
        return None;
    }
    let selected = current.as_array()?;
    let option = option.to_value();
    if contains_object(selected, &option) {
        Some(Value::Array(
            selected
                .iter()
                .filter(|item| !is_equal(item, &option))
                .cloned()
                .collect(),
        ))
    } else {
        let mut next = selected.clone();
        next.push(option);
        Some(Value::Array(next))
    }
}

pub fn is_option_selected(current: &Value, option: &SelectOption) -> bool {
    current
        .as_array()
        .is_some_and(|selected| contains_object(selected, &option.to_value()))
}

/// Enter/Space on a focused tick box. In option mode the target row is found
/// through its `data-element-index`.
pub fn on_key(
    props: &CheckboxProps,
    current: &Value,
    key: FieldKey,
    index_attr: Option<&str>,
    disabled: bool,
) -> Option<Value> {
    if !matches!(key, FieldKey::Enter | FieldKey::Space) {
        return None;
    }
    if !props.is_multi() {
        return toggle_single(current, disabled);
    }
    let option = element_index(index_attr).and_then(|i| props.options.get(i))?;
    toggle_option(current, option, disabled)
}
