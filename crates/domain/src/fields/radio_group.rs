//! Radio group: a single nullable option. Re-selecting clears.

use serde_json::Value;

use super::{element_index, FieldKey};
use crate::option::SelectOption;
use crate::value::is_equal;

pub fn is_selected(current: &Value, option: &SelectOption) -> bool {
    option.matches(current)
}

pub fn select(current: &Value, option: &SelectOption, disabled: bool) -> Option<Value> {
    if disabled {
        return None;
    }
    let option = option.to_value();
    if is_equal(current, &option) {
        Some(Value::Null)
    } else {
        Some(option)
    }
}

pub fn on_key(
    options: &[SelectOption],
    current: &Value,
    key: FieldKey,
    index_attr: Option<&str>,
    disabled: bool,
) -> Option<Value> {
    if !matches!(key, FieldKey::Enter | FieldKey::Space) {
        return None;
    }
    let option = element_index(index_attr).and_then(|i| options.get(i))?;
    select(current, option, disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::options;
    use serde_json::json;

    fn genders() -> Vec<SelectOption> {
        options([("Male", "male"), ("Female", "female")])
    }

    #[test]
    fn reselect_clears() {
        let opts = genders();
        let a = select(&Value::Null, &opts[0], false).unwrap();
        assert_eq!(a, json!({"label": "Male", "value": "male"}));
        assert_eq!(select(&a, &opts[0], false), Some(Value::Null));
    }

    #[test]
    fn selecting_other_replaces() {
        let opts = genders();
        let a = select(&Value::Null, &opts[0], false).unwrap();
        let b = select(&a, &opts[1], false).unwrap();
        assert_eq!(b, json!({"label": "Female", "value": "female"}));
        let marked: Vec<bool> = opts.iter().map(|o| is_selected(&b, o)).collect();
        assert_eq!(marked, vec![false, true]);
    }

    #[test]
    fn at_most_one_marked() {
        let opts = genders();
        for current in [Value::Null, opts[0].to_value(), opts[1].to_value()] {
            let count = opts.iter().filter(|o| is_selected(&current, o)).count();
            assert!(count <= 1);
        }
    }

    #[test]
    fn disabled_ignores_selection() {
        assert_eq!(select(&Value::Null, &genders()[0], true), None);
    }

    #[test]
    fn keyboard_selects_by_index() {
        let opts = genders();
        assert_eq!(
            on_key(&opts, &Value::Null, FieldKey::Enter, Some("1"), false),
            Some(opts[1].to_value())
        );
        assert_eq!(on_key(&opts, &Value::Null, FieldKey::Tab, Some("1"), false), None);
    }
}
