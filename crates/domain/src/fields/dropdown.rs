//! Dropdown: selection in three return-type modes plus the open/close and
//! keyboard-navigation state machine.
//!
//! The UI owns a `DropdownState`, feeds every `DropdownEvent` through
//! `DropdownState::handle`, and applies the returned `DropdownEffect`.

use serde_json::Value;

use super::FieldKey;
use crate::descriptor::DropdownProps;
pub use crate::descriptor::ReturnType;
use crate::option::SelectOption;
use crate::value::{contains_object, is_equal};

/// Options shown in the open list. Array mode hides selected options when
/// `remove_option_when_selected` is set; an empty result becomes a single
/// placeholder row.
pub fn visible_options(props: &DropdownProps, current: &Value) -> Vec<SelectOption> {
    let mut visible: Vec<SelectOption> = props.options.clone();
    if props.return_type == ReturnType::Array && props.remove_option_when_selected {
        let selected = current.as_array().map(Vec::as_slice).unwrap_or(&[]);
        visible.retain(|option| !contains_object(selected, &option.to_value()));
    }
    if visible.is_empty() {
        visible.push(placeholder_row(props));
    }
    visible
}

fn placeholder_row(props: &DropdownProps) -> SelectOption {
    SelectOption::new(props.no_options_label.clone(), "")
}

/// Rows the highlight may land on; the placeholder row is not one of them.
fn selectable_count(props: &DropdownProps, current: &Value) -> usize {
    let visible = visible_options(props, current);
    match visible.first() {
        Some(first) if is_placeholder(props, &visible, first) => 0,
        _ => visible.len(),
    }
}

/// Whether `option` is the "no options" row of `visible`.
pub fn is_placeholder(props: &DropdownProps, visible: &[SelectOption], option: &SelectOption) -> bool {
    visible.len() == 1 && option.label == props.no_options_label
}

pub fn is_option_selected(props: &DropdownProps, current: &Value, option: &SelectOption) -> bool {
    if props.options.is_empty() {
        return false;
    }
    match props.return_type {
        ReturnType::Value => is_equal(&option.value, current),
        ReturnType::Object => option.matches(current),
        ReturnType::Array => current
            .as_array()
            .is_some_and(|selected| contains_object(selected, &option.to_value())),
    }
}

/// Next value after choosing `option`, or `None` for a no-op.
pub fn select(
    props: &DropdownProps,
    visible: &[SelectOption],
    current: &Value,
    option: &SelectOption,
) -> Option<Value> {
    if is_placeholder(props, visible, option) {
        return None;
    }
    match props.return_type {
        ReturnType::Value => {
            let same = is_equal(&option.value, current);
            if same && props.disable_toggle_on_selected_option {
                return None;
            }
            Some(if same {
                Value::String(String::new())
            } else {
                option.value.clone()
            })
        }
        ReturnType::Object => {
            let same = option.matches(current);
            if same && props.disable_toggle_on_selected_option {
                return None;
            }
            Some(if same { Value::Null } else { option.to_value() })
        }
        ReturnType::Array => Some(toggle_membership(current, option)),
    }
}

fn toggle_membership(current: &Value, option: &SelectOption) -> Value {
    let option = option.to_value();
    let selected = current.as_array().cloned().unwrap_or_default();
    if contains_object(&selected, &option) {
        Value::Array(selected.into_iter().filter(|o| !is_equal(o, &option)).collect())
    } else {
        let mut next = selected;
        next.push(option);
        Value::Array(next)
    }
}

/// What the closed controller shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ControllerDisplay {
    Placeholder(String),
    Label(String),
    /// Array mode: one removable chip per selected option
    Chips(Vec<SelectOption>),
}

pub fn controller_display(props: &DropdownProps, current: &Value) -> ControllerDisplay {
    let placeholder = || ControllerDisplay::Placeholder(props.placeholder.clone());
    match props.return_type {
        ReturnType::Value => props
            .options
            .iter()
            .find(|option| is_equal(&option.value, current))
            .map(|option| ControllerDisplay::Label(option.label.clone()))
            .unwrap_or_else(placeholder),
        ReturnType::Object => SelectOption::from_value(current)
            .map(|option| ControllerDisplay::Label(option.label))
            .unwrap_or_else(|_| placeholder()),
        ReturnType::Array => {
            let chips: Vec<SelectOption> = current
                .as_array()
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|item| SelectOption::from_value(item).ok())
                        .collect()
                })
                .unwrap_or_default();
            if chips.is_empty() {
                placeholder()
            } else {
                ControllerDisplay::Chips(chips)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DropdownEvent {
    ControllerClick,
    Key(FieldKey),
    OptionClick(usize),
    OptionHover(usize),
    /// Focus moved to an element outside the component
    FocusOut,
    /// The remove affordance on an array-mode chip
    RemoveChip(SelectOption),
}

/// Side effects the UI must apply after an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DropdownEffect {
    /// New field value
    pub change: Option<Value>,
    /// Fire the field's blur contract
    pub blur: bool,
    /// Return focus to the controller
    pub focus_controller: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub open: bool,
    /// Keyboard/mouse highlight in the open list; reset on close
    pub highlighted: Option<usize>,
    pub controller_focused: bool,
}

impl DropdownState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    fn toggle_open(&mut self, props: &DropdownProps, disabled: bool) {
        if disabled || props.read_only {
            return;
        }
        self.open = !self.open;
        if !self.open {
            self.highlighted = None;
        }
    }

    fn commit(
        &mut self,
        props: &DropdownProps,
        current: &Value,
        index: usize,
        effect: &mut DropdownEffect,
    ) {
        let visible = visible_options(props, current);
        if let Some(option) = visible.get(index) {
            effect.blur = true;
            effect.change = select(props, &visible, current, option);
        }
        self.close();
        self.controller_focused = true;
        effect.focus_controller = true;
    }

    pub fn handle(
        &mut self,
        event: DropdownEvent,
        props: &DropdownProps,
        current: &Value,
        disabled: bool,
    ) -> DropdownEffect {
        let mut effect = DropdownEffect::default();
        match event {
            DropdownEvent::ControllerClick => {
                self.controller_focused = true;
                self.toggle_open(props, disabled);
            }
            DropdownEvent::Key(FieldKey::Space) => self.toggle_open(props, disabled),
            DropdownEvent::Key(FieldKey::Enter) => {
                if let (true, Some(index)) = (self.open, self.highlighted) {
                    self.commit(props, current, index, &mut effect);
                }
            }
            DropdownEvent::Key(FieldKey::Escape) => self.close(),
            DropdownEvent::Key(key @ (FieldKey::ArrowUp | FieldKey::ArrowDown)) => {
                if !self.open {
                    self.toggle_open(props, disabled);
                } else {
                    let count = selectable_count(props, current);
                    let step: isize = if key == FieldKey::ArrowDown { 1 } else { -1 };
                    let next = self.highlighted.map_or(-1, |i| i as isize) + step;
                    if next >= 0 && (next as usize) < count {
                        self.highlighted = Some(next as usize);
                    }
                }
            }
            DropdownEvent::Key(FieldKey::Tab) => {
                self.close();
                self.controller_focused = false;
                effect.blur = true;
            }
            DropdownEvent::Key(FieldKey::Other) => {}
            DropdownEvent::OptionClick(index) => {
                if self.open {
                    self.commit(props, current, index, &mut effect);
                }
            }
            DropdownEvent::OptionHover(index) => {
                if self.open && index < selectable_count(props, current) {
                    self.highlighted = Some(index);
                }
            }
            DropdownEvent::FocusOut => {
                self.close();
                self.controller_focused = false;
                effect.blur = true;
            }
            DropdownEvent::RemoveChip(option) => {
                if !disabled && props.return_type == ReturnType::Array {
                    effect.blur = true;
                    effect.change = Some(toggle_membership(current, &option));
                }
            }
        }
        effect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::options;
    use serde_json::json;

    fn products(return_type: ReturnType) -> DropdownProps {
        DropdownProps::new(
            return_type,
            options([
                ("Credit Card", "credit_card"),
                ("Personal Finance", "personal_finance"),
                ("Auto Finance", "auto_finance"),
                ("Home Finance", "home_finance"),
            ]),
        )
    }

    fn pick(props: &DropdownProps, current: &Value, index: usize) -> Option<Value> {
        let option = props.options[index].clone();
        select(props, &visible_options(props, current), current, &option)
    }

    #[test]
    fn value_mode_toggles_to_empty_string() {
        let props = products(ReturnType::Value);
        let chosen = pick(&props, &json!(""), 1).unwrap();
        assert_eq!(chosen, json!("personal_finance"));
        assert_eq!(pick(&props, &chosen, 1), Some(json!("")));
    }

    #[test]
    fn value_mode_without_toggle_is_noop() {
        let props = products(ReturnType::Value).without_toggle();
        assert_eq!(pick(&props, &json!("credit_card"), 0), None);
        assert_eq!(pick(&props, &json!("credit_card"), 2), Some(json!("auto_finance")));
    }

    #[test]
    fn object_mode_toggles_to_null() {
        let props = products(ReturnType::Object);
        let chosen = pick(&props, &Value::Null, 0).unwrap();
        assert_eq!(chosen, json!({"label": "Credit Card", "value": "credit_card"}));
        assert_eq!(pick(&props, &chosen, 0), Some(Value::Null));

        let sticky = products(ReturnType::Object).without_toggle();
        assert_eq!(pick(&sticky, &chosen, 0), None);
    }

    #[test]
    fn array_mode_keeps_selection_order() {
        let props = products(ReturnType::Array).keep_selected_options();
        let mut value = json!([]);
        for index in [2, 0, 3] {
            value = pick(&props, &value, index).unwrap();
        }
        let labels: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Auto Finance", "Credit Card", "Home Finance"]);

        let value = pick(&props, &value, 0).unwrap();
        let labels: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["label"].as_str().unwrap())
            .collect();
        assert_eq!(labels, vec!["Auto Finance", "Home Finance"]);
    }

    #[test]
    fn array_mode_hides_selected_options() {
        let props = products(ReturnType::Array);
        let current = json!([{"label": "Credit Card", "value": "credit_card"}]);
        let visible = visible_options(&props, &current);
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|o| o.label != "Credit Card"));
    }

    #[test]
    fn empty_list_shows_unselectable_placeholder() {
        let props = DropdownProps::new(ReturnType::Array, options([("Only", "only")]));
        let current = json!([{"label": "Only", "value": "only"}]);
        let visible = visible_options(&props, &current);
        assert_eq!(visible, vec![SelectOption::new("No options available", "")]);
        assert_eq!(select(&props, &visible, &current, &visible[0]), None);
    }

    #[test]
    fn selection_marks() {
        let props = products(ReturnType::Value);
        assert!(is_option_selected(&props, &json!("auto_finance"), &props.options[2]));
        assert!(!is_option_selected(&props, &json!("auto_finance"), &props.options[0]));
        let empty = DropdownProps::new(ReturnType::Value, Vec::new());
        assert!(!is_option_selected(&empty, &json!(""), &SelectOption::new("No options available", "")));
    }

    #[test]
    fn controller_display_per_mode() {
        let value_props = products(ReturnType::Value);
        assert_eq!(
            controller_display(&value_props, &json!("home_finance")),
            ControllerDisplay::Label("Home Finance".into())
        );
        assert_eq!(
            controller_display(&value_props, &json!("")),
            ControllerDisplay::Placeholder("Select an option".into())
        );

        let object_props = products(ReturnType::Object).with_placeholder("Nationality");
        assert_eq!(
            controller_display(&object_props, &Value::Null),
            ControllerDisplay::Placeholder("Nationality".into())
        );

        let array_props = products(ReturnType::Array);
        let current = json!([{"label": "Credit Card", "value": "credit_card"}]);
        assert_eq!(
            controller_display(&array_props, &current),
            ControllerDisplay::Chips(vec![SelectOption::new("Credit Card", "credit_card")])
        );
    }

    #[test]
    fn click_and_keys_open_and_close() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();

        state.handle(DropdownEvent::ControllerClick, &props, &json!(""), false);
        assert!(state.open && state.controller_focused);
        state.handle(DropdownEvent::Key(FieldKey::Escape), &props, &json!(""), false);
        assert!(!state.open);

        state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &json!(""), false);
        assert!(state.open);
        assert_eq!(state.highlighted, None);

        state.handle(DropdownEvent::Key(FieldKey::Space), &props, &json!(""), false);
        assert!(!state.open);
    }

    #[test]
    fn disabled_or_read_only_never_opens() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::ControllerClick, &props, &json!(""), true);
        assert!(!state.open);

        let mut read_only = products(ReturnType::Value);
        read_only.read_only = true;
        state.handle(DropdownEvent::Key(FieldKey::ArrowUp), &read_only, &json!(""), false);
        assert!(!state.open);
    }

    #[test]
    fn arrows_clamp_highlight() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState {
            open: true,
            ..DropdownState::default()
        };
        state.handle(DropdownEvent::Key(FieldKey::ArrowUp), &props, &json!(""), false);
        assert_eq!(state.highlighted, None);
        for _ in 0..10 {
            state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &json!(""), false);
        }
        assert_eq!(state.highlighted, Some(3));
        state.handle(DropdownEvent::Key(FieldKey::ArrowUp), &props, &json!(""), false);
        assert_eq!(state.highlighted, Some(2));
    }

    #[test]
    fn placeholder_row_is_never_highlighted() {
        let props = DropdownProps::new(ReturnType::Object, Vec::new());
        let mut state = DropdownState {
            open: true,
            ..DropdownState::default()
        };
        state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &Value::Null, false);
        assert_eq!(state.highlighted, None);
        state.handle(DropdownEvent::OptionHover(0), &props, &Value::Null, false);
        assert_eq!(state.highlighted, None);

        let effect = state.handle(DropdownEvent::Key(FieldKey::Enter), &props, &Value::Null, false);
        assert_eq!(effect, DropdownEffect::default());
        assert!(state.open);
    }

    #[test]
    fn enter_commits_highlight_and_refocuses() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &json!(""), false);
        state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &json!(""), false);
        state.handle(DropdownEvent::Key(FieldKey::ArrowDown), &props, &json!(""), false);

        let effect = state.handle(DropdownEvent::Key(FieldKey::Enter), &props, &json!(""), false);
        assert_eq!(
            effect,
            DropdownEffect {
                change: Some(json!("personal_finance")),
                blur: true,
                focus_controller: true,
            }
        );
        assert!(!state.open);
        assert_eq!(state.highlighted, None);
    }

    #[test]
    fn enter_while_closed_does_nothing() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();
        let effect = state.handle(DropdownEvent::Key(FieldKey::Enter), &props, &json!(""), false);
        assert_eq!(effect, DropdownEffect::default());
    }

    #[test]
    fn focus_out_closes_and_blurs_once() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::ControllerClick, &props, &json!(""), false);
        let effect = state.handle(DropdownEvent::FocusOut, &props, &json!(""), false);
        assert!(effect.blur);
        assert!(effect.change.is_none());
        assert!(!state.open && !state.controller_focused);
    }

    #[test]
    fn tab_closes_and_blurs() {
        let props = products(ReturnType::Value);
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::ControllerClick, &props, &json!(""), false);
        let effect = state.handle(DropdownEvent::Key(FieldKey::Tab), &props, &json!(""), false);
        assert!(effect.blur && !state.open);
    }

    #[test]
    fn option_click_uses_visible_index() {
        let props = products(ReturnType::Array);
        let current = json!([{"label": "Credit Card", "value": "credit_card"}]);
        let mut state = DropdownState::new();
        state.handle(DropdownEvent::ControllerClick, &props, &current, false);
        let effect = state.handle(DropdownEvent::OptionClick(0), &props, &current, false);
        assert_eq!(
            effect.change,
            Some(json!([
                {"label": "Credit Card", "value": "credit_card"},
                {"label": "Personal Finance", "value": "personal_finance"}
            ]))
        );
    }

    #[test]
    fn chip_removal() {
        let props = products(ReturnType::Array);
        let current = json!([
            {"label": "Credit Card", "value": "credit_card"},
            {"label": "Auto Finance", "value": "auto_finance"}
        ]);
        let mut state = DropdownState::new();
        let chip = SelectOption::new("Credit Card", "credit_card");
        let effect = state.handle(DropdownEvent::RemoveChip(chip.clone()), &props, &current, false);
        assert_eq!(
            effect.change,
            Some(json!([{"label": "Auto Finance", "value": "auto_finance"}]))
        );
        let disabled = state.handle(DropdownEvent::RemoveChip(chip), &props, &current, true);
        assert!(disabled.change.is_none());
    }
}
