//! Field Configuration Model
//!
//! A `FieldDescriptor` is the static description of one form field: its type
//! and props, display strings, an optional list of child descriptors for
//! array-of-object groups, and a rule deciding when the field is disabled.
//! Descriptor lists are built once per form and never mutated.

mod props;

pub use props::{
    CheckboxProps, DataMask, DigitProps, DropdownProps, InputType, RadioGroupProps, ReturnType,
    TextInputProps, TextareaProps, DEFAULT_MAX_VALUE,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::values::FormValues;

/// `(values, field_or_group_name, array_index) -> disabled`
///
/// Must be pure: it runs on every render pass and on every submit.
pub type DisabledPredicate = Arc<dyn Fn(&FormValues, &str, Option<usize>) -> bool + Send + Sync>;

/// Constant-or-computed disabled state.
#[derive(Clone)]
pub enum DisabledRule {
    Constant(bool),
    Predicate(DisabledPredicate),
}

impl DisabledRule {
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&FormValues, &str, Option<usize>) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Single evaluation entry point for both variants.
    pub fn evaluate(&self, values: &FormValues, name: &str, index: Option<usize>) -> bool {
        match self {
            Self::Constant(disabled) => *disabled,
            Self::Predicate(predicate) => predicate(values, name, index),
        }
    }
}

impl Default for DisabledRule {
    fn default() -> Self {
        Self::Constant(false)
    }
}

impl fmt::Debug for DisabledRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(disabled) => f.debug_tuple("Constant").field(disabled).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl From<bool> for DisabledRule {
    fn from(disabled: bool) -> Self {
        Self::Constant(disabled)
    }
}

/// Type tag of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    TextInput,
    DigitInput,
    Textarea,
    Checkbox,
    RadioGroup,
    Dropdown,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextInput => "text-input",
            Self::DigitInput => "digit-input",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::RadioGroup => "radio-group",
            Self::Dropdown => "dropdown",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field type together with its props
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    TextInput(TextInputProps),
    DigitInput(DigitProps),
    Textarea(TextareaProps),
    Checkbox(CheckboxProps),
    RadioGroup(RadioGroupProps),
    Dropdown(DropdownProps),
}

impl FieldKind {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::TextInput(_) => FieldType::TextInput,
            Self::DigitInput(_) => FieldType::DigitInput,
            Self::Textarea(_) => FieldType::Textarea,
            Self::Checkbox(_) => FieldType::Checkbox,
            Self::RadioGroup(_) => FieldType::RadioGroup,
            Self::Dropdown(_) => FieldType::Dropdown,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    /// Dotted path into the form values, unique among siblings
    pub name: String,
    pub label: Option<String>,
    pub description: Option<String>,
    pub disabled: DisabledRule,
    /// Present only when `name` holds an array of objects; child names are
    /// relative to one element
    pub child_fields: Vec<FieldDescriptor>,
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: None,
            description: None,
            disabled: DisabledRule::default(),
            child_fields: Vec::new(),
            kind,
        }
    }

    pub fn text_input(name: impl Into<String>, props: TextInputProps) -> Self {
        Self::new(name, FieldKind::TextInput(props))
    }

    pub fn digit_input(name: impl Into<String>, props: DigitProps) -> Self {
        Self::new(name, FieldKind::DigitInput(props))
    }

    pub fn textarea(name: impl Into<String>, props: TextareaProps) -> Self {
        Self::new(name, FieldKind::Textarea(props))
    }

    pub fn checkbox(name: impl Into<String>, props: CheckboxProps) -> Self {
        Self::new(name, FieldKind::Checkbox(props))
    }

    pub fn radio_group(name: impl Into<String>, props: RadioGroupProps) -> Self {
        Self::new(name, FieldKind::RadioGroup(props))
    }

    pub fn dropdown(name: impl Into<String>, props: DropdownProps) -> Self {
        Self::new(name, FieldKind::Dropdown(props))
    }

    /// An array-of-objects group. The parent renders nothing itself; its
    /// children are rendered once per element.
    pub fn array_group(name: impl Into<String>, children: Vec<FieldDescriptor>) -> Self {
        Self::text_input(name, TextInputProps::default()).with_children(children)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_disabled(mut self, rule: impl Into<DisabledRule>) -> Self {
        self.disabled = rule.into();
        self
    }

    pub fn disabled_when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&FormValues, &str, Option<usize>) -> bool + Send + Sync + 'static,
    {
        self.disabled = DisabledRule::when(predicate);
        self
    }

    pub fn with_children(mut self, children: Vec<FieldDescriptor>) -> Self {
        self.child_fields = children;
        self
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    pub fn is_array_group(&self) -> bool {
        !self.child_fields.is_empty()
    }

    pub fn find_child(&self, name: &str) -> Option<&FieldDescriptor> {
        self.child_fields.iter().find(|child| child.name == name)
    }

    pub fn is_disabled(&self, values: &FormValues, name: &str, index: Option<usize>) -> bool {
        self.disabled.evaluate(values, name, index)
    }
}

/// Locate a descriptor by name in a sibling list.
pub fn find_descriptor<'a>(descriptors: &'a [FieldDescriptor], name: &str) -> Option<&'a FieldDescriptor> {
    descriptors.iter().find(|descriptor| descriptor.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::SelectOption;
    use serde_json::json;

    fn values(v: serde_json::Value) -> FormValues {
        FormValues::from_value(v).unwrap()
    }

    #[test]
    fn test_constant_rule() {
        let empty = FormValues::new();
        assert!(DisabledRule::Constant(true).evaluate(&empty, "x", None));
        assert!(!DisabledRule::default().evaluate(&empty, "x", None));
    }

    #[test]
    fn test_predicate_receives_arguments() {
        let rule = DisabledRule::when(|values, name, index| {
            name == "customers" && index == Some(1) && values.flag("isDisableFields")
        });
        let form = values(json!({"isDisableFields": true}));
        assert!(rule.evaluate(&form, "customers", Some(1)));
        assert!(!rule.evaluate(&form, "customers", Some(0)));
        assert!(!rule.evaluate(&form, "customers", None));
    }

    #[test]
    fn test_builder_sets_fields() {
        let descriptor = FieldDescriptor::dropdown(
            "buyoutTypes",
            DropdownProps::new(
                ReturnType::Array,
                vec![SelectOption::new("Bank", "bank")],
            )
            .keep_selected_options(),
        )
        .with_label("Buyout Type")
        .with_description("Select one or more buyout types")
        .with_disabled(true);

        assert_eq!(descriptor.field_type(), FieldType::Dropdown);
        assert_eq!(descriptor.label.as_deref(), Some("Buyout Type"));
        assert!(descriptor.is_disabled(&FormValues::new(), "buyoutTypes", None));
        assert!(!descriptor.is_array_group());
    }

    #[test]
    fn test_array_group_children() {
        let group = FieldDescriptor::array_group(
            "banks",
            vec![
                FieldDescriptor::text_input("bankName", TextInputProps::default()),
                FieldDescriptor::digit_input("loanAmount", DigitProps::default()),
            ],
        );
        assert!(group.is_array_group());
        assert_eq!(
            group.find_child("loanAmount").map(FieldDescriptor::field_type),
            Some(FieldType::DigitInput)
        );
        assert!(group.find_child("missing").is_none());
    }

    #[test]
    fn test_field_type_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_value(FieldType::RadioGroup).unwrap(),
            json!("radio-group")
        );
        assert_eq!(FieldType::DigitInput.to_string(), "digit-input");
    }
}
