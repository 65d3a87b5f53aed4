//! Buyout page
//!
//! The `buyoutTypes` dropdown decides which array groups exist. Selecting a
//! type seeds its group with one blank element; deselecting it (or unticking
//! `buyout`) clears the group.

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::option::options;
use lendform_domain::{
    CheckboxProps, DigitProps, DropdownProps, FieldDescriptor, FormValues, ReturnType, Rule,
    Schema, SelectOption, TextInputProps,
};
use lendform_shared::AppData;
use serde_json::{json, Value};

use super::{while_submitting, MANDATORY};
use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::field_array::FieldArray;
use crate::ui::presentation::components::{FieldArraySection, FieldRenderer};
use crate::ui::presentation::state::{handle_submit, use_form_state, use_toast_state, ToastKind};
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

/// Key under which the page's values are persisted
pub const STORAGE_KEY: &str = "buyout";

/// One buyout type and the array group it controls
struct GroupSpec {
    buyout_type: &'static str,
    group: &'static str,
    title: &'static str,
    item_label: &'static str,
    fields: &'static [&'static str],
}

static GROUPS: [GroupSpec; 3] = [
    GroupSpec {
        buyout_type: "bank",
        group: "banks",
        title: "Banks",
        item_label: "Bank",
        fields: &["bankName", "settlementProduct", "loanAmount"],
    },
    GroupSpec {
        buyout_type: "internal",
        group: "internals",
        title: "Internal Settlements",
        item_label: "Internal Settlement",
        fields: &["settlementProduct", "loanAmount"],
    },
    GroupSpec {
        buyout_type: "employer",
        group: "employers",
        title: "Employers",
        item_label: "Employer",
        fields: &["ahbExistingClient", "employerName", "loanAmount"],
    },
];

fn initial_element(group: &str) -> Value {
    match group {
        "banks" => json!({"bankName": "", "settlementProduct": [], "loanAmount": ""}),
        "internals" => json!({"settlementProduct": [], "loanAmount": ""}),
        _ => json!({"ahbExistingClient": false, "employerName": "", "loanAmount": ""}),
    }
}

fn settlement_products() -> Vec<SelectOption> {
    options([
        ("Credit Card", "credit_card"),
        ("Personal Finance", "personal_finance"),
        ("Auto Finance", "auto_finance"),
        ("Home Finance", "home_finance"),
        ("Company Finance", "company_finance"),
        ("Over Draft", "over_draft"),
    ])
}

fn settlement_product() -> FieldDescriptor {
    FieldDescriptor::dropdown(
        "settlementProduct",
        DropdownProps::new(ReturnType::Array, settlement_products()).with_placeholder("Select product"),
    )
    .with_label("Settlement Product")
    .with_description("Select one or more products")
    .disabled_when(while_submitting)
}

fn loan_amount() -> FieldDescriptor {
    FieldDescriptor::digit_input("loanAmount", DigitProps::default().with_placeholder("0"))
        .with_label("Loan amount")
        .disabled_when(while_submitting)
}

pub fn descriptors() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::checkbox("buyout", CheckboxProps::single("Buyout loan?"))
            .disabled_when(while_submitting),
        FieldDescriptor::dropdown(
            "buyoutTypes",
            DropdownProps::new(
                ReturnType::Array,
                options([
                    ("Bank", "bank"),
                    ("Internal Settlement", "internal"),
                    ("Employer", "employer"),
                ]),
            )
            .with_placeholder("Select type")
            .keep_selected_options(),
        )
        .with_label("Buyout Type")
        .with_description("Select one or more buyout types")
        .disabled_when(while_submitting),
        FieldDescriptor::array_group(
            "banks",
            vec![
                FieldDescriptor::text_input(
                    "bankName",
                    TextInputProps::default().with_placeholder("Enter bank name"),
                )
                .with_label("Bank name")
                .disabled_when(while_submitting),
                settlement_product(),
                loan_amount(),
            ],
        )
        .with_label("Banks"),
        FieldDescriptor::array_group("internals", vec![settlement_product(), loan_amount()])
            .with_label("Internal Settlements"),
        FieldDescriptor::array_group(
            "employers",
            vec![
                FieldDescriptor::checkbox("ahbExistingClient", CheckboxProps::single(""))
                    .with_label("AHB existing client?")
                    .disabled_when(while_submitting),
                FieldDescriptor::text_input(
                    "employerName",
                    TextInputProps::default().with_placeholder("Enter employer name"),
                )
                .with_label("Employer Name")
                .disabled_when(while_submitting),
                loan_amount(),
            ],
        )
        .with_label("Employers"),
    ]
}

pub fn schema() -> Schema {
    let products = || Rule::list(Rule::Any, 1, MANDATORY);
    let banks = Schema::new()
        .field("bankName", Rule::required_text(MANDATORY))
        .field("settlementProduct", products())
        .field("loanAmount", Rule::required_text(MANDATORY));
    let internals = Schema::new()
        .field("settlementProduct", products())
        .field("loanAmount", Rule::required_text(MANDATORY));
    let employers = Schema::new()
        .field("ahbExistingClient", Rule::Boolean)
        .field("employerName", Rule::required_text(MANDATORY))
        .field("loanAmount", Rule::required_text(MANDATORY));

    let group_list = |schema| Rule::list(Rule::group(schema), 0, MANDATORY).optional();
    Schema::new()
        .field("buyout", Rule::Boolean)
        .field("buyoutTypes", Rule::list(Rule::Any, 0, MANDATORY).optional())
        .field("banks", group_list(banks))
        .field("internals", group_list(internals))
        .field("employers", group_list(employers))
}

pub fn default_values() -> FormValues {
    FormValues::from_value(json!({
        "buyout": true,
        "buyoutTypes": [],
        "banks": [],
        "internals": [],
        "employers": [],
    }))
    .unwrap_or_default()
}

/// `value` of every selected buyout type
pub fn selected_types(values: &FormValues) -> Vec<String> {
    match values.get("buyoutTypes") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| item.get("value").and_then(Value::as_str))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupAction {
    Keep,
    Seed(Value),
    Clear,
}

/// What each group needs so it matches the current selection.
pub fn group_actions(values: &FormValues) -> Vec<(&'static str, GroupAction)> {
    let buyout = values.flag("buyout");
    let selected = selected_types(values);
    GROUPS
        .iter()
        .map(|spec| {
            let wanted = buyout && selected.iter().any(|t| t == spec.buyout_type);
            let len = values.array_len(spec.group);
            let action = match (wanted, len) {
                (true, 0) => GroupAction::Seed(initial_element(spec.group)),
                (false, n) if n > 0 => GroupAction::Clear,
                _ => GroupAction::Keep,
            };
            (spec.group, action)
        })
        .collect()
}

#[component]
pub fn BuyoutView() -> Element {
    let services = use_services();
    let platform = use_context::<Arc<dyn PlatformPort>>();
    let navigator = use_navigator();
    let toasts = use_toast_state();

    let form = use_form_state(|| (schema(), descriptors(), default_values()));
    let disabled = form.fields_disabled();

    let effect_form = form.clone();
    use_effect(move || {
        let (actions, clear_types) = {
            let values = effect_form.values.read();
            let clear_types = !values.flag("buyout") && values.array_len("buyoutTypes") > 0;
            (group_actions(&values), clear_types)
        };
        let mut form = effect_form.clone();
        if clear_types {
            form.replace_value("buyoutTypes", json!([]));
        }
        for (group, action) in actions {
            let mut array = FieldArray::new(form.clone(), group);
            match action {
                GroupAction::Seed(element) => array.replace(vec![element]),
                GroupAction::Clear => array.clear(),
                GroupAction::Keep => {}
            }
        }
    });

    let (buyout, selected) = {
        let values = form.values.read();
        (values.flag("buyout"), selected_types(&values))
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let form = form.clone();
        let platform = platform.clone();
        let app_data = services.app_data.clone();
        let mut toasts = toasts;
        async move {
            let Some(values) = handle_submit(form, platform).await else {
                return;
            };
            tracing::info!(types = ?selected_types(&values), "Buyout submitted");
            app_data.update(AppData::default().with_extra(STORAGE_KEY, values.into_value()));
            toasts.show(ToastKind::Success, "Buyout details saved");
            navigator.push(Route::CalculatorRoute { product: String::new() });
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::PersonalDetailsRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "Buyout" }
                form {
                    class: "form",
                    onsubmit,
                    div {
                        class: "form-section",
                        FieldRenderer { name: "buyout".to_string() }
                        if buyout {
                            FieldRenderer { name: "buyoutTypes".to_string() }
                        }
                    }
                    if buyout {
                        for spec in GROUPS.iter().filter(|s| selected.iter().any(|t| t == s.buyout_type)) {
                            FieldArraySection {
                                key: "{spec.group}",
                                group: spec.group.to_string(),
                                title: spec.title.to_string(),
                                item_label: spec.item_label.to_string(),
                                fields: spec.fields.iter().map(|f| f.to_string()).collect::<Vec<_>>(),
                                initial: initial_element(spec.group),
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "button button--primary",
                        disabled,
                        "Continue"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendform_domain::{resolve_field, ConditionalResolver};

    fn with_types(types: &[&str]) -> FormValues {
        let mut values = default_values();
        let chosen: Vec<Value> = types
            .iter()
            .map(|t| json!({"label": t, "value": t}))
            .collect();
        values.set("buyoutTypes", Value::Array(chosen)).unwrap();
        values
    }

    #[test]
    fn test_defaults_are_valid() {
        let resolver = ConditionalResolver::new(schema(), descriptors());
        assert!(resolver.validate(&default_values()).is_valid());
    }

    #[test]
    fn test_selecting_type_seeds_group() {
        let actions = group_actions(&with_types(&["bank"]));
        assert_eq!(actions[0], ("banks", GroupAction::Seed(initial_element("banks"))));
        assert_eq!(actions[1], ("internals", GroupAction::Keep));
        assert_eq!(actions[2], ("employers", GroupAction::Keep));
    }

    #[test]
    fn test_existing_elements_are_kept() {
        let mut values = with_types(&["bank", "employer"]);
        values.push("banks", initial_element("banks")).unwrap();
        values.push("banks", initial_element("banks")).unwrap();
        let actions = group_actions(&values);
        assert_eq!(actions[0].1, GroupAction::Keep);
        assert_eq!(actions[2].1, GroupAction::Seed(initial_element("employers")));
    }

    #[test]
    fn test_deselected_or_no_buyout_clears() {
        let mut values = with_types(&[]);
        values.push("internals", initial_element("internals")).unwrap();
        assert_eq!(group_actions(&values)[1].1, GroupAction::Clear);

        let mut values = with_types(&["internal"]);
        values.push("internals", initial_element("internals")).unwrap();
        values.set("buyout", json!(false)).unwrap();
        assert_eq!(group_actions(&values)[1].1, GroupAction::Clear);
    }

    #[test]
    fn test_seeded_bank_reports_child_errors() {
        let resolver = ConditionalResolver::new(schema(), descriptors());
        let mut values = with_types(&["bank"]);
        values.push("banks", initial_element("banks")).unwrap();
        let outcome = resolver.validate(&values);
        assert_eq!(outcome.errors.message("banks.0.bankName"), Some(MANDATORY));
        assert_eq!(outcome.errors.message("banks.0.settlementProduct"), Some(MANDATORY));
        assert_eq!(outcome.errors.message("banks.0.loanAmount"), Some(MANDATORY));
    }

    #[test]
    fn test_array_children_resolve() {
        let descriptors = descriptors();
        let mut values = with_types(&["employer"]);
        values.push("employers", initial_element("employers")).unwrap();
        let field = resolve_field(
            "employerName",
            Some("employers.0.employerName"),
            &descriptors,
            &values,
        )
        .unwrap();
        assert!(!field.disabled);
    }
}
