//! Consent & agreements page

use std::collections::BTreeMap;

use dioxus::prelude::*;
use lendform_domain::CheckboxProps;
use lendform_shared::AppData;
use serde_json::{Map, Value};

use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::components::fields::CheckBox;
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

pub struct ConsentItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Rendered as a document link
    pub is_link: bool,
    pub details: Option<&'static str>,
    pub checked: bool,
}

pub static CONSENT_ITEMS: [ConsentItem; 6] = [
    ConsentItem {
        id: "key-facts",
        label: "Key Facts Statement",
        is_link: true,
        details: None,
        checked: true,
    },
    ConsentItem {
        id: "processing-fees",
        label: "Processing & documentation fees",
        is_link: true,
        details: Some("1.05% of the finance amount (min. AED 525 & max. AED 2,625)"),
        checked: false,
    },
    ConsentItem {
        id: "takaful-fee",
        label: "Monthly life Takaful fee",
        is_link: true,
        details: Some("(0.0146475% of the finance outstanding amount)"),
        checked: false,
    },
    ConsentItem {
        id: "account-statement",
        label: "I consent to the one-time release of my account statement from UAEFTS for the bank to assess my eligibility for the product",
        is_link: false,
        details: None,
        checked: false,
    },
    ConsentItem {
        id: "credit-bureau",
        label: "I authorize the bank to check my Al Etihad Credit Bureau (AECB) records",
        is_link: false,
        details: None,
        checked: false,
    },
    ConsentItem {
        id: "privacy-policy",
        label: "I have read, I understand and I acknowledge Al Hilal's privacy policy, which explains how Al Hilal uses personal data that it collects or generates in relation to its products and services",
        is_link: false,
        details: None,
        checked: false,
    },
];

pub type Consents = BTreeMap<&'static str, bool>;

pub fn default_consents() -> Consents {
    CONSENT_ITEMS.iter().map(|item| (item.id, item.checked)).collect()
}

/// Defaults overlaid with saved answers. Unknown ids and non-boolean
/// answers are ignored.
pub fn restore(stored: Option<&Value>) -> Consents {
    let mut consents = default_consents();
    if let Some(Value::Object(saved)) = stored {
        for (id, checked) in consents.iter_mut() {
            if let Some(answer) = saved.get(*id).and_then(Value::as_bool) {
                *checked = answer;
            }
        }
    }
    consents
}

pub fn all_given(consents: &Consents) -> bool {
    consents.values().all(|checked| *checked)
}

fn to_value(consents: &Consents) -> Value {
    Value::Object(
        consents
            .iter()
            .map(|(id, checked)| (id.to_string(), Value::Bool(*checked)))
            .collect::<Map<_, _>>(),
    )
}

#[component]
pub fn ConsentView() -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let app_data = services.app_data.clone();
    let mut consents = use_signal(move || restore(app_data.load().consent.as_ref()));
    let accepted = all_given(&consents.read());

    let accept = move |_| {
        let current = consents.read().clone();
        if !all_given(&current) {
            return;
        }
        services
            .app_data
            .update(AppData::default().with_consent(to_value(&current)));
        navigator.push(Route::PersonalDetailsRoute {});
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::CalculatorRoute { product: String::new() } }
            main {
                class: "page-content",
                h1 { class: "page-title", "Consent & agreements" }
                div {
                    class: "progress",
                    div { class: "progress-bar", style: "width: 16.67%" }
                }
                p { class: "page-subtitle", "Let's set you up to start your application" }
                p { class: "consent-intro", "I agree, accept and consent to the following:" }
                div {
                    class: "consent-list",
                    for item in CONSENT_ITEMS.iter() {
                        div {
                            key: "{item.id}",
                            class: "consent-item",
                            CheckBox {
                                value: Value::Bool(consents.read().get(item.id).copied().unwrap_or(false)),
                                config: CheckboxProps::default(),
                                on_change: move |next: Value| {
                                    consents.write().insert(item.id, next.as_bool().unwrap_or(false));
                                },
                            }
                            div {
                                class: "consent-text",
                                if item.is_link {
                                    span {
                                        class: "consent-link",
                                        onclick: move |_| tracing::debug!(document = item.label, "Opening consent document"),
                                        "{item.label}"
                                    }
                                } else {
                                    "{item.label}"
                                }
                                if let Some(details) = item.details {
                                    p { class: "consent-details", "{details}" }
                                }
                            }
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !accepted,
                    onclick: accept,
                    "I accept"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_key_facts_prechecked() {
        let consents = default_consents();
        assert_eq!(consents.len(), 6);
        assert_eq!(consents.values().filter(|c| **c).count(), 1);
        assert_eq!(consents.get("key-facts"), Some(&true));
        assert!(!all_given(&consents));
    }

    #[test]
    fn test_restore_overlays_saved_answers() {
        let saved = json!({"credit-bureau": true, "key-facts": false, "unknown": true, "takaful-fee": "yes"});
        let consents = restore(Some(&saved));
        assert_eq!(consents.get("credit-bureau"), Some(&true));
        assert_eq!(consents.get("key-facts"), Some(&false));
        assert_eq!(consents.get("takaful-fee"), Some(&false));
        assert!(!consents.contains_key("unknown"));
    }

    #[test]
    fn test_all_given() {
        let mut consents = default_consents();
        for checked in consents.values_mut() {
            *checked = true;
        }
        assert!(all_given(&consents));
        assert_eq!(restore(Some(&to_value(&consents))), consents);
    }
}
