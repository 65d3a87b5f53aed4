//! Finance calculator page

use dioxus::prelude::*;
use lendform_domain::calculator::{format_aed, CalculatorInput, Product, SALARY_ERROR_MESSAGE};
use lendform_shared::AppData;

use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::use_services;
use crate::ui::routes::Route;

/// Starting state: the saved calculator when it is for the same product,
/// otherwise the product's defaults. An empty slug means "whatever was
/// saved last".
pub fn initial_input(slug: &str, stored: &AppData) -> CalculatorInput {
    let saved = stored
        .calculator
        .clone()
        .and_then(|value| serde_json::from_value::<CalculatorInput>(value).ok());
    let product = if slug.is_empty() {
        saved.as_ref().map(|s| s.product).unwrap_or_default()
    } else {
        Product::from_slug(slug)
    };
    match saved {
        Some(input) if input.product == product => {
            let config = product.config();
            CalculatorInput {
                financing_amount: config.clamp_amount(input.financing_amount),
                payment_months: config.clamp_months(input.payment_months),
                ..input
            }
        }
        _ => CalculatorInput::for_product(product),
    }
}

/// Slider and edit-box input; anything unparseable is ignored.
fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.trim().replace(',', "").parse().ok()
}

fn slider_style(percent: f64) -> String {
    format!(
        "background: linear-gradient(to right, #f97316 0%, #ec4899 {percent}%, #e5e7eb {percent}%, #e5e7eb 100%)"
    )
}

#[component]
pub fn CalculatorView(product: String) -> Element {
    let services = use_services();
    let navigator = use_navigator();

    let app_data = services.app_data.clone();
    let mut input = use_signal(move || initial_input(&product, &app_data.load()));
    let mut editing_amount = use_signal(|| false);
    let mut editing_months = use_signal(|| false);

    let current = input.read().clone();
    let config = current.product.config();
    let salary_error = current.salary_error();
    let can_apply = current.can_apply();
    let payment = format_aed(current.monthly_payment());
    let amount_style = slider_style(config.amount_percent(current.financing_amount));
    let months_style = slider_style(config.months_percent(current.payment_months));
    let amount_label = format_aed(current.financing_amount as f64);
    let min_amount_label = format_aed(config.min_amount as f64);
    let max_amount_label = format_aed(config.max_amount as f64);

    let apply = move |_| {
        let current = input.read().clone();
        if !current.can_apply() {
            return;
        }
        match serde_json::to_value(&current) {
            Ok(value) => {
                services.app_data.update(AppData::default().with_calculator(value));
                navigator.push(Route::ConsentRoute {});
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize calculator input"),
        }
    };

    rsx! {
        div {
            class: "page",
            Header { back: Route::BuyoutRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "{config.title}" }
                p { class: "page-subtitle", "they have been entered correctly" }

                div {
                    class: "field",
                    label { class: "field-label", "Current employer name" }
                    input {
                        class: "field-control",
                        r#type: "text",
                        placeholder: "Enter current employer name",
                        value: "{current.employer_name}",
                        oninput: move |evt| input.write().employer_name = evt.value(),
                    }
                }

                div {
                    class: "field",
                    label { class: "field-label", "Your monthly salary (in AED)" }
                    input {
                        class: if salary_error { "field-control field-control--error" } else { "field-control" },
                        r#type: "number",
                        placeholder: "0",
                        value: "{current.monthly_salary}",
                        oninput: move |evt| input.write().monthly_salary = evt.value(),
                    }
                    if salary_error {
                        p { class: "field-message", "{SALARY_ERROR_MESSAGE}" }
                        p {
                            class: "field-description",
                            "Income details will be verified, please ensure that they have been entered correctly"
                        }
                    }
                }

                div {
                    class: "field",
                    label { class: "field-label", "Referral code (optional)" }
                    input {
                        class: "field-control",
                        r#type: "text",
                        value: "{current.referral_code}",
                        oninput: move |evt| input.write().referral_code = evt.value(),
                    }
                    p {
                        class: "field-description",
                        "Enter the referral code shared by our Sales executive, if available."
                    }
                }

                section {
                    class: "calculator-section",
                    div {
                        class: "calculator-section-header",
                        h3 { "How much financing do you need?" }
                        button {
                            r#type: "button",
                            class: "button button--link",
                            onclick: move |_| editing_amount.toggle(),
                            "Edit"
                        }
                    }
                    if editing_amount() {
                        input {
                            class: "field-control calculator-edit",
                            r#type: "number",
                            min: "{config.min_amount}",
                            max: "{config.max_amount}",
                            value: "{current.financing_amount}",
                            onchange: move |evt| {
                                if let Some(amount) = parse_number::<u64>(&evt.value()) {
                                    input.write().financing_amount = config.clamp_amount(amount);
                                }
                            },
                        }
                    } else {
                        div { class: "calculator-figure", "{amount_label}" }
                    }
                    input {
                        class: "slider",
                        r#type: "range",
                        min: "{config.min_amount}",
                        max: "{config.max_amount}",
                        value: "{current.financing_amount}",
                        style: "{amount_style}",
                        oninput: move |evt| {
                            if let Some(amount) = parse_number::<u64>(&evt.value()) {
                                input.write().financing_amount = config.clamp_amount(amount);
                            }
                        },
                    }
                    div {
                        class: "slider-bounds",
                        span { "{min_amount_label}" }
                        span { "{max_amount_label}" }
                    }
                }

                section {
                    class: "calculator-section",
                    div {
                        class: "calculator-section-header",
                        h3 { "In how many months do you wish to pay your finance?" }
                        button {
                            r#type: "button",
                            class: "button button--link",
                            onclick: move |_| editing_months.toggle(),
                            "Edit"
                        }
                    }
                    if editing_months() {
                        input {
                            class: "field-control calculator-edit",
                            r#type: "number",
                            min: "{config.min_months}",
                            max: "{config.max_months}",
                            value: "{current.payment_months}",
                            onchange: move |evt| {
                                if let Some(months) = parse_number::<u32>(&evt.value()) {
                                    input.write().payment_months = config.clamp_months(months);
                                }
                            },
                        }
                    } else {
                        div { class: "calculator-figure", "{current.payment_months} Months" }
                    }
                    input {
                        class: "slider",
                        r#type: "range",
                        min: "{config.min_months}",
                        max: "{config.max_months}",
                        value: "{current.payment_months}",
                        style: "{months_style}",
                        oninput: move |evt| {
                            if let Some(months) = parse_number::<u32>(&evt.value()) {
                                input.write().payment_months = config.clamp_months(months);
                            }
                        },
                    }
                    div {
                        class: "slider-bounds",
                        span { "{config.min_months} Months" }
                        span { "{config.max_months} Months" }
                    }
                }

                div {
                    class: "calculator-payment",
                    h3 { "Indicative monthly payment*" }
                    div { class: "calculator-figure", "{payment}" }
                    p {
                        class: "field-description",
                        "*Based on an illustrative profit rate of {config.profit_rate}% per annum flat"
                    }
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !can_apply,
                    onclick: apply,
                    "Apply now"
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
    fn test_fresh_product_uses_defaults() {
        let input = initial_input("home-finance", &AppData::default());
        assert_eq!(input, CalculatorInput::for_product(Product::HomeFinance));
    }

    #[test]
    fn test_saved_input_restored_for_same_product() {
        let mut saved = CalculatorInput::for_product(Product::CreditCard);
        saved.employer_name = "Acme".into();
        saved.financing_amount = 12_000;
        let stored = AppData::default().with_calculator(serde_json::to_value(&saved).unwrap());

        assert_eq!(initial_input("credit-card", &stored), saved);
        assert_eq!(initial_input("", &stored), saved);
        assert_eq!(
            initial_input("personal-finance", &stored),
            CalculatorInput::for_product(Product::PersonalFinance)
        );
    }

    #[test]
    fn test_saved_amounts_are_clamped() {
        let stored = AppData::default().with_calculator(json!({
            "product": "credit-card",
            "employerName": "",
            "monthlySalary": "",
            "referralCode": "",
            "financingAmount": 1,
            "paymentMonths": 999,
        }));
        let input = initial_input("credit-card", &stored);
        assert_eq!(input.financing_amount, 5_000);
        assert_eq!(input.payment_months, 36);
    }

    #[test]
    fn test_garbage_saved_input_ignored() {
        let stored = AppData::default().with_calculator(json!("nope"));
        assert_eq!(
            initial_input("", &stored),
            CalculatorInput::for_product(Product::PersonalFinance)
        );
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number::<u64>(" 20,000 "), Some(20_000));
        assert_eq!(parse_number::<u32>("abc"), None);
    }
}
