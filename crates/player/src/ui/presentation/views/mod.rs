//! Page views and their form configurations

pub mod buyout;
pub mod calculator;
pub mod conditional_form;
pub mod consent;
pub mod demo_opus;
pub mod demo_opus_academic_reports;
pub mod demo_opus_multi_upload;
mod dev_form;
pub mod email;
pub mod email_verification;
pub mod extended_inputs_form;
mod extraction;
pub mod home;
pub mod inputs_form;
pub mod mobile_otp;
pub mod passcode;
pub mod personal_details;
pub mod products;
pub mod textarea_form;

pub use buyout::BuyoutView;
pub use calculator::CalculatorView;
pub use conditional_form::ConditionalFormView;
pub use consent::ConsentView;
pub use demo_opus::DemoOpusView;
pub use demo_opus_academic_reports::DemoOpusAcademicReportsView;
pub use demo_opus_multi_upload::DemoOpusMultiUploadView;
pub use email::EmailView;
pub use email_verification::EmailVerificationView;
pub use extended_inputs_form::ExtendedInputsFormView;
pub use home::HomeView;
pub use inputs_form::InputsFormView;
pub use mobile_otp::MobileOtpView;
pub use passcode::PasscodeView;
pub use personal_details::PersonalDetailsView;
pub use products::{ProductDetailView, ProductsView};
pub use textarea_form::TextareaFormView;

use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::onboarding::ResendTimer;
use lendform_domain::{FormValues, Rule, TextCheck};

use crate::ports::outbound::PlatformPort;
use crate::ui::presentation::state::DISABLE_FIELDS_KEY;

pub(crate) const MANDATORY: &str = "Mandatory field.";
pub(crate) const DATE_FORMAT_MESSAGE: &str = "Use format DD/MM/YYYY";
pub(crate) const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub(crate) const FILE_ACCEPT: &str = "image/*,application/pdf";

/// Simulated latency of sending an OTP or verification link
pub(crate) const SIMULATED_SEND_MS: u64 = 1_000;
const COUNTDOWN_TICK_MS: u64 = 1_000;

/// Disable predicate shared by every form: true while a submit is running.
pub(crate) fn while_submitting(values: &FormValues, _name: &str, _index: Option<usize>) -> bool {
    values.flag(DISABLE_FIELDS_KEY)
}

/// Append a pattern check; a pattern that fails to compile is logged and
/// skipped.
pub(crate) fn push_pattern(checks: &mut Vec<TextCheck>, pattern: &str, message: &str) {
    match TextCheck::pattern(pattern, message) {
        Ok(check) => checks.push(check),
        Err(e) => tracing::error!(pattern, error = %e, "Invalid validation pattern"),
    }
}

/// `DD/MM/YYYY`, as produced by the date mask.
pub(crate) fn date_rule() -> Rule {
    let mut checks = vec![
        TextCheck::min_len(10, DATE_FORMAT_MESSAGE),
        TextCheck::max_len(10, DATE_FORMAT_MESSAGE),
    ];
    push_pattern(&mut checks, r"^\d{2}/\d{2}/\d{4}$", DATE_FORMAT_MESSAGE);
    Rule::text(checks)
}

pub(crate) fn email_rule() -> Rule {
    Rule::text([TextCheck::email(EMAIL_MESSAGE)])
}

/// Tick `timer` once a second until its run `run` ends.
pub(crate) async fn run_countdown(
    mut timer: Signal<ResendTimer>,
    run: u64,
    platform: Arc<dyn PlatformPort>,
) {
    loop {
        platform.sleep_ms(COUNTDOWN_TICK_MS).await;
        if !timer.write().tick(run) {
            break;
        }
    }
}

/// Simulate a resend, then count the cooldown down. Does nothing while a
/// send or a cooldown is running.
pub(crate) async fn resend(mut timer: Signal<ResendTimer>, platform: Arc<dyn PlatformPort>, what: &str) {
    if !timer.write().begin_send() {
        return;
    }
    platform.sleep_ms(SIMULATED_SEND_MS).await;
    let run = timer.write().finish_send();
    tracing::info!(what, "Resent");
    run_countdown(timer, run, platform).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use lendform_domain::Schema;
    use serde_json::json;

    fn check(rule: Rule, value: serde_json::Value) -> Option<String> {
        let schema = Schema::new().field("f", rule);
        let values = FormValues::from_value(json!({ "f": value })).unwrap();
        schema.validate(&values).errors.message("f").map(str::to_string)
    }

    #[test]
    fn test_date_rule() {
        assert_eq!(check(date_rule(), json!("03/06/1985")), None);
        assert_eq!(check(date_rule(), json!("03/06/85")).as_deref(), Some(DATE_FORMAT_MESSAGE));
        assert_eq!(check(date_rule(), json!("03-06-1985")).as_deref(), Some(DATE_FORMAT_MESSAGE));
    }

    #[test]
    fn test_email_rule() {
        assert_eq!(check(email_rule(), json!("lok@example.com")), None);
        assert_eq!(check(email_rule(), json!("lok@")).as_deref(), Some(EMAIL_MESSAGE));
    }

    #[test]
    fn test_while_submitting() {
        let idle = FormValues::from_value(json!({"isDisableFields": false})).unwrap();
        let busy = FormValues::from_value(json!({"isDisableFields": true})).unwrap();
        assert!(!while_submitting(&idle, "name", None));
        assert!(while_submitting(&busy, "name", None));
    }
}
