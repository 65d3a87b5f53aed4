//! Passcode setup: four single-digit boxes, entered twice.

use dioxus::prelude::*;
use lendform_domain::onboarding::{PasscodeFlow, PasscodeOutcome, PasscodeStep, PASSCODE_LENGTH};

use crate::ui::presentation::components::common::Header;
use crate::ui::presentation::state::{use_toast_state, ToastKind};
use crate::ui::routes::Route;

pub fn step_text(step: PasscodeStep) -> (&'static str, &'static str) {
    match step {
        PasscodeStep::Set => ("Set passcode", "Set up a passcode to log in and protect your account"),
        PasscodeStep::Confirm => ("Confirm passcode", "Remember this passcode, it will be useful later!"),
    }
}

#[component]
pub fn PasscodeView() -> Element {
    let navigator = use_navigator();
    let mut toasts = use_toast_state();
    let mut flow = use_signal(PasscodeFlow::default);
    let mut boxes = use_signal(|| vec![None::<MountedEvent>; PASSCODE_LENGTH]);

    use_effect(move || {
        if flow.read().active().needs_settle() {
            flow.write().active_mut().settle();
        }
    });

    let focus_box = move |index: usize| {
        if let Some(Some(mounted)) = boxes.peek().get(index).cloned() {
            spawn(async move {
                if let Err(e) = mounted.set_focus(true).await {
                    tracing::debug!(error = ?e, "Could not move focus");
                }
            });
        }
    };

    let on_next = move |_| {
        let outcome = flow.write().next();
        match outcome {
            Some(PasscodeOutcome::Confirming) | Some(PasscodeOutcome::Mismatch) => {
                if outcome == Some(PasscodeOutcome::Mismatch) {
                    toasts.show(ToastKind::Error, "Passcodes do not match");
                }
                focus_box(0);
            }
            Some(PasscodeOutcome::Matched(_)) => {
                tracing::info!("Passcode set");
                toasts.show(ToastKind::Success, "Passcode set successfully");
                navigator.push(Route::EmailVerificationRoute { email: String::new() });
            }
            None => {}
        }
    };

    let step = flow.read().step();
    let (title, subtitle) = step_text(step);
    let complete = flow.read().active().is_complete();
    let shown: Vec<String> = (0..PASSCODE_LENGTH)
        .map(|i| flow.read().active().shown(i).to_string())
        .collect();

    rsx! {
        div {
            class: "page",
            Header { back: Route::ProductsRoute {} }
            main {
                class: "page-content",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
                div {
                    class: "passcode",
                    for (index, digit) in shown.into_iter().enumerate() {
                        input {
                            key: "{index}",
                            class: "passcode-box",
                            r#type: "password",
                            inputmode: "numeric",
                            maxlength: "1",
                            value: "{digit}",
                            onmounted: move |evt: MountedEvent| {
                                if let Some(slot) = boxes.write().get_mut(index) {
                                    *slot = Some(evt);
                                }
                            },
                            oninput: move |evt: FormEvent| {
                                let next = flow.write().active_mut().input(index, &evt.value());
                                if let Some(next) = next {
                                    focus_box(next);
                                }
                            },
                            onkeydown: move |evt: KeyboardEvent| {
                                if evt.key() == Key::Backspace {
                                    if let Some(previous) = flow.read().active().backspace(index) {
                                        focus_box(previous);
                                    }
                                }
                            },
                        }
                    }
                }
                div {
                    class: "form-actions",
                    button {
                        r#type: "button",
                        class: "button button--round button--primary",
                        aria_label: "Next",
                        disabled: !complete,
                        onclick: on_next,
                        "\u{203a}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_text() {
        assert_eq!(step_text(PasscodeStep::Set).0, "Set passcode");
        assert_eq!(step_text(PasscodeStep::Confirm).0, "Confirm passcode");
    }
}
