//! Presentation state (Dioxus signals)

pub mod form_state;
pub mod toast_state;

pub use form_state::{handle_submit, use_form_state, FormState, DISABLE_FIELDS_KEY, SUBMIT_LATENCY_MS};
pub use toast_state::{use_toast_state, Toast, ToastKind, ToastState};
