//! Text input behaviour: masking, password visibility, debouncing, and the
//! controlled/file split.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::EchoedText;
use crate::descriptor::{DataMask, InputType, TextInputProps};

const DATE_DIGITS: usize = 8;

/// Digits only, at most eight, with `/` inserted after the day and month.
pub fn apply_date_mask(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(char::is_ascii_digit)
        .take(DATE_DIGITS)
        .collect();
    let mut masked = String::with_capacity(DATE_DIGITS + 2);
    for (i, digit) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            masked.push('/');
        }
        masked.push(*digit);
    }
    masked
}

pub fn apply_mask(input: &str, mask: Option<DataMask>) -> String {
    match mask {
        Some(DataMask::Date) => apply_date_mask(input),
        None => input.to_string(),
    }
}

/// Controlled inputs always mirror the form value; file inputs never
/// receive one back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Controlled,
    File,
}

impl InputKind {
    pub fn of(props: &TextInputProps) -> Self {
        match props.input_type {
            InputType::File => Self::File,
            _ => Self::Controlled,
        }
    }
}

/// The `type` attribute to render given the password toggle state.
pub fn effective_type(props: &TextInputProps, show_password: bool) -> InputType {
    if props.input_type == InputType::Password && props.toggle_password && show_password {
        InputType::Text
    } else {
        props.input_type
    }
}

/// Metadata for one picked file, as stored in form values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

/// Form value for a file selection. An empty selection is not forwarded.
pub fn files_value(files: &[SelectedFile]) -> Option<Value> {
    if files.is_empty() {
        return None;
    }
    serde_json::to_value(files).ok()
}

/// Cancel-and-restart timer bookkeeping. Each keystroke takes a new ticket;
/// only the latest ticket may fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Debouncer {
    latest: u64,
}

impl Debouncer {
    pub fn schedule(&mut self) -> u64 {
        self.latest = self.latest.wrapping_add(1);
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }

    /// Invalidate any pending ticket.
    pub fn cancel(&mut self) {
        self.latest = self.latest.wrapping_add(1);
    }
}

/// What the component must do after a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputUpdate {
    /// Forward the value to the form immediately
    Emit(String),
    /// Start an idle timer for this ticket
    Schedule { ticket: u64, delay_ms: u64 },
}

/// Local state of a controlled text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    /// What the element shows; ahead of the form value while debouncing
    text: EchoedText,
    pub show_password: bool,
    debouncer: Debouncer,
    pending: Option<String>,
    /// Last value handed to the form, so its echo is not taken for an
    /// outside change
    emitted: Option<String>,
}

impl TextInputState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            text: EchoedText::new(initial),
            ..Self::default()
        }
    }

    pub fn display(&self) -> &str {
        self.text.shown()
    }

    pub fn needs_settle(&self) -> bool {
        self.text.needs_settle()
    }

    /// Swap a masked keystroke for its masked form after one render.
    pub fn settle(&mut self) -> bool {
        self.text.settle()
    }

    pub fn on_input(&mut self, raw: &str, props: &TextInputProps) -> InputUpdate {
        let value = apply_mask(raw, props.data_mask);
        self.text.on_edit(raw, &value);
        if props.debounce_ms == 0 {
            self.emitted = Some(value.clone());
            return InputUpdate::Emit(value);
        }
        self.pending = Some(value);
        InputUpdate::Schedule {
            ticket: self.debouncer.schedule(),
            delay_ms: props.debounce_ms,
        }
    }

    /// Timer expiry. Returns the value to emit when `ticket` is still the
    /// latest one.
    pub fn on_timer(&mut self, ticket: u64) -> Option<String> {
        if !self.debouncer.is_current(ticket) {
            return None;
        }
        let value = self.pending.take();
        self.emitted = value.clone();
        value
    }

    /// The form value changed. An outside change (reset, defaults loaded)
    /// wins over any edit still waiting on the debounce timer.
    pub fn sync_external(&mut self, value: &str) {
        if self.emitted.take().as_deref() == Some(value) {
            return;
        }
        self.debouncer.cancel();
        self.pending = None;
        self.text.sync(value);
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_mask_inserts_separators() {
        assert_eq!(apply_date_mask(""), "");
        assert_eq!(apply_date_mask("0"), "0");
        assert_eq!(apply_date_mask("03"), "03");
        assert_eq!(apply_date_mask("030"), "03/0");
        assert_eq!(apply_date_mask("0306"), "03/06");
        assert_eq!(apply_date_mask("03061"), "03/06/1");
        assert_eq!(apply_date_mask("03061985"), "03/06/1985");
    }

    #[test]
    fn date_mask_strips_and_limits() {
        assert_eq!(apply_date_mask("03/06/1985"), "03/06/1985");
        assert_eq!(apply_date_mask("03-06-19851234"), "03/06/1985");
        assert_eq!(apply_date_mask("ab12"), "12");
    }

    #[test]
    fn password_toggle() {
        let props = TextInputProps {
            input_type: InputType::Password,
            toggle_password: true,
            ..TextInputProps::default()
        };
        assert_eq!(effective_type(&props, false), InputType::Password);
        assert_eq!(effective_type(&props, true), InputType::Text);

        let no_toggle = TextInputProps::default().with_type(InputType::Password);
        assert_eq!(effective_type(&no_toggle, true), InputType::Password);
    }

    #[test]
    fn input_kind_from_type() {
        assert_eq!(InputKind::of(&TextInputProps::default()), InputKind::Controlled);
        assert_eq!(InputKind::of(&TextInputProps::file("image/*")), InputKind::File);
    }

    #[test]
    fn files_value_skips_empty_selection() {
        assert_eq!(files_value(&[]), None);
        let value = files_value(&[SelectedFile {
            name: "id.pdf".into(),
            size: 42,
            content_type: Some("application/pdf".into()),
        }])
        .unwrap();
        assert_eq!(value[0]["name"], "id.pdf");
        assert_eq!(value[0]["contentType"], "application/pdf");
    }

    #[test]
    fn immediate_emit_without_debounce() {
        let props = TextInputProps::default().with_mask(DataMask::Date);
        let mut state = TextInputState::default();
        assert_eq!(state.on_input("0306", &props), InputUpdate::Emit("03/06".into()));
        assert_eq!(state.display(), "0306");
        assert!(state.settle());
        assert_eq!(state.display(), "03/06");
    }

    #[test]
    fn masked_out_keystroke_is_taken_back() {
        let props = TextInputProps::default().with_mask(DataMask::Date);
        let mut state = TextInputState::new("03/06");
        assert_eq!(state.on_input("03/06x", &props), InputUpdate::Emit("03/06".into()));
        assert_eq!(state.display(), "03/06x");
        assert!(state.needs_settle());
        state.settle();
        assert_eq!(state.display(), "03/06");
    }

    #[test]
    fn only_latest_ticket_fires() {
        let props = TextInputProps::default().with_debounce(300);
        let mut state = TextInputState::default();

        let InputUpdate::Schedule { ticket: first, delay_ms } = state.on_input("a", &props) else {
            panic!("expected a scheduled update");
        };
        assert_eq!(delay_ms, 300);
        let InputUpdate::Schedule { ticket: second, .. } = state.on_input("ab", &props) else {
            panic!("expected a scheduled update");
        };
        assert_eq!(state.display(), "ab");

        assert_eq!(state.on_timer(first), None);
        assert_eq!(state.on_timer(second), Some("ab".into()));
        assert_eq!(state.on_timer(second), None);
    }

    #[test]
    fn reset_during_debounce_wins() {
        let props = TextInputProps::default().with_debounce(300);
        let mut state = TextInputState::default();
        let InputUpdate::Schedule { ticket, .. } = state.on_input("abc", &props) else {
            panic!("expected a scheduled update");
        };

        state.sync_external("");
        assert_eq!(state.display(), "");
        assert_eq!(state.on_timer(ticket), None);
    }

    #[test]
    fn echo_of_own_emit_keeps_newer_typing() {
        let props = TextInputProps::default().with_debounce(100);
        let mut state = TextInputState::default();
        let InputUpdate::Schedule { ticket, .. } = state.on_input("ab", &props) else {
            panic!("expected a scheduled update");
        };
        assert_eq!(state.on_timer(ticket), Some("ab".into()));

        let InputUpdate::Schedule { ticket, .. } = state.on_input("abc", &props) else {
            panic!("expected a scheduled update");
        };
        state.sync_external("ab");
        assert_eq!(state.display(), "abc");
        assert_eq!(state.on_timer(ticket), Some("abc".into()));
    }

    #[test]
    fn external_change_replaces_idle_display() {
        let mut idle = TextInputState::new("x");
        idle.sync_external("reset");
        assert_eq!(idle.display(), "reset");
    }

    #[test]
    fn debouncer_cancel_invalidates() {
        let mut debouncer = Debouncer::default();
        let ticket = debouncer.schedule();
        debouncer.cancel();
        assert!(!debouncer.is_current(ticket));
    }
}
