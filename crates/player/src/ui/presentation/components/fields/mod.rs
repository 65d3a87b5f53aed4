//! Field components
//!
//! Thin Dioxus shells over the headless state machines in
//! `lendform_domain::fields`. Each takes the bound value plus change/blur
//! handlers and never touches the form container directly.

mod check_box;
mod digit_input;
mod drop_down;
mod file_input;
mod radio_group;
mod text_area;
mod text_input;

pub use check_box::CheckBox;
pub use digit_input::DigitInput;
pub use drop_down::DropDown;
pub use file_input::FileInput;
pub use radio_group::RadioGroup;
pub use text_area::TextArea;
pub use text_input::TextInput;

use dioxus::prelude::*;
use lendform_domain::fields::FieldKey;

/// Map a DOM key to the keys field components react to.
pub(crate) fn field_key(key: &Key) -> FieldKey {
    match key {
        Key::Enter => FieldKey::Enter,
        Key::Escape => FieldKey::Escape,
        Key::Tab => FieldKey::Tab,
        Key::ArrowUp => FieldKey::ArrowUp,
        Key::ArrowDown => FieldKey::ArrowDown,
        Key::Character(c) if c == " " => FieldKey::Space,
        _ => FieldKey::Other,
    }
}

pub(crate) fn control_class(has_error: bool, disabled: bool) -> &'static str {
    match (has_error, disabled) {
        (true, _) => "field-control field-control--error",
        (false, true) => "field-control field-control--disabled",
        (false, false) => "field-control",
    }
}
