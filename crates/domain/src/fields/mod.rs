//! Headless field components
//!
//! Each submodule holds the behaviour of one field type as plain functions
//! and small state machines: the UI forwards events in and writes back the
//! value they return. Returning `None` from a change function means "no
//! change" (disabled field, re-selecting with toggling off, placeholder row).

pub mod checkbox;
pub mod digits;
pub mod dropdown;
pub mod radio_group;
pub mod text_input;
pub mod textarea;

/// Keys the field components react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Enter,
    Space,
    Escape,
    Tab,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Parse the `data-element-index` attribute carried by option rows.
pub fn element_index(attr: Option<&str>) -> Option<usize> {
    attr.and_then(|raw| raw.trim().parse::<usize>().ok())
}

/// Text shown by a controlled element whose edits may be rewritten (mask,
/// digit normalization, bullets).
///
/// When a rewrite lands on the value the element was last rendered with,
/// re-rendering the rewrite alone changes nothing and the rejected keystroke
/// stays on screen. The element is therefore rendered once with the raw text
/// and then, after `settle`, with the rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoedText {
    shown: String,
    correction: Option<String>,
}

impl EchoedText {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            shown: initial.into(),
            correction: None,
        }
    }

    pub fn shown(&self) -> &str {
        &self.shown
    }

    /// The text once settled.
    pub fn value(&self) -> &str {
        self.correction.as_deref().unwrap_or(&self.shown)
    }

    pub fn needs_settle(&self) -> bool {
        self.correction.is_some()
    }

    /// The element now holds `raw`; the form receives `rewritten`.
    pub fn on_edit(&mut self, raw: &str, rewritten: &str) {
        self.shown = raw.to_string();
        self.correction = (raw != rewritten).then(|| rewritten.to_string());
    }

    /// Apply a pending rewrite. Returns true when the shown text changed.
    pub fn settle(&mut self) -> bool {
        match self.correction.take() {
            Some(text) => {
                self.shown = text;
                true
            }
            None => false,
        }
    }

    /// The form value changed from outside.
    pub fn sync(&mut self, value: &str) {
        self.correction = None;
        if self.shown != value {
            self.shown = value.to_string();
        }
    }
}

/// Blur tracking for a group of focusable rows.
///
/// `focusout` fires on every move between rows, immediately followed by a
/// `focusin` on the new row. A leave is only real when no `focusin` arrived
/// before the deferred check runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusWithin {
    generation: u64,
}

impl FocusWithin {
    /// `focusout` on any row. Check the returned ticket after yielding once.
    pub fn leave(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// `focusin` on any row cancels pending leaves.
    pub fn enter(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// True when focus left the group for good.
    pub fn has_left(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_keystroke_renders_raw_then_settles() {
        let mut text = EchoedText::new("12");
        text.on_edit("12a", "12");
        assert_eq!(text.shown(), "12a");
        assert!(text.needs_settle());

        assert!(text.settle());
        assert_eq!(text.shown(), "12");
        assert!(!text.settle());
    }

    #[test]
    fn test_accepted_keystroke_needs_no_settle() {
        let mut text = EchoedText::new("12");
        text.on_edit("123", "123");
        assert_eq!(text.shown(), "123");
        assert!(!text.needs_settle());
    }

    #[test]
    fn test_external_sync_drops_correction() {
        let mut text = EchoedText::new("03/0");
        text.on_edit("03/06x", "03/06");
        text.sync("");
        assert_eq!(text.shown(), "");
        assert!(!text.settle());
    }

    #[test]
    fn test_focus_move_between_rows_is_not_a_leave() {
        let mut focus = FocusWithin::default();
        let ticket = focus.leave();
        focus.enter();
        assert!(!focus.has_left(ticket));

        let ticket = focus.leave();
        assert!(focus.has_left(ticket));
    }

    #[test]
    fn test_element_index() {
        assert_eq!(element_index(Some("2")), Some(2));
        assert_eq!(element_index(Some("x")), None);
        assert_eq!(element_index(Some("-1")), None);
        assert_eq!(element_index(None), None);
    }
}
