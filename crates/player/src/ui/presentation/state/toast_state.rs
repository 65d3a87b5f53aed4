//! Toast notifications
//!
//! Toasts may carry a key; showing a toast with a key already on screen
//! replaces it in place (loading -> info -> success for one workflow).

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Loading,
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Loading toasts stay until replaced.
    pub fn auto_dismiss(&self) -> bool {
        !matches!(self, Self::Loading)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub key: Option<String>,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Copy)]
pub struct ToastState {
    pub toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

pub fn use_toast_state() -> ToastState {
    use_context::<ToastState>()
}

impl ToastState {
    pub fn new() -> Self {
        Self {
            toasts: Signal::new(Vec::new()),
            next_id: Signal::new(0),
        }
    }

    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.push(None, kind, message.into())
    }

    pub fn show_keyed(&mut self, key: &str, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.push(Some(key.to_string()), kind, message.into())
    }

    fn push(&mut self, key: Option<String>, kind: ToastKind, message: String) -> u64 {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        let toast = Toast {
            id,
            key: key.clone(),
            kind,
            message,
        };
        let mut toasts = self.toasts.write();
        match key.and_then(|k| toasts.iter().position(|t| t.key.as_deref() == Some(&k))) {
            Some(index) => toasts[index] = toast,
            None => toasts.push(toast),
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.write().retain(|t| t.id != id);
    }
}

impl Default for ToastState {
    fn default() -> Self {
        Self::new()
    }
}
