//! Form container state
//!
//! Holds one form's values, errors, and touched paths as signals, plus the
//! resolver that validates them. Pages provide it through context so every
//! `FieldRenderer` below can read and write the same values.
//!
//! Validation runs "on touched": a field is first checked when it loses
//! focus, then on every change. After a submit attempt every change
//! re-validates the whole form, because toggling one field can enable or
//! disable another.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use dioxus::prelude::*;
use lendform_domain::{
    ConditionalResolver, FieldDescriptor, FieldErrors, FormValues, Schema,
};
use serde_json::Value;

use crate::ports::outbound::{PickedFile, PlatformPort};

/// Flag read by disable predicates while a submit is in flight
pub const DISABLE_FIELDS_KEY: &str = "isDisableFields";

/// Simulated submit latency
pub const SUBMIT_LATENCY_MS: u64 = 1_000;

#[derive(Clone)]
pub struct FormState {
    pub values: Signal<FormValues>,
    pub errors: Signal<FieldErrors>,
    pub touched: Signal<BTreeSet<String>>,
    pub submitted: Signal<bool>,
    /// Picked file contents by field path; the form value only keeps metadata
    pub files: Signal<HashMap<String, Vec<PickedFile>>>,
    resolver: Arc<ConditionalResolver>,
}

/// Provide a fresh form to the current component's subtree.
pub fn use_form_state(
    init: impl FnOnce() -> (Schema, Vec<FieldDescriptor>, FormValues),
) -> FormState {
    use_context_provider(move || {
        let (schema, descriptors, defaults) = init();
        FormState::new(schema, descriptors, defaults)
    })
}

impl FormState {
    pub fn new(schema: Schema, descriptors: Vec<FieldDescriptor>, defaults: FormValues) -> Self {
        let mut values = defaults;
        if values.get(DISABLE_FIELDS_KEY).is_none() {
            // `set` only fails on malformed paths
            let _ = values.set(DISABLE_FIELDS_KEY, Value::Bool(false));
        }
        Self {
            values: Signal::new(values),
            errors: Signal::new(FieldErrors::new()),
            touched: Signal::new(BTreeSet::new()),
            submitted: Signal::new(false),
            files: Signal::new(HashMap::new()),
            resolver: Arc::new(ConditionalResolver::new(schema, descriptors)),
        }
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        self.resolver.descriptors()
    }

    /// Current value at `path`, `Null` when absent.
    pub fn value(&self, path: &str) -> Value {
        self.values.read().get(path).cloned().unwrap_or(Value::Null)
    }

    pub fn fields_disabled(&self) -> bool {
        self.values.read().flag(DISABLE_FIELDS_KEY)
    }

    pub fn set_fields_disabled(&mut self, disabled: bool) {
        self.write_value(DISABLE_FIELDS_KEY, Value::Bool(disabled));
    }

    pub fn set_value(&mut self, path: &str, value: Value) {
        self.write_value(path, value);
        self.revalidate(path);
    }

    /// Replace a whole group without touching validation state.
    pub fn replace_value(&mut self, path: &str, value: Value) {
        self.write_value(path, value);
        self.errors.write().replace_under(path, &FieldErrors::new());
    }

    fn write_value(&mut self, path: &str, value: Value) {
        if let Err(e) = self.values.write().set(path, value) {
            tracing::warn!(path, error = %e, "Ignoring form value write");
        }
    }

    /// Blur: mark the field touched and validate it.
    pub fn touch(&mut self, path: &str) {
        let newly = self.touched.write().insert(path.to_string());
        if newly || *self.submitted.peek() {
            self.revalidate(path);
        }
    }

    pub fn is_touched(&self, path: &str) -> bool {
        self.touched.read().contains(path)
    }

    /// Store picked files and mirror their metadata into the form value.
    pub fn set_files(&mut self, path: &str, files: Vec<PickedFile>) {
        let metadata: Vec<_> = files
            .iter()
            .map(|file| lendform_domain::fields::text_input::SelectedFile {
                name: file.name.clone(),
                size: file.bytes.len() as u64,
                content_type: file.content_type.clone(),
            })
            .collect();
        match lendform_domain::fields::text_input::files_value(&metadata) {
            Some(value) => {
                self.files.write().insert(path.to_string(), files);
                self.set_value(path, value);
            }
            None => {
                self.files.write().remove(path);
                self.set_value(path, Value::Null);
            }
        }
    }

    pub fn files(&self, path: &str) -> Vec<PickedFile> {
        self.files.read().get(path).cloned().unwrap_or_default()
    }

    fn revalidate(&mut self, path: &str) {
        let submitted = *self.submitted.peek();
        if !submitted && !self.touched.peek().contains(path) {
            return;
        }
        let values = self.values.peek().clone();
        if submitted {
            let outcome = self.resolver.validate(&values);
            self.errors.set(outcome.errors);
        } else {
            let scoped = self.resolver.validate_path(&values, path);
            self.errors.write().replace_under(path, &scoped);
        }
    }

    /// Full validation for submit. Returns the parsed values when valid.
    pub fn validate(&mut self) -> Option<FormValues> {
        self.submitted.set(true);
        let values = self.values.peek().clone();
        let outcome = self.resolver.validate(&values);
        if outcome.is_valid() {
            self.errors.set(FieldErrors::new());
            Some(outcome.values)
        } else {
            tracing::debug!(errors = outcome.errors.len(), "Form has validation errors");
            self.errors.set(outcome.errors);
            None
        }
    }

    /// Drop everything under an array element after it is removed.
    pub fn forget_under(&mut self, path: &str) {
        let nested = format!("{path}.");
        self.touched
            .write()
            .retain(|key| key != path && !key.starts_with(&nested));
        self.files
            .write()
            .retain(|key, _| key != path && !key.starts_with(&nested));
        self.errors.write().replace_under(path, &FieldErrors::new());
    }

    pub fn reset(&mut self, values: FormValues) {
        self.values.set(values);
        self.errors.set(FieldErrors::new());
        self.touched.write().clear();
        self.files.write().clear();
        self.submitted.set(false);
        self.set_fields_disabled(false);
    }
}

/// Validate, then hold every field disabled for the simulated latency.
/// Returns the parsed values when the form is valid.
pub async fn handle_submit(
    mut form: FormState,
    platform: Arc<dyn PlatformPort>,
) -> Option<FormValues> {
    let values = form.validate()?;
    form.set_fields_disabled(true);
    platform.sleep_ms(SUBMIT_LATENCY_MS).await;
    form.set_fields_disabled(false);
    Some(values)
}
