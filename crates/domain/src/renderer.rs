//! Field Renderer resolution
//!
//! Everything the UI needs to render one field, minus the drawing: locate the
//! descriptor (descending into an array group's children when given a
//! `group.index.child` path), compute the disabled state, and bind the field
//! to the form's error map under its fully qualified path.

use thiserror::Error;

use crate::descriptor::{find_descriptor, FieldDescriptor, FieldKind, FieldType};
use crate::schema::FieldErrors;
use crate::values::{ArrayFieldPath, FormValues};

/// Lookup failures. Rendered inline in place of the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldLookupError {
    #[error("Config for '{0}' not found.")]
    NotFound(String),

    #[error("Config for child '{0}' not found.")]
    ChildNotFound(String),

    #[error("Invalid array field path '{0}'.")]
    InvalidPath(String),
}

/// A descriptor resolved against live form values.
#[derive(Debug, Clone)]
pub struct ResolvedField<'a> {
    pub descriptor: &'a FieldDescriptor,
    /// Fully qualified path the field reads and writes
    pub path: String,
    pub disabled: bool,
    /// Set when the field is a member of an array group
    pub array: Option<ArrayFieldPath>,
}

/// What the control needs from the form container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub path: String,
    pub disabled: bool,
    pub has_error: bool,
    pub message: Option<String>,
}

/// Render slots, in their fixed order.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldSlot<'a> {
    Label(&'a str),
    Control(&'a FieldKind),
    Description(&'a str),
    Message(Option<String>),
}

/// Resolve `name` (or `array_path` when the field lives in an array group)
/// against `descriptors`.
pub fn resolve_field<'a>(
    name: &str,
    array_path: Option<&str>,
    descriptors: &'a [FieldDescriptor],
    values: &FormValues,
) -> Result<ResolvedField<'a>, FieldLookupError> {
    let Some(array_path) = array_path else {
        let descriptor = find_descriptor(descriptors, name).ok_or_else(|| {
            tracing::debug!(field = %name, "Field descriptor not found");
            FieldLookupError::NotFound(name.to_string())
        })?;
        return Ok(ResolvedField {
            descriptor,
            path: name.to_string(),
            disabled: descriptor.is_disabled(values, name, None),
            array: None,
        });
    };

    let member = ArrayFieldPath::parse(array_path)
        .map_err(|_| FieldLookupError::InvalidPath(array_path.to_string()))?;
    let parent = find_descriptor(descriptors, &member.group).ok_or_else(|| {
        tracing::debug!(group = %member.group, "Array group descriptor not found");
        FieldLookupError::NotFound(name.to_string())
    })?;
    let descriptor = parent.find_child(&member.child).ok_or_else(|| {
        tracing::debug!(group = %member.group, child = %member.child, "Child descriptor not found");
        FieldLookupError::ChildNotFound(name.to_string())
    })?;

    Ok(ResolvedField {
        descriptor,
        path: array_path.to_string(),
        disabled: descriptor.is_disabled(values, &member.group, Some(member.index)),
        array: Some(member),
    })
}

impl<'a> ResolvedField<'a> {
    pub fn field_type(&self) -> FieldType {
        self.descriptor.field_type()
    }

    pub fn kind(&self) -> &'a FieldKind {
        &self.descriptor.kind
    }

    pub fn bind(&self, errors: &FieldErrors) -> FieldBinding {
        let message = errors.message(&self.path).map(str::to_string);
        FieldBinding {
            path: self.path.clone(),
            disabled: self.disabled,
            has_error: message.as_deref().is_some_and(|m| !m.is_empty()),
            message,
        }
    }

    /// Label (if any), control, description (if any), message.
    pub fn slots(&self, errors: &FieldErrors) -> Vec<FieldSlot<'a>> {
        let mut slots = Vec::with_capacity(4);
        if let Some(label) = self.descriptor.label.as_deref().filter(|l| !l.is_empty()) {
            slots.push(FieldSlot::Label(label));
        }
        slots.push(FieldSlot::Control(&self.descriptor.kind));
        if let Some(description) = self.descriptor.description.as_deref().filter(|d| !d.is_empty()) {
            slots.push(FieldSlot::Description(description));
        }
        slots.push(FieldSlot::Message(errors.message(&self.path).map(str::to_string)));
        slots
    }
}
