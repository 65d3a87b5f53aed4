//! Conditional Schema Resolver
//!
//! Wraps a static schema so that fields disabled at submit time stop blocking
//! submission. For each top-level descriptor whose disabled rule evaluates to
//! true against the values being validated, the field's rule is replaced with
//! "anything, including absent" in a per-call copy of the schema.

use crate::descriptor::FieldDescriptor;
use crate::schema::{FieldErrors, Rule, Schema, ValidationOutcome};
use crate::values::FormValues;

/// Field name to replacement rule, applied over an immutable base schema.
#[derive(Debug, Clone, Default)]
pub struct SchemaPatch {
    overrides: Vec<(String, Rule)>,
}

impl SchemaPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, rule: Rule) {
        let name = name.into();
        match self.overrides.iter_mut().find(|(field, _)| *field == name) {
            Some(slot) => slot.1 = rule,
            None => self.overrides.push((name, rule)),
        }
    }

    /// Make `name` accept anything, including absence.
    pub fn relax(&mut self, name: impl Into<String>) {
        self.set(name, Rule::relaxed());
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.overrides.iter().any(|(field, _)| field == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Rule)> {
        self.overrides.iter().map(|(name, rule)| (name.as_str(), rule))
    }

    /// The patch as a standalone schema, for full merges.
    pub fn to_schema(&self) -> Schema {
        self.overrides
            .iter()
            .fold(Schema::new(), |schema, (name, rule)| schema.field(name.clone(), rule.clone()))
    }
}

/// An object schema the resolver can relax.
pub trait ObjectSchema: Sized {
    fn validate(&self, values: &FormValues) -> ValidationOutcome;

    /// Incremental extension. `None` when this schema cannot be extended in
    /// place; the resolver then falls back to `merge_patch`.
    fn try_extend(&self, patch: &SchemaPatch) -> Option<Self>;

    /// Full merge producing a schema equivalent to a successful `try_extend`.
    fn merge_patch(&self, patch: &SchemaPatch) -> Self;
}

impl ObjectSchema for Schema {
    fn validate(&self, values: &FormValues) -> ValidationOutcome {
        Schema::validate(self, values)
    }

    fn try_extend(&self, patch: &SchemaPatch) -> Option<Self> {
        Some(self.extend(patch.iter()))
    }

    fn merge_patch(&self, patch: &SchemaPatch) -> Self {
        self.merge(&patch.to_schema())
    }
}

/// Validator that relaxes currently disabled fields before delegating.
#[derive(Debug, Clone)]
pub struct ConditionalResolver<S = Schema> {
    schema: S,
    descriptors: Vec<FieldDescriptor>,
}

impl<S: ObjectSchema + Clone> ConditionalResolver<S> {
    pub fn new(schema: S, descriptors: Vec<FieldDescriptor>) -> Self {
        Self {
            schema,
            descriptors,
        }
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn descriptors(&self) -> &[FieldDescriptor] {
        &self.descriptors
    }

    /// Overrides for every top-level descriptor disabled under `values`.
    /// Array children are not consulted, so the index is always `None`.
    pub fn relaxations(&self, values: &FormValues) -> SchemaPatch {
        let mut patch = SchemaPatch::new();
        for descriptor in &self.descriptors {
            if descriptor.is_disabled(values, &descriptor.name, None) {
                tracing::debug!(field = %descriptor.name, "Relaxing disabled field");
                patch.relax(descriptor.name.clone());
            }
        }
        patch
    }

    /// The schema that applies to `values`. Never stored.
    pub fn effective_schema(&self, values: &FormValues) -> S {
        let patch = self.relaxations(values);
        if patch.is_empty() {
            return self.schema.clone();
        }
        match self.schema.try_extend(&patch) {
            Some(extended) => extended,
            None => {
                tracing::trace!(fields = patch.len(), "Schema not extensible, merging patch");
                self.schema.merge_patch(&patch)
            }
        }
    }

    pub fn validate(&self, values: &FormValues) -> ValidationOutcome {
        self.effective_schema(values).validate(values)
    }

    /// Errors at or under `path` only, for touched-field re-validation.
    pub fn validate_path(&self, values: &FormValues, path: &str) -> FieldErrors {
        let mut scoped = FieldErrors::new();
        scoped.replace_under(path, &self.validate(values).errors);
        scoped
    }
}
