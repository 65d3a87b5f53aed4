//! UI components

pub mod common;
pub mod field_array;
pub mod field_renderer;
pub mod fields;

pub use field_array::{use_field_array, FieldArray, FieldArraySection};
pub use field_renderer::FieldRenderer;
