//! Lendform Domain
//!
//! The declarative form engine behind the loan-application front-end:
//!
//! - `value` / `option` - structural equality over option payloads
//! - `values` - the nested form-value container and dotted-path access
//! - `descriptor` - static field descriptors with conditional disabling
//! - `schema` / `resolver` - validation, relaxed per submit for disabled fields
//! - `renderer` - descriptor resolution and error binding for one field
//! - `fields` - headless state machines for each field component
//! - `calculator` - finance product arithmetic
//! - `onboarding` - resend cooldowns, passcode entry, email masking
//! - `export` - flattening workflow records into CSV
//!
//! Nothing in this crate performs I/O; the UI layer feeds events in and
//! applies the returned values.

pub mod calculator;
pub mod descriptor;
pub mod error;
pub mod export;
pub mod fields;
pub mod onboarding;
pub mod option;
pub mod renderer;
pub mod resolver;
pub mod schema;
pub mod value;
pub mod values;

pub use descriptor::{
    CheckboxProps, DataMask, DigitProps, DisabledRule, DropdownProps, FieldDescriptor, FieldKind,
    FieldType, InputType, RadioGroupProps, ReturnType, TextInputProps, TextareaProps,
};
pub use error::FormError;
pub use option::SelectOption;
pub use renderer::{resolve_field, FieldBinding, FieldLookupError, FieldSlot, ResolvedField};
pub use resolver::{ConditionalResolver, ObjectSchema, SchemaPatch};
pub use schema::{ErrorKind, FieldError, FieldErrors, Rule, Schema, TextCheck, ValidationOutcome};
pub use value::{contains_object, is_equal};
pub use values::{ArrayFieldPath, FormValues};
