//! Type-specific field properties
//!
//! Each field type carries its own props struct. Defaults match what the
//! components assume when a form definition leaves a prop out.

use serde::{Deserialize, Serialize};

use crate::option::SelectOption;

/// Largest value a digit input accepts unless configured otherwise.
pub const DEFAULT_MAX_VALUE: f64 = 9_999_999_999_999.0;

/// HTML input type of a text input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputType {
    #[default]
    Text,
    Password,
    Email,
    Tel,
    /// Uncontrolled file picker; only the selected files are forwarded
    File,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::File => "file",
        }
    }
}

/// Fixed-format input masks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DataMask {
    /// `DD/MM/YYYY`
    Date,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInputProps {
    pub input_type: InputType,
    pub placeholder: Option<String>,
    /// Show an eye toggle on password inputs
    pub toggle_password: bool,
    pub leading_content: Option<String>,
    pub trailing_content: Option<String>,
    /// Idle time before `on_change` fires; 0 disables debouncing
    pub debounce_ms: u64,
    pub data_mask: Option<DataMask>,
    pub max_length: Option<usize>,
    pub read_only: bool,
    /// `accept` attribute for file inputs
    pub accept: Option<String>,
    /// Allow several files on file inputs
    pub multiple: bool,
}

impl TextInputProps {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn with_leading(mut self, content: impl Into<String>) -> Self {
        self.leading_content = Some(content.into());
        self
    }

    pub fn with_trailing(mut self, content: impl Into<String>) -> Self {
        self.trailing_content = Some(content.into());
        self
    }

    pub fn with_mask(mut self, mask: DataMask) -> Self {
        self.data_mask = Some(mask);
        self
    }

    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Password input with a show/hide toggle.
    pub fn password(toggle: bool) -> Self {
        Self {
            input_type: InputType::Password,
            toggle_password: toggle,
            ..Self::default()
        }
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Let a file picker take several files.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }

    /// A file picker accepting the given MIME patterns.
    pub fn file(accept: impl Into<String>) -> Self {
        Self {
            input_type: InputType::File,
            accept: Some(accept.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DigitProps {
    pub placeholder: Option<String>,
    /// Values above this are replaced by it; 0 disables the clamp
    pub max_value: f64,
    pub allow_decimal: bool,
    /// Left-pad the integer part to two digits
    pub pad_with_zero: bool,
    pub max_length: Option<usize>,
    pub leading_content: Option<String>,
    pub trailing_content: Option<String>,
    pub read_only: bool,
}

impl Default for DigitProps {
    fn default() -> Self {
        Self {
            placeholder: None,
            max_value: DEFAULT_MAX_VALUE,
            allow_decimal: true,
            pad_with_zero: false,
            max_length: None,
            leading_content: None,
            trailing_content: None,
            read_only: false,
        }
    }
}

impl DigitProps {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_max_value(mut self, max_value: f64) -> Self {
        self.max_value = max_value;
        self
    }

    pub fn integers_only(mut self) -> Self {
        self.allow_decimal = false;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn padded(mut self) -> Self {
        self.pad_with_zero = true;
        self
    }

    pub fn with_leading(mut self, content: impl Into<String>) -> Self {
        self.leading_content = Some(content.into());
        self
    }

    pub fn with_trailing(mut self, content: impl Into<String>) -> Self {
        self.trailing_content = Some(content.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextareaProps {
    pub placeholder: Option<String>,
    pub rows: u32,
    /// Prefix every line with a bullet glyph
    pub auto_bullet: bool,
}

impl Default for TextareaProps {
    fn default() -> Self {
        Self {
            placeholder: None,
            rows: 4,
            auto_bullet: false,
        }
    }
}

impl TextareaProps {
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_rows(mut self, rows: u32) -> Self {
        self.rows = rows;
        self
    }

    pub fn bulleted(mut self) -> Self {
        self.auto_bullet = true;
        self
    }
}

/// Checkbox props. An empty `options` list means single boolean mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckboxProps {
    /// Label beside the single tick box
    pub label: Option<String>,
    pub options: Vec<SelectOption>,
}

impl CheckboxProps {
    pub fn single(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            options: Vec::new(),
        }
    }

    pub fn multi(options: Vec<SelectOption>) -> Self {
        Self {
            label: None,
            options,
        }
    }

    pub fn is_multi(&self) -> bool {
        !self.options.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadioGroupProps {
    pub options: Vec<SelectOption>,
}

/// Which shape a dropdown reports back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnType {
    /// The option's primitive `value`
    #[default]
    Value,
    /// The whole option object
    Object,
    /// Ordered sequence of options
    Array,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownProps {
    pub return_type: ReturnType,
    pub options: Vec<SelectOption>,
    pub placeholder: String,
    pub no_options_label: String,
    /// Array mode: hide already-selected options from the open list
    pub remove_option_when_selected: bool,
    /// Single modes: re-selecting the current option is a no-op
    pub disable_toggle_on_selected_option: bool,
    pub read_only: bool,
    pub option_one_liner: bool,
}

impl Default for DropdownProps {
    fn default() -> Self {
        Self {
            return_type: ReturnType::Value,
            options: Vec::new(),
            placeholder: "Select an option".to_string(),
            no_options_label: "No options available".to_string(),
            remove_option_when_selected: true,
            disable_toggle_on_selected_option: false,
            read_only: false,
            option_one_liner: true,
        }
    }
}

impl DropdownProps {
    pub fn new(return_type: ReturnType, options: Vec<SelectOption>) -> Self {
        Self {
            return_type,
            options,
            ..Self::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn keep_selected_options(mut self) -> Self {
        self.remove_option_when_selected = false;
        self
    }

    pub fn without_toggle(mut self) -> Self {
        self.disable_toggle_on_selected_option = true;
        self
    }
}
