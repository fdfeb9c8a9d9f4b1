use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::FormError;

/// The kind of a field, determining which input is created for it.
///
/// Kinds are written as snake_case tags in descriptor files
/// (`"sql_password"`, `"datetime_text"`, ...). Parsing an unknown tag fails with
/// [`FormError::UnknownFieldType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    /// Single-line text input.
    Text,

    /// Numeric input with optional min/max bounds.
    Number,

    /// Masked input.
    Password,

    /// Masked input checked against the SQL Server password policy.
    SqlPassword,

    /// Dropdown over a fixed list of options.
    Options,

    /// Text input pre-filled with a timestamp suffix.
    DateTimeText,

    /// Boolean checkbox.
    Checkbox,

    /// Static label/value pair without an input.
    ReadonlyText,
}

impl FieldKind {
    /// All field kinds, in declaration order.
    pub const ALL: [FieldKind; 8] = [
        Self::Text,
        Self::Number,
        Self::Password,
        Self::SqlPassword,
        Self::Options,
        Self::DateTimeText,
        Self::Checkbox,
        Self::ReadonlyText,
    ];

    /// The tag used for this kind in descriptor files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number => "number",
            Self::Password => "password",
            Self::SqlPassword => "sql_password",
            Self::Options => "options",
            Self::DateTimeText => "datetime_text",
            Self::Checkbox => "checkbox",
            Self::ReadonlyText => "readonly_text",
        }
    }

    /// Check if this is one of the masked password kinds.
    pub fn is_password(&self) -> bool {
        matches!(self, Self::Password | Self::SqlPassword)
    }

    /// Check if fields of this kind produce an input that ends up in the model.
    pub fn has_input(&self) -> bool {
        !matches!(self, Self::ReadonlyText)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

impl TryFrom<String> for FieldKind {
    type Error = FormError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Where a field's label sits relative to its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelPosition {
    /// Label and input side by side in one row.
    Left,

    /// Label stacked above the input.
    #[default]
    Top,
}

/// A dropdown entry with a stable identifying name and a display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryValue {
    /// Identifying name, written into the model.
    pub name: String,

    /// Text shown to the user.
    pub display_name: String,
}

impl CategoryValue {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
        }
    }
}

/// One selectable value of an `Options` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// A plain string that is both name and display text.
    Plain(String),

    /// A category with separate name and display text.
    Category(CategoryValue),
}

impl OptionValue {
    /// The identifying name of this option.
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Category(c) => &c.name,
        }
    }

    /// The display text of this option.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Plain(s) => s,
            Self::Category(c) => &c.display_name,
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

impl From<CategoryValue> for OptionValue {
    fn from(c: CategoryValue) -> Self {
        Self::Category(c)
    }
}

/// A declarative, data-only description of one form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    /// The kind of input to create.
    #[serde(rename = "type")]
    pub kind: FieldKind,

    /// Key of this field's value in the model. Required unless `ReadonlyText`.
    #[serde(default)]
    pub variable_name: Option<String>,

    /// Label text.
    pub label: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub required: bool,

    /// Default value. For checkboxes, `"true"` means checked.
    #[serde(default)]
    pub default_value: Option<String>,

    #[serde(default, rename = "placeHolder")]
    pub placeholder: Option<String>,

    /// Lower bound for `Number` fields.
    #[serde(default)]
    pub min: Option<f64>,

    /// Upper bound for `Number` fields.
    #[serde(default)]
    pub max: Option<f64>,

    /// Entries of an `Options` field.
    #[serde(default)]
    pub options: Vec<OptionValue>,

    /// Render a second masked input that must match. Password kinds only.
    #[serde(default)]
    pub confirmation_required: bool,

    #[serde(default)]
    pub confirmation_label: Option<String>,

    /// User name the password must not contain (`SqlPassword` only).
    #[serde(default)]
    pub user_name: Option<String>,

    /// Validation is done by the host; the input is not marked required.
    #[serde(default)]
    pub use_custom_validator: bool,

    /// Font style of the value text of `ReadonlyText` fields.
    #[serde(default)]
    pub font_style: Option<String>,

    #[serde(default)]
    pub label_width: Option<u32>,

    #[serde(default)]
    pub input_width: Option<u32>,

    #[serde(default)]
    pub label_position: Option<LabelPosition>,
}

impl FieldDescriptor {
    /// Create a new field of the given kind.
    pub fn new(kind: FieldKind, variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            variable_name: Some(variable_name.into()),
            label: label.into(),
            description: None,
            required: false,
            default_value: None,
            placeholder: None,
            min: None,
            max: None,
            options: Vec::new(),
            confirmation_required: false,
            confirmation_label: None,
            user_name: None,
            use_custom_validator: false,
            font_style: None,
            label_width: None,
            input_width: None,
            label_position: None,
        }
    }

    pub fn text(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::Text, variable_name, label)
    }

    pub fn number(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::Number, variable_name, label)
    }

    pub fn password(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::Password, variable_name, label)
    }

    pub fn sql_password(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::SqlPassword, variable_name, label)
    }

    pub fn options(
        variable_name: impl Into<String>,
        label: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<OptionValue>>,
    ) -> Self {
        let mut field = Self::new(FieldKind::Options, variable_name, label);
        field.options = options.into_iter().map(Into::into).collect();
        field
    }

    pub fn date_time_text(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::DateTimeText, variable_name, label)
    }

    pub fn checkbox(variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(FieldKind::Checkbox, variable_name, label)
    }

    /// Create a read-only label/value pair. It has no variable name.
    pub fn readonly_text(label: impl Into<String>, value: impl Into<String>) -> Self {
        let mut field = Self::new(FieldKind::ReadonlyText, "", label);
        field.variable_name = None;
        field.default_value = Some(value.into());
        field
    }

    /// The variable name, if set and non-empty.
    pub fn variable_name(&self) -> Option<&str> {
        self.variable_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_default(mut self, default_value: impl Into<String>) -> Self {
        self.default_value = Some(default_value.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Require a matching confirmation input with the given label.
    pub fn with_confirmation(mut self, confirmation_label: impl Into<String>) -> Self {
        self.confirmation_required = true;
        self.confirmation_label = Some(confirmation_label.into());
        self
    }

    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn with_custom_validator(mut self) -> Self {
        self.use_custom_validator = true;
        self
    }

    pub fn with_font_style(mut self, font_style: impl Into<String>) -> Self {
        self.font_style = Some(font_style.into());
        self
    }

    pub fn with_widths(mut self, label_width: Option<u32>, input_width: Option<u32>) -> Self {
        self.label_width = label_width;
        self.input_width = input_width;
        self
    }

    pub fn with_label_position(mut self, position: LabelPosition) -> Self {
        self.label_position = Some(position);
        self
    }
}
