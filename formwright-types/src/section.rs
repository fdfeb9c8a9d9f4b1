use serde::{Deserialize, Serialize};

use crate::{FieldDescriptor, FormError, LabelPosition};

/// Fallback sizes used when neither field, section nor tab set one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDefaults {
    pub input_width: u32,
    pub label_width: u32,
    /// Gap between the fields of one row.
    pub space_between_fields: u32,
}

impl LayoutDefaults {
    pub const INPUT_WIDTH: u32 = 400;
    pub const LABEL_WIDTH: u32 = 200;
    pub const SPACE_BETWEEN_FIELDS: u32 = 50;
}

impl Default for LayoutDefaults {
    fn default() -> Self {
        Self {
            input_width: Self::INPUT_WIDTH,
            label_width: Self::LABEL_WIDTH,
            space_between_fields: Self::SPACE_BETWEEN_FIELDS,
        }
    }
}

/// Width settings inherited from an enclosing tab or page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Widths {
    pub label_width: Option<u32>,
    pub input_width: Option<u32>,
}

/// A row of fields laid out side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowDescriptor {
    pub fields: Vec<FieldDescriptor>,
}

impl RowDescriptor {
    pub fn new(fields: Vec<FieldDescriptor>) -> Self {
        Self { fields }
    }
}

/// A titled, collapsible group of fields or field rows.
///
/// If both `fields` and `rows` are present, `fields` wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDescriptor {
    #[serde(default)]
    pub title: Option<String>,

    /// Defaults to `true`.
    #[serde(default)]
    pub collapsible: Option<bool>,

    /// Defaults to `false`.
    #[serde(default)]
    pub collapsed: Option<bool>,

    #[serde(default)]
    pub fields: Option<Vec<FieldDescriptor>>,

    #[serde(default)]
    pub rows: Option<Vec<RowDescriptor>>,

    #[serde(default)]
    pub label_width: Option<u32>,

    #[serde(default)]
    pub input_width: Option<u32>,

    #[serde(default)]
    pub label_position: Option<LabelPosition>,

    #[serde(default)]
    pub space_between_fields: Option<u32>,
}

impl SectionDescriptor {
    /// Create a section with a flat list of fields.
    pub fn with_fields(title: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: Some(title.into()),
            fields: Some(fields),
            ..Self::default()
        }
    }

    /// Create a section whose fields are grouped into rows.
    pub fn with_rows(title: impl Into<String>, rows: Vec<Vec<FieldDescriptor>>) -> Self {
        Self {
            title: Some(title.into()),
            rows: Some(rows.into_iter().map(RowDescriptor::new).collect()),
            ..Self::default()
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = Some(collapsible);
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

    /// All fields of this section, flat or row by row, in declaration order.
    pub fn all_fields(&self) -> Box<dyn Iterator<Item = &FieldDescriptor> + '_> {
        match (&self.fields, &self.rows) {
            (Some(fields), _) => Box::new(fields.iter()),
            (None, Some(rows)) => Box::new(rows.iter().flat_map(|row| row.fields.iter())),
            (None, None) => Box::new(std::iter::empty()),
        }
    }
}

/// One tab of a dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabDescriptor {
    pub title: String,
    pub sections: Vec<SectionDescriptor>,
    #[serde(default)]
    pub label_width: Option<u32>,
    #[serde(default)]
    pub input_width: Option<u32>,
}

impl TabDescriptor {
    pub fn new(title: impl Into<String>, sections: Vec<SectionDescriptor>) -> Self {
        Self {
            title: title.into(),
            sections,
            label_width: None,
            input_width: None,
        }
    }

    pub fn widths(&self) -> Widths {
        Widths {
            label_width: self.label_width,
            input_width: self.input_width,
        }
    }
}

/// A dialog made of one or more tabs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialogDescriptor {
    pub title: String,
    pub name: String,
    pub tabs: Vec<TabDescriptor>,
    /// Label of the OK button, if not the toolkit's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ok_label: Option<String>,
}

impl DialogDescriptor {
    pub fn new(title: impl Into<String>, name: impl Into<String>, tabs: Vec<TabDescriptor>) -> Self {
        Self {
            title: title.into(),
            name: name.into(),
            tabs,
            ok_label: None,
        }
    }

    pub fn with_ok_label(mut self, label: impl Into<String>) -> Self {
        self.ok_label = Some(label.into());
        self
    }

    /// Decode a dialog descriptor from JSON.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// All fields of all tabs, in declaration order.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.tabs
            .iter()
            .flat_map(|tab| tab.sections.iter())
            .flat_map(|section| section.all_fields())
    }
}

/// A single wizard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WizardPageDescriptor {
    pub title: String,
    pub sections: Vec<SectionDescriptor>,
}

impl WizardPageDescriptor {
    pub fn new(title: impl Into<String>, sections: Vec<SectionDescriptor>) -> Self {
        Self {
            title: title.into(),
            sections,
        }
    }
}
