//! The backend-neutral component tree produced by rendering.
//!
//! Interactive inputs are created by the host's [`ViewBuilder`](crate::ViewBuilder)
//! and embedded as [`Component::Input`]. Everything else (labels, spacers and
//! containers) is plain data that a backend walks to build its widgets.

use crate::{InputHandle, OptionValue};

/// Properties of a static text component (labels and read-only values).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextProperties {
    pub value: String,
    pub description: Option<String>,
    /// Show a required marker next to the text.
    pub required_indicator: bool,
    pub width: Option<u32>,
    /// CSS-like font style, `"normal"` unless set.
    pub font_style: String,
}

/// The input type of an input box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    #[default]
    Text,
    Number,
    Password,
}

/// Properties passed to [`ViewBuilder::input_box`](crate::ViewBuilder::input_box).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputBoxProperties {
    pub value: Option<String>,
    pub aria_label: String,
    pub input_type: InputType,
    pub required: bool,
    pub placeholder: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub width: Option<u32>,
}

/// Properties passed to [`ViewBuilder::dropdown`](crate::ViewBuilder::dropdown).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DropdownProperties {
    pub values: Vec<OptionValue>,
    pub value: Option<OptionValue>,
    pub width: Option<u32>,
}

/// Properties passed to [`ViewBuilder::checkbox`](crate::ViewBuilder::checkbox).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckboxProperties {
    pub checked: bool,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexFlow {
    Row,
    Column,
}

#[derive(Debug, Clone)]
pub struct FlexContainer {
    pub flow: FlexFlow,
    pub items: Vec<Component>,
}

/// A titled group, one per section.
#[derive(Debug, Clone)]
pub struct GroupContainer {
    pub header: Option<String>,
    pub collapsible: bool,
    pub collapsed: bool,
    pub items: Vec<Component>,
}

/// A single-column form spanning the full width.
#[derive(Debug, Clone)]
pub struct FormContainer {
    pub items: Vec<Component>,
}

#[derive(Debug, Clone)]
pub enum Component {
    Text(TextProperties),
    Input(InputHandle),
    /// Empty horizontal space between the fields of a row.
    Spacer {
        width: u32,
    },
    Flex(FlexContainer),
    Group(GroupContainer),
    Form(FormContainer),
}

impl Component {
    /// A row flex container.
    pub fn row(items: Vec<Component>) -> Self {
        Self::Flex(FlexContainer {
            flow: FlexFlow::Row,
            items,
        })
    }

    /// A column flex container.
    pub fn column(items: Vec<Component>) -> Self {
        Self::Flex(FlexContainer {
            flow: FlexFlow::Column,
            items,
        })
    }

    /// Direct children of a container, empty for leaves.
    pub fn children(&self) -> &[Component] {
        match self {
            Self::Flex(flex) => &flex.items,
            Self::Group(group) => &group.items,
            Self::Form(form) => &form.items,
            Self::Text(_) | Self::Input(_) | Self::Spacer { .. } => &[],
        }
    }

    pub fn as_text(&self) -> Option<&TextProperties> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&InputHandle> {
        match self {
            Self::Input(input) => Some(input),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&GroupContainer> {
        match self {
            Self::Group(group) => Some(group),
            _ => None,
        }
    }

    pub fn is_row(&self) -> bool {
        matches!(self, Self::Flex(FlexContainer { flow: FlexFlow::Row, .. }))
    }

    /// All inputs in this subtree, depth first.
    pub fn inputs(&self) -> Vec<&InputHandle> {
        let mut found = Vec::new();
        self.collect_inputs(&mut found);
        found
    }

    fn collect_inputs<'a>(&'a self, found: &mut Vec<&'a InputHandle>) {
        match self {
            Self::Input(input) => found.push(input),
            _ => {
                for child in self.children() {
                    child.collect_inputs(found);
                }
            }
        }
    }
}

/// A titled tab holding a rendered form.
#[derive(Debug, Clone)]
pub struct RenderedTab {
    pub title: String,
    pub content: Component,
}
