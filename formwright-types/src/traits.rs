use crate::{
    CheckboxProperties, DropdownProperties, InputBoxProperties, InputHandle, RenderedTab,
};

/// Trait for hosts that create interactive inputs.
///
/// The renderer asks the view builder for every input it needs; labels,
/// spacers and containers are returned as [`Component`](crate::Component) data.
pub trait ViewBuilder {
    /// Create a text, number or password input box.
    fn input_box(&mut self, props: InputBoxProperties) -> InputHandle;

    /// Create a dropdown.
    fn dropdown(&mut self, props: DropdownProperties) -> InputHandle;

    /// Create a checkbox.
    fn checkbox(&mut self, props: CheckboxProperties) -> InputHandle;
}

/// Severity of a dialog message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageLevel {
    #[default]
    Information,
    Warning,
    Error,
}

/// The message shown at the top of a dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogMessage {
    pub text: String,
    pub level: MessageLevel,
}

impl DialogMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: MessageLevel::Error,
        }
    }

    /// An empty message, hiding any previous one.
    pub fn clear() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Called when the user tries to close the dialog; `false` keeps it open.
pub type CloseValidator = Box<dyn Fn() -> bool>;

/// Trait for the dialog or wizard that hosts a form.
///
/// Methods take `&self`: surfaces are shared with the listeners that update
/// the message, and are expected to use interior mutability.
pub trait DialogSurface {
    /// Replace the dialog's content.
    fn set_content(&self, tabs: Vec<RenderedTab>);

    /// Replace the dialog's message.
    fn set_message(&self, message: DialogMessage);

    /// Register a check that runs when the user tries to close the dialog.
    fn register_close_validator(&self, validator: CloseValidator);

    /// Set the label of the OK button.
    fn set_ok_label(&self, label: &str);
}

/// Formats user-facing strings.
pub trait Localizer {
    /// Look up `key` and substitute `args` into it. `template` is the default
    /// text, containing `{0}`, `{1}`, ... placeholders.
    fn localize(&self, key: &str, template: &str, args: &[&str]) -> String;
}

/// Uses the built-in templates and only substitutes placeholders.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLocalizer;

impl Localizer for DefaultLocalizer {
    fn localize(&self, _key: &str, template: &str, args: &[&str]) -> String {
        args.iter()
            .enumerate()
            .fold(template.to_string(), |text, (idx, arg)| {
                text.replace(&format!("{{{idx}}}"), arg)
            })
    }
}
