use std::{fmt, rc::Rc};

use crate::CategoryValue;

/// The value held by a value-bearing input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputValue {
    /// Text of an input box, or a plain dropdown entry.
    Text(String),

    /// A dropdown entry with an identifying name.
    Category(CategoryValue),
}

/// What an input exposes to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputState {
    /// A checkbox.
    Checked(bool),

    /// An input box or dropdown. `None` if nothing was entered or selected.
    Value(Option<InputValue>),

    /// Neither a checked state nor a value.
    Opaque,
}

impl InputState {
    /// The text of this input as used by validators.
    ///
    /// Categories yield their name, checkboxes and empty inputs an empty string.
    pub fn text(&self) -> String {
        match self {
            Self::Value(Some(InputValue::Text(s))) => s.clone(),
            Self::Value(Some(InputValue::Category(c))) => c.name.clone(),
            Self::Value(None) | Self::Checked(_) | Self::Opaque => String::new(),
        }
    }
}

/// Callback invoked after an input's value changed.
pub type ChangeListener = Rc<dyn Fn()>;

/// A live input created by a [`ViewBuilder`](crate::ViewBuilder).
///
/// Inputs are shared between the component tree, the input registry and the
/// validators that read them, so they are handed out as [`InputHandle`]s.
pub trait InputComponent: fmt::Debug {
    /// Identifier used in error messages.
    fn id(&self) -> &str;

    /// Current state of the input.
    fn state(&self) -> InputState;

    /// Whether the toolkit marks this input as required.
    fn required(&self) -> bool {
        false
    }

    /// Subscribe to value changes. The subscription ends when the returned
    /// `Disposable` is dropped.
    fn on_changed(&self, listener: ChangeListener) -> Disposable;
}

pub type InputHandle = Rc<dyn InputComponent>;

/// A registration that is released exactly once, on `dispose` or on drop.
#[must_use = "dropping a Disposable releases it immediately"]
pub struct Disposable(Option<Box<dyn FnOnce()>>);

impl Disposable {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }
}

impl Drop for Disposable {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Disposable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Disposable")
            .field("released", &self.0.is_none())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn disposable_releases_once() {
        let count = Rc::new(Cell::new(0));
        let counter = Rc::clone(&count);
        let disposable = Disposable::new(move || counter.set(counter.get() + 1));
        disposable.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn disposable_releases_on_drop() {
        let count = Rc::new(Cell::new(0));
        {
            let counter = Rc::clone(&count);
            let _disposable = Disposable::new(move || counter.set(counter.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn state_text() {
        let category = InputState::Value(Some(InputValue::Category(CategoryValue::new(
            "basic", "Basic",
        ))));
        assert_eq!(category.text(), "basic");
        assert_eq!(InputState::Value(None).text(), "");
        assert_eq!(InputState::Checked(true).text(), "");
    }
}
