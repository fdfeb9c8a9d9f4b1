use std::collections::BTreeMap;

use formwright_types::{FormError, InputHandle, InputState, InputValue};

/// Inputs of a form, keyed by variable name.
#[derive(Debug, Clone, Default)]
pub struct InputRegistry {
    inputs: BTreeMap<String, InputHandle>,
}

impl InputRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an input. Each variable name may be registered once.
    pub fn insert(&mut self, name: impl Into<String>, input: InputHandle) -> Result<(), FormError> {
        let name = name.into();
        if self.inputs.contains_key(&name) {
            return Err(FormError::DuplicateVariableName(name));
        }
        self.inputs.insert(name, input);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&InputHandle> {
        self.inputs.get(name)
    }

    /// Text of the named input, if registered.
    pub fn text(&self, name: &str) -> Option<String> {
        self.get(name).map(|input| input.state().text())
    }

    /// Whether the named input holds no text. Unknown names count as empty.
    pub fn is_empty_input(&self, name: &str) -> bool {
        self.get(name).is_none_or(|input| match input.state() {
            InputState::Value(None) => true,
            InputState::Value(Some(InputValue::Text(text))) => text.is_empty(),
            InputState::Value(Some(InputValue::Category(_)))
            | InputState::Checked(_)
            | InputState::Opaque => false,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputHandle)> {
        self.inputs.iter().map(|(name, input)| (name.as_str(), input))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inputs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl TryFrom<Vec<(String, InputHandle)>> for InputRegistry {
    type Error = FormError;

    /// Fails on the first repeated name.
    fn try_from(entries: Vec<(String, InputHandle)>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for (name, input) in entries {
            registry.insert(name, input)?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use formwright_types::{InputBoxProperties, ViewBuilder};

    use super::*;
    use crate::test_view::TestView;

    #[test]
    fn repeated_names_are_rejected() {
        let mut view = TestView::new();
        let first = view.input_box(InputBoxProperties {
            value: Some("first".to_string()),
            ..Default::default()
        });
        let second = view.input_box(InputBoxProperties {
            value: Some("second".to_string()),
            ..Default::default()
        });

        let err = InputRegistry::try_from(vec![
            ("name".to_string(), first),
            ("name".to_string(), second),
        ])
        .unwrap_err();
        assert!(matches!(err, FormError::DuplicateVariableName(name) if name == "name"));
    }

    #[test]
    fn text_and_emptiness() {
        let mut view = TestView::new();
        let filled = view.input_box(InputBoxProperties {
            value: Some("x".to_string()),
            ..Default::default()
        });
        let empty = view.input_box(InputBoxProperties::default());
        let registry = InputRegistry::try_from(vec![
            ("filled".to_string(), filled),
            ("empty".to_string(), empty),
        ])
        .unwrap();

        assert_eq!(registry.text("filled").as_deref(), Some("x"));
        assert!(registry.is_empty_input("empty"));
        assert!(registry.is_empty_input("unknown"));
        assert!(!registry.is_empty_input("filled"));
    }
}
