//! Model value extractor.

use formwright_types::{FormError, InputState, InputValue, Model};

use crate::inputs::InputRegistry;

/// Copy the value of every registered input into `model`.
///
/// Checkboxes become `"true"` / `"false"`, text is copied verbatim and
/// dropdown categories contribute their identifying name. Inputs without a
/// value leave their key unset. An input exposing neither a checked state nor a
/// value fails with [`FormError::UnknownInputKind`].
pub fn extract_values(inputs: &InputRegistry, model: &mut Model) -> Result<(), FormError> {
    for (name, input) in inputs.iter() {
        let value = match input.state() {
            InputState::Checked(checked) => Some(checked.to_string()),
            InputState::Value(Some(InputValue::Text(text))) => Some(text),
            InputState::Value(Some(InputValue::Category(category))) => Some(category.name),
            InputState::Value(None) => None,
            InputState::Opaque => {
                return Err(FormError::UnknownInputKind(input.id().to_string()));
            }
        };
        model.set_property_value(name, value);
    }
    Ok(())
}
