use crate::FieldKind;

/// Configuration errors raised while loading, rendering or reading a form.
///
/// These indicate a mistake in the descriptors or in a view builder, not bad
/// user input. User input problems are reported as validation messages instead.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Unknown field type: \"{0}\"")]
    UnknownFieldType(String),

    #[error("Unknown input type with ID {0}")]
    UnknownInputKind(String),

    #[error("Field '{label}' of type {kind} has no variable name")]
    MissingVariableName { label: String, kind: FieldKind },

    #[error("Variable name '{0}' is used by more than one field")]
    DuplicateVariableName(String),

    #[error("Field '{label}' requests a confirmation but is of type {kind}")]
    ConfirmationNotSupported { label: String, kind: FieldKind },

    #[error("Invalid form descriptor: {0}")]
    Descriptor(#[from] serde_json::Error),
}
