//! Field renderer: one [`FieldDescriptor`] in, label and input components out.

use std::rc::Rc;

use formwright_types::{
    CheckboxProperties, Component, DropdownProperties, FieldDescriptor, FieldKind, FormError,
    InputBoxProperties, InputHandle, InputType, LabelPosition, OptionValue, TextProperties,
};
use tracing::debug;

use crate::{
    context::{FieldLayout, RenderContext},
    messages,
    password::{DEFAULT_SQL_USER_NAME, is_valid_sql_password},
    validation::{ValidationOutcome, Validator},
};

/// How an input created for a field is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputRole {
    /// The field's value, registered under its variable name.
    Value(String),

    /// The confirmation input of a password field. Only validators read it.
    Confirmation,
}

/// An input created while rendering a field.
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub handle: InputHandle,
    pub role: InputRole,
}

/// What rendering produced. Callers merge these into sections and forms.
#[derive(Debug, Default)]
pub struct RenderedField {
    pub components: Vec<Component>,
    pub inputs: Vec<FieldInput>,
    pub validators: Vec<Validator>,
}

impl RenderedField {
    fn register(&mut self, name: &str, handle: &InputHandle) {
        self.inputs.push(FieldInput {
            handle: Rc::clone(handle),
            role: InputRole::Value(name.to_string()),
        });
    }

    fn push_pair(&mut self, label: Component, input: Component, position: LabelPosition) {
        match position {
            LabelPosition::Left => self.components.push(Component::row(vec![label, input])),
            LabelPosition::Top => self.components.extend([label, input]),
        }
    }
}

/// Render one field.
///
/// Fails if the field has no variable name (except `ReadonlyText`) or asks for
/// a confirmation without being a password field.
pub fn render_field(
    field: &FieldDescriptor,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
) -> Result<RenderedField, FormError> {
    if field.confirmation_required && !field.kind.is_password() {
        return Err(FormError::ConfirmationNotSupported {
            label: field.label.clone(),
            kind: field.kind,
        });
    }
    let name = match field.variable_name() {
        Some(name) => name,
        None if field.kind.has_input() => {
            return Err(FormError::MissingVariableName {
                label: field.label.clone(),
                kind: field.kind,
            });
        }
        None => "",
    };
    debug!(kind = %field.kind, label = %field.label, "rendering field");

    let mut rendered = RenderedField::default();
    match field.kind {
        FieldKind::Text => render_text(field, name, layout, ctx, &mut rendered),
        FieldKind::Number => render_number(field, name, layout, ctx, &mut rendered),
        FieldKind::Password | FieldKind::SqlPassword => {
            render_password(field, name, layout, ctx, &mut rendered)
        }
        FieldKind::Options => render_options(field, name, layout, ctx, &mut rendered),
        FieldKind::DateTimeText => {
            render_date_time_text(field, name, layout, ctx, &mut rendered)
        }
        FieldKind::Checkbox => render_checkbox(field, name, ctx, &mut rendered),
        FieldKind::ReadonlyText => render_readonly_text(field, layout, &mut rendered),
    }
    Ok(rendered)
}

fn label(field: &FieldDescriptor, required: bool, layout: &FieldLayout) -> Component {
    Component::Text(TextProperties {
        value: field.label.clone(),
        description: field.description.clone(),
        required_indicator: required,
        width: Some(layout.label_width),
        font_style: "normal".to_string(),
    })
}

/// Widget-level required flag; custom validation replaces it.
fn input_required(field: &FieldDescriptor) -> bool {
    field.required && !field.use_custom_validator
}

fn render_text(
    field: &FieldDescriptor,
    name: &str,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    let input = ctx.view.input_box(InputBoxProperties {
        value: field.default_value.clone(),
        aria_label: field.label.clone(),
        input_type: InputType::Text,
        required: input_required(field),
        placeholder: field.placeholder.clone(),
        width: Some(layout.input_width),
        ..Default::default()
    });
    rendered.register(name, &input);
    rendered.push_pair(
        label(field, field.required, layout),
        Component::Input(input),
        layout.label_position,
    );
}

fn render_number(
    field: &FieldDescriptor,
    name: &str,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    let input = ctx.view.input_box(InputBoxProperties {
        value: field.default_value.clone(),
        aria_label: field.label.clone(),
        input_type: InputType::Number,
        required: input_required(field),
        placeholder: field.placeholder.clone(),
        min: field.min,
        max: field.max,
        width: Some(layout.input_width),
    });
    rendered.register(name, &input);
    rendered.push_pair(
        label(field, field.required, layout),
        Component::Input(input),
        layout.label_position,
    );
}

fn render_date_time_text(
    field: &FieldDescriptor,
    name: &str,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    // Digits of the ISO timestamp down to the second, e.g. 20240131235959.
    let stamp = ctx.clock.now().format("%Y%m%d%H%M%S");
    let value = format!("{}{stamp}", field.default_value.as_deref().unwrap_or_default());
    let input = ctx.view.input_box(InputBoxProperties {
        value: Some(value),
        aria_label: field.label.clone(),
        input_type: InputType::Text,
        required: input_required(field),
        placeholder: field.placeholder.clone(),
        width: Some(layout.input_width),
        ..Default::default()
    });
    rendered.register(name, &input);
    rendered.push_pair(
        label(field, field.required, layout),
        Component::Input(input),
        layout.label_position,
    );
}

fn render_password(
    field: &FieldDescriptor,
    name: &str,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    let password = ctx.view.input_box(InputBoxProperties {
        aria_label: field.label.clone(),
        input_type: InputType::Password,
        required: input_required(field),
        placeholder: field.placeholder.clone(),
        width: Some(layout.input_width),
        ..Default::default()
    });
    rendered.register(name, &password);
    rendered.push_pair(
        label(field, field.required, layout),
        Component::Input(Rc::clone(&password)),
        layout.label_position,
    );

    if field.kind == FieldKind::SqlPassword {
        let message = messages::invalid_sql_password(ctx.localizer, &field.label);
        let user_name = field
            .user_name
            .clone()
            .unwrap_or_else(|| DEFAULT_SQL_USER_NAME.to_string());
        let input = Rc::clone(&password);
        rendered.validators.push(Validator::live(
            move || {
                let valid = is_valid_sql_password(&input.state().text(), &user_name);
                ValidationOutcome::new(valid, message.clone())
            },
            vec![Rc::clone(&password)],
        ));
    }

    if field.confirmation_required {
        let confirm_label = field
            .confirmation_label
            .clone()
            .unwrap_or_else(|| messages::confirm_label(ctx.localizer, &field.label));
        let confirmation = ctx.view.input_box(InputBoxProperties {
            aria_label: confirm_label.clone(),
            input_type: InputType::Password,
            required: !field.use_custom_validator,
            width: Some(layout.input_width),
            ..Default::default()
        });
        rendered.inputs.push(FieldInput {
            handle: Rc::clone(&confirmation),
            role: InputRole::Confirmation,
        });
        rendered.push_pair(
            Component::Text(TextProperties {
                value: confirm_label,
                required_indicator: true,
                width: Some(layout.label_width),
                font_style: "normal".to_string(),
                ..Default::default()
            }),
            Component::Input(Rc::clone(&confirmation)),
            layout.label_position,
        );

        let message = messages::password_mismatch(ctx.localizer, &field.label);
        let (first, second) = (Rc::clone(&password), Rc::clone(&confirmation));
        rendered.validators.push(Validator::live(
            move || {
                let matches = first.state().text() == second.state().text();
                ValidationOutcome::new(matches, message.clone())
            },
            vec![password, confirmation],
        ));
    }
}

fn render_options(
    field: &FieldDescriptor,
    name: &str,
    layout: &FieldLayout,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    let selected = field.default_value.as_deref().map(|default| {
        field
            .options
            .iter()
            .find(|option| option.name() == default || option.display_name() == default)
            .cloned()
            .unwrap_or_else(|| OptionValue::Plain(default.to_string()))
    });
    let dropdown = ctx.view.dropdown(DropdownProperties {
        values: field.options.clone(),
        value: selected,
        width: Some(layout.input_width),
    });
    rendered.register(name, &dropdown);
    rendered.push_pair(
        label(field, false, layout),
        Component::Input(dropdown),
        layout.label_position,
    );
}

fn render_checkbox(
    field: &FieldDescriptor,
    name: &str,
    ctx: &mut RenderContext<'_>,
    rendered: &mut RenderedField,
) {
    let checkbox = ctx.view.checkbox(CheckboxProperties {
        checked: field.default_value.as_deref() == Some("true"),
        label: field.label.clone(),
    });
    rendered.register(name, &checkbox);
    rendered.components.push(Component::Input(checkbox));
}

fn render_readonly_text(field: &FieldDescriptor, layout: &FieldLayout, rendered: &mut RenderedField) {
    let value = Component::Text(TextProperties {
        value: field.default_value.clone().unwrap_or_default(),
        description: None,
        required_indicator: false,
        width: Some(layout.input_width),
        font_style: field
            .font_style
            .clone()
            .unwrap_or_else(|| "normal".to_string()),
    });
    rendered.push_pair(label(field, false, layout), value, layout.label_position);
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use formwright_types::{FixedClock, InputState, InputValue};

    use super::*;
    use crate::test_view::TestView;

    fn layout(position: LabelPosition) -> FieldLayout {
        FieldLayout {
            label_width: 200,
            input_width: 400,
            label_position: position,
        }
    }

    fn render(field: &FieldDescriptor, view: &mut TestView) -> RenderedField {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 58).unwrap());
        let mut ctx = RenderContext::new(view).with_clock(&clock);
        render_field(field, &layout(LabelPosition::Top), &mut ctx).unwrap()
    }

    fn registered(rendered: &RenderedField) -> Vec<&str> {
        rendered
            .inputs
            .iter()
            .filter_map(|input| match &input.role {
                InputRole::Value(name) => Some(name.as_str()),
                InputRole::Confirmation => None,
            })
            .collect()
    }

    #[test]
    fn text_field_is_label_then_input() {
        let mut view = TestView::new();
        let field = FieldDescriptor::text("name", "Name")
            .with_required(true)
            .with_default("sql2019");
        let rendered = render(&field, &mut view);

        assert_eq!(rendered.components.len(), 2);
        assert_eq!(rendered.components[0].as_text().unwrap().value, "Name");
        assert!(rendered.components[0].as_text().unwrap().required_indicator);
        let input = rendered.components[1].as_input().unwrap();
        assert_eq!(
            input.state(),
            InputState::Value(Some(InputValue::Text("sql2019".to_string())))
        );
        assert!(input.required());
        assert_eq!(registered(&rendered), ["name"]);
        assert!(rendered.validators.is_empty());
    }

    #[test]
    fn left_labels_share_a_row() {
        let mut view = TestView::new();
        let field = FieldDescriptor::text("name", "Name");
        let mut ctx = RenderContext::new(&mut view);
        let rendered = render_field(&field, &layout(LabelPosition::Left), &mut ctx).unwrap();

        assert_eq!(rendered.components.len(), 1);
        assert!(rendered.components[0].is_row());
        assert_eq!(rendered.components[0].children().len(), 2);
    }

    #[test]
    fn custom_validator_drops_the_required_flag() {
        let mut view = TestView::new();
        let field = FieldDescriptor::number("port", "Port")
            .with_required(true)
            .with_custom_validator()
            .with_bounds(Some(1.0), Some(65535.0));
        render(&field, &mut view);

        let props = view.input_box_properties("input-0").unwrap();
        assert!(!props.required);
        assert_eq!(props.input_type, InputType::Number);
        assert_eq!((props.min, props.max), (Some(1.0), Some(65535.0)));
    }

    #[test]
    fn date_time_text_appends_a_timestamp() {
        let mut view = TestView::new();
        let field = FieldDescriptor::date_time_text("cluster", "Cluster name").with_default("mssql-");
        let rendered = render(&field, &mut view);

        let input = rendered.components[1].as_input().unwrap();
        assert_eq!(input.state().text(), "mssql-20240131235958");
    }

    #[test]
    fn plain_password_has_no_validator() {
        let mut view = TestView::new();
        let rendered = render(&FieldDescriptor::password("pw", "Password"), &mut view);
        assert_eq!(registered(&rendered), ["pw"]);
        assert!(rendered.validators.is_empty());
    }

    #[test]
    fn confirmation_adds_a_second_input_and_one_validator() {
        let mut view = TestView::new();
        let field = FieldDescriptor::password("pw", "Password").with_confirmation("Confirm password");
        let rendered = render(&field, &mut view);

        assert_eq!(rendered.inputs.len(), 2);
        assert_eq!(rendered.inputs[1].role, InputRole::Confirmation);
        assert_eq!(registered(&rendered), ["pw"]);
        assert_eq!(rendered.validators.len(), 1);

        let validator = &rendered.validators[0];
        assert!(validator.check().valid);
        view.set_text("input-0", "Secret#1");
        assert!(!validator.check().valid);
        assert_eq!(
            validator.check().message,
            "Password doesn't match the confirmation password"
        );
        view.set_text("input-1", "Secret#1");
        assert!(validator.check().valid);
        assert_eq!(validator.watches().len(), 2);
    }

    #[test]
    fn sql_password_checks_complexity_against_the_user_name() {
        let mut view = TestView::new();
        let field = FieldDescriptor::sql_password("pw", "Admin password").with_user_name("admin");
        let rendered = render(&field, &mut view);

        assert_eq!(rendered.validators.len(), 1);
        let validator = &rendered.validators[0];
        view.set_text("input-0", "Admin#2024");
        assert!(!validator.check().valid);
        assert!(
            validator
                .check()
                .message
                .starts_with("Admin password doesn't meet the password complexity requirement")
        );
        view.set_text("input-0", "Sup3r#Secret");
        assert!(validator.check().valid);
    }

    #[test]
    fn options_select_by_name_or_display_text() {
        let mut view = TestView::new();
        let field = FieldDescriptor::options(
            "auth",
            "Authentication",
            [
                OptionValue::from(formwright_types::CategoryValue::new("basic", "Basic")),
                OptionValue::from(formwright_types::CategoryValue::new(
                    "integrated",
                    "Windows Authentication",
                )),
            ],
        )
        .with_default("Windows Authentication");
        let rendered = render(&field, &mut view);

        let dropdown = rendered.components[1].as_input().unwrap();
        assert_eq!(dropdown.state().text(), "integrated");
        assert!(!rendered.components[0].as_text().unwrap().required_indicator);
    }

    #[test]
    fn checkbox_is_its_own_component() {
        let mut view = TestView::new();
        let field = FieldDescriptor::checkbox("eula", "Accept the license").with_default("true");
        let rendered = render(&field, &mut view);

        assert_eq!(rendered.components.len(), 1);
        assert_eq!(
            rendered.components[0].as_input().unwrap().state(),
            InputState::Checked(true)
        );
        assert_eq!(registered(&rendered), ["eula"]);
    }

    #[test]
    fn readonly_text_registers_nothing() {
        let mut view = TestView::new();
        let field = FieldDescriptor::readonly_text("Edition", "Developer").with_font_style("italic");
        let rendered = render(&field, &mut view);

        assert!(rendered.inputs.is_empty());
        assert!(rendered.validators.is_empty());
        let value = rendered.components[1].as_text().unwrap();
        assert_eq!(value.value, "Developer");
        assert_eq!(value.font_style, "italic");
        assert_eq!(value.width, Some(400));
    }

    #[test]
    fn only_input_kinds_need_a_variable_name() {
        for kind in FieldKind::ALL {
            let mut view = TestView::new();
            let mut field = FieldDescriptor::new(kind, "", "Label");
            field.variable_name = None;
            let mut ctx = RenderContext::new(&mut view);
            let result = render_field(&field, &layout(LabelPosition::Top), &mut ctx);
            assert_eq!(result.is_err(), kind.has_input(), "{kind}");
        }
    }

    #[test]
    fn missing_variable_name_is_a_configuration_error() {
        let mut view = TestView::new();
        let mut field = FieldDescriptor::text("", "Name");
        field.variable_name = None;
        let mut ctx = RenderContext::new(&mut view);
        let err = render_field(&field, &layout(LabelPosition::Top), &mut ctx).unwrap_err();
        assert!(matches!(err, FormError::MissingVariableName { kind: FieldKind::Text, .. }));
    }

    #[test]
    fn confirmation_on_text_is_rejected() {
        let mut view = TestView::new();
        let field = FieldDescriptor::text("name", "Name").with_confirmation("Again");
        let mut ctx = RenderContext::new(&mut view);
        let err = render_field(&field, &layout(LabelPosition::Top), &mut ctx).unwrap_err();
        assert!(matches!(err, FormError::ConfirmationNotSupported { .. }));
    }
}
