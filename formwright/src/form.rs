//! Form assembler: sections into a single-column form, plus the state that
//! lives as long as the dialog.

use std::{collections::BTreeSet, rc::Rc};

use formwright_types::{
    Component, DialogSurface, Disposable, FormContainer, FormError, Localizer, Model, RenderedTab,
    SectionDescriptor, Widths,
};
use tracing::debug;

use crate::{
    context::RenderContext,
    extract::extract_values,
    field::{FieldInput, InputRole},
    inputs::InputRegistry,
    messages,
    section::render_section,
    validation::{FailureBoard, ValidationOutcome, ValidationSession, Validator, ValidatorId},
};

/// A rendered single-column form and everything its fields created.
#[derive(Debug)]
pub struct RenderedForm {
    pub component: Component,
    pub inputs: Vec<FieldInput>,
    pub validators: Vec<Validator>,
}

/// Render sections into one form container.
///
/// Fails if two fields share a variable name.
pub fn render(
    sections: &[SectionDescriptor],
    inherited: Widths,
    ctx: &mut RenderContext<'_>,
) -> Result<RenderedForm, FormError> {
    let mut items = Vec::with_capacity(sections.len());
    let mut inputs = Vec::new();
    let mut validators = Vec::new();
    let mut names = BTreeSet::new();
    for section in sections {
        let rendered = render_section(section, inherited, ctx)?;
        for input in &rendered.inputs {
            if let InputRole::Value(name) = &input.role {
                if !names.insert(name.clone()) {
                    return Err(FormError::DuplicateVariableName(name.clone()));
                }
            }
        }
        items.push(rendered.component);
        inputs.extend(rendered.inputs);
        validators.extend(rendered.validators);
    }
    Ok(RenderedForm {
        component: Component::Form(FormContainer { items }),
        inputs,
        validators,
    })
}

/// A live form: its tabs, registered inputs, validators and listener
/// subscriptions.
///
/// Dropping the form (or calling [`Form::dispose`]) releases every
/// subscription it holds.
#[derive(Debug)]
pub struct Form {
    tabs: Vec<RenderedTab>,
    inputs: InputRegistry,
    session: Rc<ValidationSession>,
    disposables: Vec<Disposable>,
}

impl Form {
    /// Assemble rendered tabs into a form.
    ///
    /// Fails if two fields share a variable name.
    pub fn assemble(
        tabs: impl IntoIterator<Item = (String, RenderedForm)>,
    ) -> Result<Self, FormError> {
        let mut form = Self {
            tabs: Vec::new(),
            inputs: InputRegistry::new(),
            session: ValidationSession::new(),
            disposables: Vec::new(),
        };
        for (title, rendered) in tabs {
            for input in rendered.inputs {
                if let InputRole::Value(name) = input.role {
                    form.inputs.insert(name, input.handle)?;
                }
            }
            for validator in rendered.validators {
                form.add_validator(validator);
            }
            form.tabs.push(RenderedTab {
                title,
                content: rendered.component,
            });
        }
        debug!(
            tabs = form.tabs.len(),
            inputs = form.inputs.len(),
            validators = form.session.validator_count(),
            "assembled form"
        );
        Ok(form)
    }

    /// Publish validation messages to `surface` and run validation whenever it
    /// is about to close.
    pub fn attach(&self, surface: &Rc<dyn DialogSurface>) {
        self.session.attach(surface);
        let session = Rc::clone(&self.session);
        surface.register_close_validator(Box::new(move || session.attempt_close()));
    }

    /// Register an additional validator, e.g. one supplied by the host.
    pub fn add_validator(&mut self, validator: Validator) -> ValidatorId {
        let (id, disposables) = self.session.add(validator);
        self.disposables.extend(disposables);
        id
    }

    /// Run all validators, as on a close attempt. Returns whether all passed.
    pub fn validate(&self) -> bool {
        self.session.attempt_close()
    }

    /// Messages currently shown for failed validators.
    pub fn failures(&self) -> FailureBoard {
        self.session.board()
    }

    pub fn tabs(&self) -> &[RenderedTab] {
        &self.tabs
    }

    pub fn inputs(&self) -> &InputRegistry {
        &self.inputs
    }

    /// Variable names of required inputs that are still empty.
    pub fn missing_required(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .filter(|(name, input)| input.required() && self.inputs.is_empty_input(name))
            .map(|(name, _)| name)
            .collect()
    }

    /// A validator that fails while any required input is empty.
    pub fn required_fields_validator(&self, localizer: &dyn Localizer) -> Validator {
        let inputs = self.inputs.clone();
        let message = messages::missing_required_information(localizer);
        Validator::new(move || {
            let complete = inputs
                .iter()
                .all(|(name, input)| !input.required() || !inputs.is_empty_input(name));
            ValidationOutcome::new(complete, message.clone())
        })
    }

    /// Write every input's value into `model`.
    pub fn extract(&self, model: &mut Model) -> Result<(), FormError> {
        extract_values(&self.inputs, model)
    }

    pub fn to_model(&self) -> Result<Model, FormError> {
        let mut model = Model::new();
        self.extract(&mut model)?;
        Ok(model)
    }

    /// Release all listener subscriptions.
    pub fn dispose(self) {
        debug!(subscriptions = self.disposables.len(), "disposing form");
    }

    /// Number of live listener subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.disposables.len()
    }
}

#[cfg(test)]
mod tests {
    use formwright_types::{DefaultLocalizer, FieldDescriptor};

    use super::*;
    use crate::test_view::TestView;

    fn sections() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::with_fields(
                "Account",
                vec![
                    FieldDescriptor::text("user", "User").with_required(true),
                    FieldDescriptor::password("pw", "Password").with_confirmation("Confirm"),
                ],
            ),
            SectionDescriptor::with_fields(
                "Options",
                vec![FieldDescriptor::checkbox("remember", "Remember me")],
            ),
        ]
    }

    #[test]
    fn render_wraps_sections_in_one_form() {
        let mut view = TestView::new();
        let rendered = render(&sections(), Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap();

        assert_eq!(rendered.component.children().len(), 2);
        assert_eq!(rendered.inputs.len(), 4);
        assert_eq!(rendered.validators.len(), 1);
        assert_eq!(rendered.component.inputs().len(), 4);
    }

    #[test]
    fn render_rejects_duplicate_variable_names() {
        let mut view = TestView::new();
        let sections = vec![
            SectionDescriptor::with_fields(
                "First",
                vec![FieldDescriptor::text("name", "Name").with_default("first")],
            ),
            SectionDescriptor::with_fields(
                "Second",
                vec![FieldDescriptor::text("name", "Also name").with_default("second")],
            ),
        ];
        let err = render(&sections, Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap_err();
        assert!(matches!(err, FormError::DuplicateVariableName(name) if name == "name"));
    }

    #[test]
    fn assemble_rejects_names_repeated_across_tabs() {
        let mut view = TestView::new();
        let mut ctx = RenderContext::new(&mut view);
        let general = render(
            &[SectionDescriptor::with_fields("A", vec![FieldDescriptor::text("name", "Name")])],
            Widths::default(),
            &mut ctx,
        )
        .unwrap();
        let advanced = render(
            &[SectionDescriptor::with_fields("B", vec![FieldDescriptor::number("name", "Name")])],
            Widths::default(),
            &mut ctx,
        )
        .unwrap();
        let err = Form::assemble([
            ("General".to_string(), general),
            ("Advanced".to_string(), advanced),
        ])
        .unwrap_err();
        assert!(matches!(err, FormError::DuplicateVariableName(name) if name == "name"));
    }

    #[test]
    fn confirmation_input_is_not_registered() {
        let mut view = TestView::new();
        let rendered = render(&sections(), Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap();
        let form = Form::assemble([("Tab".to_string(), rendered)]).unwrap();

        let names: Vec<_> = form.inputs().names().collect();
        assert_eq!(names, ["pw", "remember", "user"]);
        assert_eq!(form.subscription_count(), 2);
    }

    #[test]
    fn missing_required_lists_empty_required_inputs() {
        let mut view = TestView::new();
        let rendered = render(&sections(), Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap();
        let mut form = Form::assemble([("Tab".to_string(), rendered)]).unwrap();
        assert_eq!(form.missing_required(), ["user"]);

        form.add_validator(form.required_fields_validator(&DefaultLocalizer));
        assert!(!form.validate());
        assert_eq!(
            form.failures().text(),
            "Please fill out the required fields marked with red asterisks."
        );

        view.set_text("input-0", "admin");
        assert!(form.missing_required().is_empty());
        assert!(form.validate());
        assert!(form.failures().is_empty());
    }

    #[test]
    fn dispose_releases_subscriptions() {
        let mut view = TestView::new();
        let rendered = render(&sections(), Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap();
        let form = Form::assemble([("Tab".to_string(), rendered)]).unwrap();
        assert_eq!(view.inputs()[1].listener_count(), 1);
        assert_eq!(view.inputs()[2].listener_count(), 1);

        form.dispose();
        assert!(view.inputs().iter().all(|input| input.listener_count() == 0));
    }

    #[test]
    fn host_validators_run_after_field_validators() {
        let mut view = TestView::new();
        let rendered = render(&sections(), Widths::default(), &mut RenderContext::new(&mut view))
            .unwrap();
        let mut form = Form::assemble([("Tab".to_string(), rendered)]).unwrap();
        form.add_validator(Validator::new(|| ValidationOutcome::new(false, "host check")));

        view.set_text("input-1", "a");
        assert!(!form.validate());
        assert_eq!(
            form.failures().text(),
            "Password doesn't match the confirmation password\nhost check"
        );
    }
}
