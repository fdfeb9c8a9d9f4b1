//! Dialog and wizard page initialization.

use std::rc::Rc;

use formwright_types::{DialogDescriptor, DialogSurface, FormError, Widths, WizardPageDescriptor};
use tracing::debug;

use crate::{
    context::RenderContext,
    form::{Form, render},
};

/// Render every tab of `dialog`, show them on `surface` and validate on close.
///
/// The returned [`Form`] owns the input registry and listener subscriptions;
/// keep it alive for as long as the dialog is open.
pub fn initialize_dialog(
    dialog: &DialogDescriptor,
    ctx: &mut RenderContext<'_>,
    surface: &Rc<dyn DialogSurface>,
) -> Result<Form, FormError> {
    debug!(name = %dialog.name, tabs = dialog.tabs.len(), "initializing dialog");
    let mut tabs = Vec::with_capacity(dialog.tabs.len());
    for tab in &dialog.tabs {
        let rendered = render(&tab.sections, tab.widths(), ctx)?;
        tabs.push((tab.title.clone(), rendered));
    }
    let form = Form::assemble(tabs)?;
    if let Some(label) = &dialog.ok_label {
        surface.set_ok_label(label);
    }
    show(&form, surface);
    Ok(form)
}

/// Render one wizard page as a single tab titled after the page.
pub fn initialize_wizard_page(
    page: &WizardPageDescriptor,
    ctx: &mut RenderContext<'_>,
    surface: &Rc<dyn DialogSurface>,
) -> Result<Form, FormError> {
    debug!(title = %page.title, "initializing wizard page");
    let rendered = render(&page.sections, Widths::default(), ctx)?;
    let form = Form::assemble([(page.title.clone(), rendered)])?;
    show(&form, surface);
    Ok(form)
}

fn show(form: &Form, surface: &Rc<dyn DialogSurface>) {
    surface.set_content(form.tabs().to_vec());
    form.attach(surface);
}

#[cfg(test)]
mod tests {
    use formwright_types::{FieldDescriptor, SectionDescriptor, TabDescriptor};

    use super::*;
    use crate::test_view::{TestDialog, TestView};

    fn dialog() -> DialogDescriptor {
        let mut general = TabDescriptor::new(
            "General",
            vec![SectionDescriptor::with_fields(
                "Server",
                vec![FieldDescriptor::text("host", "Host").with_default("localhost")],
            )],
        );
        general.label_width = Some(120);
        DialogDescriptor::new(
            "Deploy",
            "deploy-dialog",
            vec![
                general,
                TabDescriptor::new(
                    "Security",
                    vec![SectionDescriptor::with_fields(
                        "Credentials",
                        vec![FieldDescriptor::sql_password("pw", "Password")],
                    )],
                ),
            ],
        )
        .with_ok_label("Deploy")
    }

    #[test]
    fn one_tab_per_descriptor() {
        let mut view = TestView::new();
        let dialog_surface = TestDialog::new();
        let surface: Rc<dyn DialogSurface> = dialog_surface.clone();
        let form =
            initialize_dialog(&dialog(), &mut RenderContext::new(&mut view), &surface).unwrap();

        assert_eq!(dialog_surface.tab_titles(), ["General", "Security"]);
        assert_eq!(dialog_surface.ok_label().as_deref(), Some("Deploy"));
        assert_eq!(form.tabs().len(), 2);
        let content = dialog_surface.content();
        let section = &content[0].content.children()[0];
        let label = &section.as_group().unwrap().items[0];
        assert_eq!(label.as_text().unwrap().width, Some(120));
    }

    #[test]
    fn close_validator_is_registered() {
        let mut view = TestView::new();
        let dialog_surface = TestDialog::new();
        let surface: Rc<dyn DialogSurface> = dialog_surface.clone();
        let _form =
            initialize_dialog(&dialog(), &mut RenderContext::new(&mut view), &surface).unwrap();

        view.set_text("input-1", "short");
        assert!(!dialog_surface.attempt_close());
        assert!(dialog_surface.message().text.starts_with("Password doesn't meet"));

        view.set_text("input-1", "Str0ng!Passw0rd");
        assert!(dialog_surface.message().is_empty());
        assert!(dialog_surface.attempt_close());
    }

    #[test]
    fn wizard_page_is_a_single_tab() {
        let page = WizardPageDescriptor::new(
            "Target",
            vec![SectionDescriptor::with_fields(
                "Cluster",
                vec![FieldDescriptor::text("cluster", "Cluster name").with_required(true)],
            )],
        );
        let mut view = TestView::new();
        let dialog_surface = TestDialog::new();
        let surface: Rc<dyn DialogSurface> = dialog_surface.clone();
        let form =
            initialize_wizard_page(&page, &mut RenderContext::new(&mut view), &surface).unwrap();

        assert_eq!(dialog_surface.tab_titles(), ["Target"]);
        assert_eq!(form.missing_required(), ["cluster"]);
    }
}
