//! Section composer: lowers a [`SectionDescriptor`] into a group component.

use formwright_types::{
    Component, FieldDescriptor, FormError, GroupContainer, SectionDescriptor, Widths,
};
use tracing::debug;

use crate::{
    context::{FieldLayout, RenderContext},
    field::{FieldInput, RenderedField, render_field},
    validation::Validator,
};

/// A rendered section: one group component plus everything its fields created.
#[derive(Debug)]
pub struct RenderedSection {
    pub component: Component,
    pub inputs: Vec<FieldInput>,
    pub validators: Vec<Validator>,
}

/// Render a section.
///
/// Widths cascade field → section → `inherited` → context defaults. Flat
/// sections list their fields in order; row sections put each row into a row
/// container, with spacers between neighbouring fields.
pub fn render_section(
    section: &SectionDescriptor,
    inherited: Widths,
    ctx: &mut RenderContext<'_>,
) -> Result<RenderedSection, FormError> {
    let section_widths = Widths {
        label_width: section.label_width.or(inherited.label_width),
        input_width: section.input_width.or(inherited.input_width),
    };
    debug!(title = ?section.title, "rendering section");

    let mut items = Vec::new();
    let mut inputs = Vec::new();
    let mut validators = Vec::new();
    let mut collect = |rendered: RenderedField, into: &mut Vec<Component>| {
        into.extend(rendered.components);
        inputs.extend(rendered.inputs);
        validators.extend(rendered.validators);
    };

    if let Some(fields) = &section.fields {
        for field in fields {
            let layout = field_layout(field, section, section_widths, ctx);
            collect(render_field(field, &layout, ctx)?, &mut items);
        }
    } else if let Some(rows) = &section.rows {
        let spacing = section
            .space_between_fields
            .unwrap_or(ctx.defaults.space_between_fields);
        for row in rows {
            let mut row_items = Vec::new();
            for (idx, field) in row.fields.iter().enumerate() {
                let layout = field_layout(field, section, section_widths, ctx);
                collect(render_field(field, &layout, ctx)?, &mut row_items);
                if idx + 1 < row.fields.len() {
                    row_items.push(Component::Spacer { width: spacing });
                }
            }
            items.push(Component::row(row_items));
        }
    }

    Ok(RenderedSection {
        component: Component::Group(GroupContainer {
            header: section.title.clone(),
            collapsible: section.collapsible.unwrap_or(true),
            collapsed: section.collapsed.unwrap_or(false),
            items,
        }),
        inputs,
        validators,
    })
}

fn field_layout(
    field: &FieldDescriptor,
    section: &SectionDescriptor,
    section_widths: Widths,
    ctx: &RenderContext<'_>,
) -> FieldLayout {
    FieldLayout {
        label_width: field
            .label_width
            .or(section_widths.label_width)
            .unwrap_or(ctx.defaults.label_width),
        input_width: field
            .input_width
            .or(section_widths.input_width)
            .unwrap_or(ctx.defaults.input_width),
        label_position: field
            .label_position
            .or(section.label_position)
            .unwrap_or_default(),
    }
}
