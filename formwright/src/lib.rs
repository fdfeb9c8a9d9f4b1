//! # formwright
//!
//! Render declarative form descriptors into dialogs and wizard pages.
//! Toolkit-agnostic.
//!
//! A dialog is described as tabs of sections of fields. The renderer asks a
//! [`ViewBuilder`] for the interactive inputs and returns everything else as a
//! [`Component`] tree for the host to draw. Validators run when the user tries
//! to close the dialog; their messages are shown on the [`DialogSurface`] and
//! cleared live once the offending input is fixed. After a successful close,
//! [`Form::to_model`] collects every input's value under its variable name.
//!
//! ## Usage
//!
//! ```rust
//! use std::rc::Rc;
//!
//! use formwright::{
//!     DialogDescriptor, DialogSurface, RenderContext, TestDialog, TestView, initialize_dialog,
//! };
//!
//! let dialog = DialogDescriptor::from_json(
//!     r#"{
//!         "title": "Deploy SQL Server container",
//!         "name": "sql-container",
//!         "tabs": [{
//!             "title": "General",
//!             "sections": [{
//!                 "title": "Credentials",
//!                 "fields": [
//!                     { "type": "sql_password", "label": "Password",
//!                       "variableName": "sa_password", "confirmationRequired": true },
//!                     { "type": "number", "label": "Port",
//!                       "variableName": "port", "defaultValue": "1433" }
//!                 ]
//!             }]
//!         }]
//!     }"#,
//! )
//! .unwrap();
//!
//! let mut view = TestView::new();
//! let test_dialog = TestDialog::new();
//! let surface: Rc<dyn DialogSurface> = test_dialog.clone();
//! let form = initialize_dialog(&dialog, &mut RenderContext::new(&mut view), &surface).unwrap();
//!
//! view.set_text("input-0", "Str0ng!Passw0rd");
//! view.set_text("input-1", "Str0ng!Passw0rd");
//! assert!(test_dialog.attempt_close());
//!
//! let model = form.to_model().unwrap();
//! assert_eq!(model.get("sa_password"), Some("Str0ng!Passw0rd"));
//! assert_eq!(model.get("port"), Some("1433"));
//! ```
//!
//! ## Field kinds
//! - `text`, `number`, `password` - input boxes
//! - `sql_password` - password box checked against SQL Server's complexity policy
//! - `options` - dropdown over plain strings or named categories
//! - `datetime_text` - text box prefilled with `<default><YYYYMMDDHHMMSS>`
//! - `checkbox` - a checkbox carrying its own label
//! - `readonly_text` - a label and a static value

pub use formwright_types::*;

mod completion;
mod context;
mod dialog;
mod extract;
mod field;
mod form;
mod inputs;
pub mod messages;
mod password;
mod section;
mod test_view;
mod validation;

pub use completion::{CancelFlag, CompletionError, CompletionOutcome, complete};
pub use context::{FieldLayout, RenderContext};
pub use dialog::{initialize_dialog, initialize_wizard_page};
pub use extract::extract_values;
pub use field::{FieldInput, InputRole, RenderedField, render_field};
pub use form::{Form, RenderedForm, render};
pub use inputs::InputRegistry;
pub use password::{DEFAULT_SQL_USER_NAME, is_valid_sql_password};
pub use section::{RenderedSection, render_section};
pub use test_view::{TestDialog, TestInput, TestInputKind, TestView};
pub use validation::{
    FailureBoard, ValidationOutcome, ValidationSession, Validator, ValidatorId, ValidatorRegistry,
};
