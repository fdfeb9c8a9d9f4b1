//! Core types for the formwright crate.
//!
//! This crate provides the foundational, presentation-agnostic types for
//! declaring forms:
//! - `FieldDescriptor` and `FieldKind` - One input unit and its kind
//! - `SectionDescriptor`, `TabDescriptor`, `DialogDescriptor` - Grouping of fields
//! - `Component` - The backend-neutral tree produced by rendering
//! - `InputComponent` and `InputHandle` - Live inputs created by a view builder
//! - `Model` - The key/value result of a completed form
//! - `ViewBuilder`, `DialogSurface`, `Localizer`, `Clock` - Seams to the host

mod field;
pub use field::{CategoryValue, FieldDescriptor, FieldKind, LabelPosition, OptionValue};

mod section;
pub use section::{
    DialogDescriptor, LayoutDefaults, RowDescriptor, SectionDescriptor, TabDescriptor, Widths,
    WizardPageDescriptor,
};

mod component;
pub use component::{
    CheckboxProperties, Component, DropdownProperties, FlexContainer, FlexFlow, FormContainer,
    GroupContainer, InputBoxProperties, InputType, RenderedTab, TextProperties,
};

mod input;
pub use input::{ChangeListener, Disposable, InputComponent, InputHandle, InputState, InputValue};

mod model;
pub use model::Model;

mod clock;
pub use clock::{Clock, FixedClock, SystemClock};

mod error;
pub use error::FormError;

mod traits;
pub use traits::{
    CloseValidator, DefaultLocalizer, DialogMessage, DialogSurface, Localizer, MessageLevel,
    ViewBuilder,
};
