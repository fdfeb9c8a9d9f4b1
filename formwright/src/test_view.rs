//! In-memory view builder and dialog for driving forms without a UI toolkit.
//!
//! `TestView` creates [`TestInput`]s that hold their value in memory and fire
//! change listeners when a test edits them. `TestDialog` records content and
//! messages and lets a test simulate the user pressing OK.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use formwright::{
//!     DialogSurface, FieldDescriptor, RenderContext, SectionDescriptor, TestDialog, TestView,
//!     WizardPageDescriptor, initialize_wizard_page,
//! };
//!
//! let page = WizardPageDescriptor::new(
//!     "Settings",
//!     vec![SectionDescriptor::with_fields(
//!         "Server",
//!         vec![FieldDescriptor::text("host", "Host").with_default("localhost")],
//!     )],
//! );
//! let mut view = TestView::new();
//! let dialog = TestDialog::new();
//! let surface: Rc<dyn DialogSurface> = dialog.clone();
//! let form = initialize_wizard_page(&page, &mut RenderContext::new(&mut view), &surface).unwrap();
//!
//! assert!(dialog.attempt_close());
//! assert_eq!(form.to_model().unwrap().get("host"), Some("localhost"));
//! ```

use std::{
    cell::{Cell, Ref, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use formwright_types::{
    ChangeListener, CheckboxProperties, CloseValidator, DialogMessage, DialogSurface, Disposable,
    DropdownProperties, InputBoxProperties, InputComponent, InputHandle, InputState, InputValue,
    OptionValue, RenderedTab, ViewBuilder,
};

/// The properties a [`TestInput`] was created with.
#[derive(Debug, Clone, PartialEq)]
pub enum TestInputKind {
    InputBox(InputBoxProperties),
    Dropdown(DropdownProperties),
    Checkbox(CheckboxProperties),
    /// Exposes neither a value nor a checked state.
    Opaque,
}

type Listeners = Rc<RefCell<Vec<(usize, ChangeListener)>>>;

/// An input that keeps its state in memory.
pub struct TestInput {
    id: String,
    kind: TestInputKind,
    state: RefCell<InputState>,
    listeners: Listeners,
    next_listener: Cell<usize>,
}

impl TestInput {
    fn new(id: String, kind: TestInputKind) -> Rc<Self> {
        let state = match &kind {
            TestInputKind::InputBox(props) => {
                InputState::Value(props.value.clone().map(InputValue::Text))
            }
            TestInputKind::Dropdown(props) => {
                InputState::Value(props.value.clone().map(option_to_value))
            }
            TestInputKind::Checkbox(props) => InputState::Checked(props.checked),
            TestInputKind::Opaque => InputState::Opaque,
        };
        Rc::new(Self {
            id,
            kind,
            state: RefCell::new(state),
            listeners: Rc::default(),
            next_listener: Cell::new(0),
        })
    }

    /// An input that cannot be read, for exercising reader errors.
    pub fn opaque(id: impl Into<String>) -> Rc<Self> {
        Self::new(id.into(), TestInputKind::Opaque)
    }

    pub fn kind(&self) -> &TestInputKind {
        &self.kind
    }

    /// Type into the input, notifying listeners.
    pub fn set_text(&self, text: impl Into<String>) {
        self.set_state(InputState::Value(Some(InputValue::Text(text.into()))));
    }

    /// Select a dropdown option, notifying listeners.
    pub fn select(&self, option: impl Into<OptionValue>) {
        self.set_state(InputState::Value(Some(option_to_value(option.into()))));
    }

    /// Empty the input, notifying listeners.
    pub fn clear(&self) {
        self.set_state(InputState::Value(None));
    }

    /// Tick or untick a checkbox, notifying listeners.
    pub fn set_checked(&self, checked: bool) {
        self.set_state(InputState::Checked(checked));
    }

    /// Number of active change subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn set_state(&self, state: InputState) {
        *self.state.borrow_mut() = state;
        // Listeners may subscribe or dispose while running.
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener();
        }
    }
}

impl fmt::Debug for TestInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestInput")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("state", &self.state.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

fn option_to_value(option: OptionValue) -> InputValue {
    match option {
        OptionValue::Plain(s) => InputValue::Text(s),
        OptionValue::Category(c) => InputValue::Category(c),
    }
}

impl InputComponent for TestInput {
    fn id(&self) -> &str {
        &self.id
    }

    fn state(&self) -> InputState {
        self.state.borrow().clone()
    }

    fn required(&self) -> bool {
        matches!(&self.kind, TestInputKind::InputBox(props) if props.required)
    }

    fn on_changed(&self, listener: ChangeListener) -> Disposable {
        let key = self.next_listener.get();
        self.next_listener.set(key + 1);
        self.listeners.borrow_mut().push((key, listener));

        let listeners: Weak<RefCell<Vec<(usize, ChangeListener)>>> = Rc::downgrade(&self.listeners);
        Disposable::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(k, _)| *k != key);
            }
        })
    }
}

/// A view builder that creates [`TestInput`]s with ids `input-0`, `input-1`, ...
#[derive(Debug, Default)]
pub struct TestView {
    inputs: Vec<Rc<TestInput>>,
}

impl TestView {
    pub fn new() -> Self {
        Self::default()
    }

    /// All inputs in creation order.
    pub fn inputs(&self) -> &[Rc<TestInput>] {
        &self.inputs
    }

    pub fn input(&self, id: &str) -> Option<&Rc<TestInput>> {
        self.inputs.iter().find(|input| input.id == id)
    }

    /// The properties an input box was created with.
    pub fn input_box_properties(&self, id: &str) -> Option<InputBoxProperties> {
        match self.input(id)?.kind() {
            TestInputKind::InputBox(props) => Some(props.clone()),
            _ => None,
        }
    }

    /// Type into the input with the given id.
    ///
    /// # Panics
    /// If there is no such input.
    pub fn set_text(&self, id: &str, text: impl Into<String>) {
        self.expect_input(id).set_text(text);
    }

    fn expect_input(&self, id: &str) -> &Rc<TestInput> {
        self.input(id)
            .unwrap_or_else(|| panic!("TestView has no input with id '{id}'"))
    }

    fn create(&mut self, kind: TestInputKind) -> InputHandle {
        let input = TestInput::new(format!("input-{}", self.inputs.len()), kind);
        self.inputs.push(Rc::clone(&input));
        input
    }
}

impl ViewBuilder for TestView {
    fn input_box(&mut self, props: InputBoxProperties) -> InputHandle {
        self.create(TestInputKind::InputBox(props))
    }

    fn dropdown(&mut self, props: DropdownProperties) -> InputHandle {
        self.create(TestInputKind::Dropdown(props))
    }

    fn checkbox(&mut self, props: CheckboxProperties) -> InputHandle {
        self.create(TestInputKind::Checkbox(props))
    }
}

/// A dialog that records what the form puts on it.
#[derive(Default)]
pub struct TestDialog {
    content: RefCell<Vec<RenderedTab>>,
    message: RefCell<DialogMessage>,
    close_validators: RefCell<Vec<CloseValidator>>,
    ok_label: RefCell<Option<String>>,
}

impl TestDialog {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Simulate pressing OK: every close validator runs, the dialog closes
    /// only if all pass.
    pub fn attempt_close(&self) -> bool {
        self.close_validators
            .borrow()
            .iter()
            .fold(true, |passed, validator| validator() && passed)
    }

    pub fn message(&self) -> DialogMessage {
        self.message.borrow().clone()
    }

    pub fn content(&self) -> Ref<'_, Vec<RenderedTab>> {
        self.content.borrow()
    }

    pub fn tab_titles(&self) -> Vec<String> {
        self.content.borrow().iter().map(|tab| tab.title.clone()).collect()
    }

    pub fn ok_label(&self) -> Option<String> {
        self.ok_label.borrow().clone()
    }
}

impl DialogSurface for TestDialog {
    fn set_content(&self, tabs: Vec<RenderedTab>) {
        *self.content.borrow_mut() = tabs;
    }

    fn set_message(&self, message: DialogMessage) {
        *self.message.borrow_mut() = message;
    }

    fn register_close_validator(&self, validator: CloseValidator) {
        self.close_validators.borrow_mut().push(validator);
    }

    fn set_ok_label(&self, label: &str) {
        *self.ok_label.borrow_mut() = Some(label.to_string());
    }
}
