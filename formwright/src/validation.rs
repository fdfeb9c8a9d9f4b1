//! Close-time validation and live feedback.
//!
//! Validators accumulate in registration order. Every close attempt runs all
//! of them and records the failing ones on a [`FailureBoard`], keyed by
//! [`ValidatorId`]. The dialog shows the board's messages joined by line breaks.
//!
//! Validators created with [`Validator::live`] also watch some inputs: when a
//! watched input changes, only that validator runs again, and its message is
//! taken off the board if it passes now. Live feedback never puts a message
//! back; that only happens on the next close attempt.

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fmt,
    rc::{Rc, Weak},
};

use formwright_types::{DialogMessage, DialogSurface, Disposable, InputHandle};
use tracing::{debug, trace, warn};

/// Result of running one validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub valid: bool,
    pub message: String,
}

impl ValidationOutcome {
    pub fn new(valid: bool, message: impl Into<String>) -> Self {
        Self {
            valid,
            message: message.into(),
        }
    }
}

/// A deferred check, run at close time.
#[derive(Clone)]
pub struct Validator {
    check: Rc<dyn Fn() -> ValidationOutcome>,
    watches: Vec<InputHandle>,
}

impl Validator {
    pub fn new(check: impl Fn() -> ValidationOutcome + 'static) -> Self {
        Self {
            check: Rc::new(check),
            watches: Vec::new(),
        }
    }

    /// A validator whose message is cleared as soon as one of `watches`
    /// changes and the check passes.
    pub fn live(check: impl Fn() -> ValidationOutcome + 'static, watches: Vec<InputHandle>) -> Self {
        Self {
            check: Rc::new(check),
            watches,
        }
    }

    pub fn check(&self) -> ValidationOutcome {
        (self.check)()
    }

    /// Inputs whose changes re-run this validator.
    pub fn watches(&self) -> &[InputHandle] {
        &self.watches
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("watches", &self.watches.len())
            .finish_non_exhaustive()
    }
}

/// Position of a validator in its registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidatorId(usize);

/// Validators in registration order.
#[derive(Debug, Default)]
pub struct ValidatorRegistry {
    validators: Vec<Validator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, validator: Validator) -> ValidatorId {
        self.validators.push(validator);
        ValidatorId(self.validators.len() - 1)
    }

    pub fn get(&self, id: ValidatorId) -> Option<&Validator> {
        self.validators.get(id.0)
    }

    /// Run every validator, returning the failures in registration order.
    pub fn run(&self) -> Vec<(ValidatorId, String)> {
        self.validators
            .iter()
            .enumerate()
            .filter_map(|(idx, validator)| {
                let outcome = validator.check();
                (!outcome.valid).then(|| (ValidatorId(idx), outcome.message))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

/// Messages of the validators that failed the last close attempt and have not
/// been cleared by live feedback since.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FailureBoard {
    failures: BTreeMap<ValidatorId, String>,
}

impl FailureBoard {
    pub fn replace(&mut self, failures: impl IntoIterator<Item = (ValidatorId, String)>) {
        self.failures = failures.into_iter().collect();
    }

    /// Remove a validator's message. Returns whether it was shown.
    pub fn clear(&mut self, id: ValidatorId) -> bool {
        self.failures.remove(&id).is_some()
    }

    pub fn contains(&self, id: ValidatorId) -> bool {
        self.failures.contains_key(&id)
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.failures.values().map(String::as_str)
    }

    /// All messages, one per line, in registration order.
    pub fn text(&self) -> String {
        self.messages().collect::<Vec<_>>().join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    fn to_message(&self) -> DialogMessage {
        if self.is_empty() {
            DialogMessage::clear()
        } else {
            DialogMessage::error(self.text())
        }
    }
}

/// Validators, the failure board and the surface the board is published to.
#[derive(Default)]
pub struct ValidationSession {
    registry: RefCell<ValidatorRegistry>,
    board: RefCell<FailureBoard>,
    surface: RefCell<Option<Weak<dyn DialogSurface>>>,
}

impl ValidationSession {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Publish board changes to `surface` from now on.
    pub fn attach(&self, surface: &Rc<dyn DialogSurface>) {
        *self.surface.borrow_mut() = Some(Rc::downgrade(surface));
    }

    /// Register a validator and subscribe to its watched inputs.
    ///
    /// The returned disposables end the subscriptions.
    pub fn add(self: &Rc<Self>, validator: Validator) -> (ValidatorId, Vec<Disposable>) {
        let watches = validator.watches().to_vec();
        let id = self.registry.borrow_mut().add(validator);

        let disposables = watches
            .iter()
            .map(|input| {
                let session = Rc::downgrade(self);
                input.on_changed(Rc::new(move || {
                    if let Some(session) = session.upgrade() {
                        session.refresh(id);
                    }
                }))
            })
            .collect();
        (id, disposables)
    }

    /// Run every validator, publish the failures and report whether all passed.
    pub fn attempt_close(&self) -> bool {
        let failures = self.registry.borrow().run();
        if failures.is_empty() {
            debug!("all validators passed");
        } else {
            warn!(failed = failures.len(), "close attempt failed validation");
        }
        let passed = failures.is_empty();
        self.board.borrow_mut().replace(failures);
        self.publish();
        passed
    }

    /// Re-run one validator and clear its message if it passes now.
    pub fn refresh(&self, id: ValidatorId) {
        if !self.board.borrow().contains(id) {
            return;
        }
        let passed = self
            .registry
            .borrow()
            .get(id)
            .is_some_and(|validator| validator.check().valid);
        if passed && self.board.borrow_mut().clear(id) {
            trace!(?id, "live feedback cleared a validation message");
            self.publish();
        }
    }

    pub fn board(&self) -> FailureBoard {
        self.board.borrow().clone()
    }

    pub fn validator_count(&self) -> usize {
        self.registry.borrow().len()
    }

    fn publish(&self) {
        let surface = self.surface.borrow().as_ref().and_then(Weak::upgrade);
        if let Some(surface) = surface {
            // The surface may call back into the session.
            let message = self.board.borrow().to_message();
            surface.set_message(message);
        }
    }
}

impl fmt::Debug for ValidationSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationSession")
            .field("validators", &self.registry.borrow().len())
            .field("board", &self.board.borrow())
            .finish_non_exhaustive()
    }
}
