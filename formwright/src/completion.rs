//! The step that runs after a dialog closes successfully.
//!
//! Hosts hand the dialog's work (deploying, connecting, ...) to [`complete`]
//! as a future. If the user cancels while it runs, the outcome is ignored.

use std::{cell::Cell, future::Future, rc::Rc};

use formwright_types::{DialogMessage, DialogSurface};
use thiserror::Error;
use tracing::{info, warn};

/// Cooperative cancel flag shared between the dialog and the running step.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Rc<Cell<bool>>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// How a completion step ended, when it did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome<T> {
    Completed(T),
    /// The user cancelled; the step's result was discarded.
    Cancelled,
}

/// A completion step that failed without being cancelled.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error(transparent)]
    Failed(anyhow::Error),
}

/// Run `operation` on behalf of `surface`.
///
/// A failure is shown as an error message on the surface and returned. Once
/// `cancel` is set, whatever the operation produces is discarded.
pub async fn complete<T, F>(
    surface: &dyn DialogSurface,
    cancel: &CancelFlag,
    operation: F,
) -> Result<CompletionOutcome<T>, CompletionError>
where
    F: Future<Output = anyhow::Result<T>>,
{
    let result = operation.await;
    if cancel.is_cancelled() {
        info!(failed = result.is_err(), "completion cancelled, discarding result");
        return Ok(CompletionOutcome::Cancelled);
    }
    match result {
        Ok(value) => {
            info!("completion finished");
            Ok(CompletionOutcome::Completed(value))
        }
        Err(err) => {
            warn!(error = %err, "completion failed");
            surface.set_message(DialogMessage::error(format!("{err:#}")));
            Err(CompletionError::Failed(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use formwright_types::MessageLevel;

    use super::*;
    use crate::test_view::TestDialog;

    #[tokio::test]
    async fn success_is_returned() {
        let dialog = TestDialog::new();
        let cancel = CancelFlag::new();
        let outcome = complete(&*dialog, &cancel, async { Ok(42) }).await.unwrap();
        assert_eq!(outcome, CompletionOutcome::Completed(42));
        assert!(dialog.message().is_empty());
    }

    #[tokio::test]
    async fn failure_becomes_an_error_message() {
        let dialog = TestDialog::new();
        let cancel = CancelFlag::new();
        let err = complete(&*dialog, &cancel, async {
            Err::<(), _>(anyhow!("cluster unreachable"))
        })
        .await
        .unwrap_err();

        assert_eq!(err.to_string(), "cluster unreachable");
        let message = dialog.message();
        assert_eq!(message.text, "cluster unreachable");
        assert_eq!(message.level, MessageLevel::Error);
    }

    #[tokio::test]
    async fn results_after_cancel_are_ignored() {
        let dialog = TestDialog::new();
        let cancel = CancelFlag::new();
        let flag = cancel.clone();
        let outcome = complete(&*dialog, &cancel, async move {
            flag.cancel();
            Err::<(), _>(anyhow!("interrupted"))
        })
        .await
        .unwrap();

        assert_eq!(outcome, CompletionOutcome::Cancelled);
        assert!(dialog.message().is_empty());
    }
}
