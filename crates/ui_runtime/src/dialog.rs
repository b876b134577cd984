//! Single-slot modal dialog broker.
//!
//! The broker tracks at most one dialog process-wide. Opening while a dialog
//! is `Open` or `Closing` is rejected rather than silently replacing the
//! active instance, so a caller can never orphan an unresolved result future.
//! Teardown is two-phase: `close` marks the dialog `Closing` and the host
//! schedules [`finish_teardown`](DialogManager::finish_teardown) after the
//! fade-out delay, which releases the slot and resolves the handle's future.

use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use futures::channel::oneshot;
use serde_json::Value;
use thiserror::Error;

use crate::model::{DialogId, DialogPhase, DialogRecord, OpenDialogRequest};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Broker errors for invalid dialog requests.
pub enum DialogError {
    /// A dialog is already open or still tearing down.
    #[error("a dialog is already open")]
    AlreadyOpen,
}

/// Caller-side handle for one opened dialog.
///
/// Closing goes through the runtime (or [`DialogManager::close`] directly);
/// the handle itself only carries the identifier and the result future.
#[derive(Debug)]
pub struct DialogHandle {
    id: DialogId,
    closed: Option<oneshot::Receiver<Option<Value>>>,
}

impl DialogHandle {
    /// Identifier of the dialog this handle refers to.
    pub fn id(&self) -> DialogId {
        self.id
    }

    /// Takes the single-consumer future that resolves with the dialog result
    /// once teardown completes.
    ///
    /// Returns `None` if the future was already taken.
    pub fn after_closed(&mut self) -> Option<AfterClosed> {
        self.closed.take().map(|receiver| AfterClosed { receiver })
    }
}

/// Future resolving to the dialog's result value, or `None` when the dialog
/// was dismissed without a result.
#[derive(Debug)]
pub struct AfterClosed {
    receiver: oneshot::Receiver<Option<Value>>,
}

impl Future for AfterClosed {
    type Output = Option<Value>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.get_mut().receiver).poll(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            // Broker dropped mid-flight; treat as dismissal without a result.
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(None),
            Poll::Pending => Poll::Pending,
        }
    }
}

struct ActiveDialog {
    record: DialogRecord,
    pending_result: Option<Value>,
    resolver: Option<oneshot::Sender<Option<Value>>>,
}

/// Brokers creation, display, and disposal of exactly one modal dialog at a
/// time, delivering its result asynchronously to the caller.
#[derive(Default)]
pub struct DialogManager {
    next_id: u64,
    active: Option<ActiveDialog>,
}

impl DialogManager {
    /// Opens a dialog and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`DialogError::AlreadyOpen`] while another dialog is `Open` or
    /// `Closing`.
    pub fn open(&mut self, request: OpenDialogRequest) -> Result<DialogHandle, DialogError> {
        if self.active.is_some() {
            return Err(DialogError::AlreadyOpen);
        }

        self.next_id = self.next_id.saturating_add(1);
        let id = DialogId(self.next_id);
        let (tx, rx) = oneshot::channel();
        self.active = Some(ActiveDialog {
            record: DialogRecord {
                id,
                config: request.config,
                content: request.content,
                phase: DialogPhase::Open,
            },
            pending_result: None,
            resolver: Some(tx),
        });

        Ok(DialogHandle {
            id,
            closed: Some(rx),
        })
    }

    /// Returns the record of the active dialog, if any.
    pub fn active(&self) -> Option<&DialogRecord> {
        self.active.as_ref().map(|active| &active.record)
    }

    /// Requests closing with an optional result.
    ///
    /// Returns `true` when the dialog transitioned `Open -> Closing`; calling
    /// close on an already-closing, closed, or unknown dialog is a no-op.
    pub fn close(&mut self, id: DialogId, result: Option<Value>) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if active.record.id != id || active.record.phase != DialogPhase::Open {
            return false;
        }
        active.record.phase = DialogPhase::Closing;
        active.pending_result = result;
        true
    }

    /// Handles a pointer event on the backdrop outside the dialog surface.
    ///
    /// Honors the dialog's `close_on_backdrop` configuration; dismissal
    /// carries no result.
    pub fn dismiss_backdrop(&mut self, id: DialogId) -> bool {
        let allows_backdrop = self
            .active
            .as_ref()
            .map(|active| active.record.config.close_on_backdrop)
            .unwrap_or(false);
        if !allows_backdrop {
            return false;
        }
        self.close(id, None)
    }

    /// Handles an Escape key press, which closes regardless of the backdrop
    /// configuration.
    pub fn dismiss_escape(&mut self, id: DialogId) -> bool {
        self.close(id, None)
    }

    /// Completes teardown after the fade-out delay.
    ///
    /// Releases the overlay slot, transitions the dialog to `Closed`, and
    /// resolves its result future exactly once. No-op unless `id` names the
    /// active dialog in `Closing` phase.
    pub fn finish_teardown(&mut self, id: DialogId) -> bool {
        let is_closing = self
            .active
            .as_ref()
            .map(|active| active.record.id == id && active.record.phase == DialogPhase::Closing)
            .unwrap_or(false);
        if !is_closing {
            return false;
        }

        let Some(mut active) = self.active.take() else {
            return false;
        };
        active.record.phase = DialogPhase::Closed;
        if let Some(resolver) = active.resolver.take() {
            // The caller may have dropped the handle; a failed send is fine.
            let _ = resolver.send(active.pending_result.take());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::model::DialogConfig;

    fn open(manager: &mut DialogManager) -> DialogHandle {
        manager
            .open(OpenDialogRequest::new(json!({"kind": "demo"})))
            .expect("open dialog")
    }

    #[test]
    fn open_close_teardown_resolves_result_exactly_once() {
        let mut manager = DialogManager::default();
        let mut handle = open(&mut manager);
        let after_closed = handle.after_closed().expect("result future");

        assert!(manager.close(handle.id(), Some(json!("saved"))));
        assert_eq!(
            manager.active().map(|record| record.phase),
            Some(DialogPhase::Closing)
        );

        assert!(manager.finish_teardown(handle.id()));
        assert_eq!(manager.active(), None);
        assert_eq!(block_on(after_closed), Some(json!("saved")));

        // Settled handles stay settled; later calls are no-ops.
        assert!(!manager.close(handle.id(), Some(json!("again"))));
        assert!(!manager.finish_teardown(handle.id()));
    }

    #[test]
    fn at_most_one_dialog_open_or_closing() {
        let mut manager = DialogManager::default();
        let handle = open(&mut manager);

        let second = manager.open(OpenDialogRequest::new(json!(null)));
        assert_eq!(second.err(), Some(DialogError::AlreadyOpen));

        // Still rejected while the first dialog is tearing down.
        assert!(manager.close(handle.id(), None));
        let third = manager.open(OpenDialogRequest::new(json!(null)));
        assert_eq!(third.err(), Some(DialogError::AlreadyOpen));

        // Slot frees once teardown completes.
        assert!(manager.finish_teardown(handle.id()));
        assert!(manager.open(OpenDialogRequest::new(json!(null))).is_ok());
    }

    #[test]
    fn close_is_idempotent_and_keeps_first_result() {
        let mut manager = DialogManager::default();
        let mut handle = open(&mut manager);
        let after_closed = handle.after_closed().expect("result future");

        assert!(manager.close(handle.id(), Some(json!(1))));
        assert!(!manager.close(handle.id(), Some(json!(2))));
        assert!(manager.finish_teardown(handle.id()));

        assert_eq!(block_on(after_closed), Some(json!(1)));
    }

    #[test]
    fn backdrop_dismissal_honors_configuration() {
        let mut manager = DialogManager::default();
        let request = OpenDialogRequest {
            config: DialogConfig {
                close_on_backdrop: false,
                ..DialogConfig::default()
            },
            content: json!(null),
        };
        let handle = manager.open(request).expect("open dialog");

        assert!(!manager.dismiss_backdrop(handle.id()));
        assert_eq!(
            manager.active().map(|record| record.phase),
            Some(DialogPhase::Open)
        );

        // Escape closes regardless of the backdrop flag.
        assert!(manager.dismiss_escape(handle.id()));
        assert_eq!(
            manager.active().map(|record| record.phase),
            Some(DialogPhase::Closing)
        );
    }

    #[test]
    fn backdrop_dismissal_resolves_without_result() {
        let mut manager = DialogManager::default();
        let mut handle = open(&mut manager);
        let after_closed = handle.after_closed().expect("result future");

        assert!(manager.dismiss_backdrop(handle.id()));
        assert!(manager.finish_teardown(handle.id()));
        assert_eq!(block_on(after_closed), None);
    }

    #[test]
    fn result_future_is_single_consumer() {
        let mut manager = DialogManager::default();
        let mut handle = open(&mut manager);
        assert!(handle.after_closed().is_some());
        assert!(handle.after_closed().is_none());
    }

    #[test]
    fn teardown_with_dropped_handle_does_not_panic() {
        let mut manager = DialogManager::default();
        let id = open(&mut manager).id();
        assert!(manager.close(id, Some(json!("ignored"))));
        assert!(manager.finish_teardown(id));
        assert_eq!(manager.active(), None);
    }
}
