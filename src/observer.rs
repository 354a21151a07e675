//! Outbound notifications to the presentation layer.

use crate::criteria::CriteriaSnapshot;
use crate::display::CriteriaMarks;
use crate::error::ValidationResult;
use crate::form::FieldId;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

/// Receives notifications from a [`crate::PasswordForm`].
///
/// Every method defaults to a no-op so a host only implements what it renders.
pub trait FormObserver {
    fn criteria_snapshot_changed(&mut self, _snapshot: CriteriaSnapshot, _marks: CriteriaMarks) {}

    fn field_validation_result(&mut self, _field: FieldId, _result: &ValidationResult) {}

    fn submit_succeeded(&mut self) {}

    fn submit_failed(&mut self) {}
}

/// Owned copy of one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    CriteriaSnapshotChanged {
        snapshot: CriteriaSnapshot,
        marks: CriteriaMarks,
    },
    FieldValidationResult {
        field: FieldId,
        result: ValidationResult,
    },
    SubmitSucceeded,
    SubmitFailed,
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl FormObserver for NoopObserver {}

/// Records notifications in order.
impl FormObserver for Vec<FormEvent> {
    fn criteria_snapshot_changed(&mut self, snapshot: CriteriaSnapshot, marks: CriteriaMarks) {
        self.push(FormEvent::CriteriaSnapshotChanged { snapshot, marks });
    }

    fn field_validation_result(&mut self, field: FieldId, result: &ValidationResult) {
        self.push(FormEvent::FieldValidationResult {
            field,
            result: result.clone(),
        });
    }

    fn submit_succeeded(&mut self) {
        self.push(FormEvent::SubmitSucceeded);
    }

    fn submit_failed(&mut self) {
        self.push(FormEvent::SubmitFailed);
    }
}

impl<T: FormObserver + ?Sized> FormObserver for &mut T {
    fn criteria_snapshot_changed(&mut self, snapshot: CriteriaSnapshot, marks: CriteriaMarks) {
        (**self).criteria_snapshot_changed(snapshot, marks);
    }

    fn field_validation_result(&mut self, field: FieldId, result: &ValidationResult) {
        (**self).field_validation_result(field, result);
    }

    fn submit_succeeded(&mut self) {
        (**self).submit_succeeded();
    }

    fn submit_failed(&mut self) {
        (**self).submit_failed();
    }
}

/// Forwards notifications to an async task over an unbounded channel.
///
/// Sending never blocks. Once the receiver is dropped, events are discarded.
#[cfg(feature = "async")]
#[derive(Debug, Clone)]
pub struct ChannelObserver {
    tx: mpsc::UnboundedSender<FormEvent>,
}

#[cfg(feature = "async")]
impl ChannelObserver {
    pub fn new(tx: mpsc::UnboundedSender<FormEvent>) -> Self {
        Self { tx }
    }

    /// Creates an observer together with the receiving end.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<FormEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    fn send(&self, event: FormEvent) {
        if let Err(e) = self.tx.send(event) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to forward form event: {:?}", e.0);
            #[cfg(not(feature = "tracing"))]
            let _ = e;
        }
    }
}

#[cfg(feature = "async")]
impl FormObserver for ChannelObserver {
    fn criteria_snapshot_changed(&mut self, snapshot: CriteriaSnapshot, marks: CriteriaMarks) {
        self.send(FormEvent::CriteriaSnapshotChanged { snapshot, marks });
    }

    fn field_validation_result(&mut self, field: FieldId, result: &ValidationResult) {
        self.send(FormEvent::FieldValidationResult {
            field,
            result: result.clone(),
        });
    }

    fn submit_succeeded(&mut self) {
        self.send(FormEvent::SubmitSucceeded);
    }

    fn submit_failed(&mut self) {
        self.send(FormEvent::SubmitFailed);
    }
}
