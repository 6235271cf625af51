use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::DomainEvent;

/// Receives the events a [`ClinicSession`](crate::ClinicSession) emits once a
/// mutation has been written to the store.
///
/// The session calls the sink while it is still borrowed mutably, so an
/// implementation must return quickly and must not call back into the session.
/// A sink cannot fail the operation that produced the event.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);

    /// Events of a single operation, in the order they happened (for example a
    /// status change followed by the record request it triggered).
    fn emit_batch(&self, events: Vec<DomainEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// Drops every event. For callers that only need the stored state.
#[derive(Clone, Copy, Default)]
pub struct SilentEventSink;

impl DomainEventSink for SilentEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Keeps every event in memory. Clones share one log, so a test can hand a
/// clone to the session and inspect the original.
#[derive(Clone, Default)]
pub struct RecordingEventSink {
    log: Arc<Mutex<Vec<DomainEvent>>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn log(&self) -> MutexGuard<'_, Vec<DomainEvent>> {
        self.log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.log().clone()
    }

    pub fn clear(&self) {
        self.log().clear();
    }

    pub fn len(&self) -> usize {
        self.log().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log().is_empty()
    }
}

impl DomainEventSink for RecordingEventSink {
    fn emit(&self, event: DomainEvent) {
        self.log().push(event);
    }
}
