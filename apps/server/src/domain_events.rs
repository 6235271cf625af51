//! Domain events bridge for the web server.
//!
//! The HTTP API answers each request with everything the caller needs (the
//! record draft on completion, the follow-up offer on save), so events are
//! only written to the log here.

use clinicdesk_core::events::{DomainEvent, DomainEventSink};

#[derive(Clone, Default)]
pub struct TracingDomainEventSink;

impl DomainEventSink for TracingDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        match &event {
            DomainEvent::TreatmentRecordRequested {
                appointment_id,
                customer_name,
                ..
            } => tracing::info!(
                appointment_id = %appointment_id,
                customer = %customer_name,
                "Treatment record requested"
            ),
            DomainEvent::FollowUpSuggested {
                record_id,
                next_visit,
                ..
            } => tracing::info!(
                record_id = %record_id,
                next_visit = %next_visit,
                "Follow-up suggested"
            ),
            other => tracing::debug!(event = ?other, "Domain event"),
        }
    }
}
