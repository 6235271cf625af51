//! Events describing what a session mutation changed.
//!
//! Front-ends supply a [`DomainEventSink`] to react to them, for example by
//! opening the record form after an appointment is completed.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
