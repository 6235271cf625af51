use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::*;
use crate::errors::{Error, ErrorKind};
use crate::records::TreatmentRecord;
use crate::utils::SlotTime;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn slot(s: &str) -> SlotTime {
    s.parse().unwrap()
}

fn booking(customer: &str, day: &str, time: &str) -> NewAppointment {
    NewAppointment {
        customer_name: customer.to_string(),
        date: date(day),
        time: slot(time),
        service: "Massage".to_string(),
        notes: String::new(),
        client_id: None,
        client_phone: None,
    }
}

fn record_with_next_visit(next_visit: Option<NaiveDate>) -> TreatmentRecord {
    TreatmentRecord {
        id: "rec-1".to_string(),
        customer_name: "Alice".to_string(),
        date: date("2024-06-01"),
        treatment: "Spinal adjustment".to_string(),
        symptoms: "Back pain".to_string(),
        plan: String::new(),
        fee: dec!(300),
        next_visit,
        created_at: None,
    }
}

#[test]
fn test_create_appointment_starts_pending() {
    let mut scheduler = AppointmentScheduler::new();
    let appointment = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();

    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert!(!appointment.id.is_empty());
    assert!(appointment.created_at.is_some());
    assert_eq!(scheduler.list().len(), 1);
}

#[test]
fn test_double_booking_rejected_until_cancelled() {
    let mut scheduler = AppointmentScheduler::new();
    let first = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();

    let err = scheduler
        .create_appointment(booking("Bob", "2024-06-01", "10:00"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    match err {
        Error::Appointment(AppointmentError::SlotTaken { customer_name, .. }) => {
            assert_eq!(customer_name, "Alice")
        }
        other => panic!("Expected SlotTaken, got {:?}", other),
    }
    assert_eq!(scheduler.list().len(), 1);

    scheduler
        .update_status(&first.id, AppointmentStatus::Cancelled)
        .unwrap();
    assert!(scheduler
        .create_appointment(booking("Bob", "2024-06-01", "10:00"))
        .is_ok());
}

#[test]
fn test_confirmed_appointment_still_blocks_slot() {
    let mut scheduler = AppointmentScheduler::new();
    let first = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "09:00-10:00"))
        .unwrap();
    scheduler
        .update_status(&first.id, AppointmentStatus::Confirmed)
        .unwrap();

    let err = scheduler
        .create_appointment(booking("Bob", "2024-06-01", "9:00-10:00"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
}

#[test]
fn test_completed_appointment_releases_slot() {
    let mut scheduler = AppointmentScheduler::new();
    let first = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();
    scheduler
        .update_status(&first.id, AppointmentStatus::Completed)
        .unwrap();

    assert!(scheduler
        .create_appointment(booking("Bob", "2024-06-01", "10:00"))
        .is_ok());
}

#[test]
fn test_same_time_on_other_day_is_free() {
    let mut scheduler = AppointmentScheduler::new();
    scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();
    assert!(scheduler
        .create_appointment(booking("Bob", "2024-06-02", "10:00"))
        .is_ok());
}

#[test]
fn test_overlapping_labels_do_not_conflict() {
    let mut scheduler = AppointmentScheduler::new();
    scheduler
        .create_appointment(booking("Alice", "2024-06-01", "09:00-10:00"))
        .unwrap();

    // Exact-match conflicts only.
    assert!(scheduler
        .create_appointment(booking("Bob", "2024-06-01", "09:30"))
        .is_ok());
    assert!(scheduler
        .create_appointment(booking("Carol", "2024-06-01", "09:30-10:30"))
        .is_ok());
}

#[test]
fn test_create_appointment_requires_customer_and_service() {
    let mut scheduler = AppointmentScheduler::new();

    let err = scheduler
        .create_appointment(booking("  ", "2024-06-01", "10:00"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    let mut no_service = booking("Alice", "2024-06-01", "10:00");
    no_service.service = String::new();
    let err = scheduler.create_appointment(no_service).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(scheduler.list().is_empty());
}

#[test]
fn test_completion_drafts_record_exactly_once() {
    let mut scheduler = AppointmentScheduler::new();
    let appointment = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();

    let first = scheduler
        .update_status(&appointment.id, AppointmentStatus::Completed)
        .unwrap();
    let draft = first.record_draft.expect("first completion drafts a record");
    assert_eq!(draft.appointment_id, appointment.id);
    assert_eq!(draft.customer_name, "Alice");
    assert_eq!(draft.date, date("2024-06-01"));
    assert_eq!(draft.treatment, "Massage");
    assert_eq!(first.previous_status, AppointmentStatus::Pending);

    let second = scheduler
        .update_status(&appointment.id, AppointmentStatus::Completed)
        .unwrap();
    assert!(second.record_draft.is_none());
    assert_eq!(second.previous_status, AppointmentStatus::Completed);
}

#[test]
fn test_non_completion_transitions_draft_nothing() {
    let mut scheduler = AppointmentScheduler::new();
    let appointment = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();

    let change = scheduler
        .update_status(&appointment.id, AppointmentStatus::Confirmed)
        .unwrap();
    assert!(change.record_draft.is_none());
    assert_eq!(change.appointment.status, AppointmentStatus::Confirmed);

    let change = scheduler
        .update_status(&appointment.id, AppointmentStatus::Cancelled)
        .unwrap();
    assert!(change.record_draft.is_none());
}

#[test]
fn test_update_status_unknown_id() {
    let mut scheduler = AppointmentScheduler::new();
    let err = scheduler
        .update_status("missing", AppointmentStatus::Confirmed)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_delete_appointment_any_status() {
    let mut scheduler = AppointmentScheduler::new();
    let appointment = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();
    scheduler
        .update_status(&appointment.id, AppointmentStatus::Completed)
        .unwrap();

    let removed = scheduler.delete_appointment(&appointment.id).unwrap();
    assert_eq!(removed.id, appointment.id);
    assert!(scheduler.list().is_empty());

    let err = scheduler.delete_appointment(&appointment.id).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_list_active_conflicts_ignores_inactive() {
    let mut scheduler = AppointmentScheduler::new();
    let first = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();
    assert_eq!(
        scheduler
            .list_active_conflicts(date("2024-06-01"), &slot("10:00"))
            .len(),
        1
    );

    scheduler
        .update_status(&first.id, AppointmentStatus::Cancelled)
        .unwrap();
    assert!(scheduler
        .list_active_conflicts(date("2024-06-01"), &slot("10:00"))
        .is_empty());
}

#[test]
fn test_follow_up_uses_record_defaults() {
    let mut scheduler = AppointmentScheduler::new();
    let record = record_with_next_visit(Some(date("2024-06-15")));

    let follow_up = scheduler.create_follow_up(&record).unwrap();
    assert_eq!(follow_up.customer_name, "Alice");
    assert_eq!(follow_up.date, date("2024-06-15"));
    assert_eq!(follow_up.time.to_string(), "09:00");
    assert_eq!(follow_up.service, "Spinal adjustment");
    assert_eq!(follow_up.notes, "follow-up");
    assert_eq!(follow_up.status, AppointmentStatus::Pending);
}

#[test]
fn test_follow_up_skips_conflict_check() {
    let mut scheduler = AppointmentScheduler::new();
    scheduler
        .create_appointment(booking("Bob", "2024-06-15", "09:00"))
        .unwrap();

    let record = record_with_next_visit(Some(date("2024-06-15")));
    assert!(scheduler.create_follow_up(&record).is_ok());
    assert_eq!(
        scheduler
            .list_active_conflicts(date("2024-06-15"), &slot("09:00"))
            .len(),
        2
    );
}

#[test]
fn test_follow_up_requires_next_visit() {
    let mut scheduler = AppointmentScheduler::new();
    let err = scheduler
        .create_follow_up(&record_with_next_visit(None))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(scheduler.list().is_empty());
}

#[test]
fn test_filter_by_date_and_status() {
    let mut scheduler = AppointmentScheduler::new();
    let a = scheduler
        .create_appointment(booking("Alice", "2024-06-01", "10:00"))
        .unwrap();
    scheduler
        .create_appointment(booking("Bob", "2024-06-01", "11:00"))
        .unwrap();
    scheduler
        .create_appointment(booking("Carol", "2024-06-02", "10:00"))
        .unwrap();
    scheduler
        .update_status(&a.id, AppointmentStatus::Confirmed)
        .unwrap();

    let on_first = scheduler.filter(&AppointmentFilter {
        date: Some(date("2024-06-01")),
        status: None,
    });
    assert_eq!(on_first.len(), 2);

    let confirmed_on_first = scheduler.filter(&AppointmentFilter {
        date: Some(date("2024-06-01")),
        status: Some(AppointmentStatus::Confirmed),
    });
    assert_eq!(confirmed_on_first.len(), 1);
    assert_eq!(confirmed_on_first[0].customer_name, "Alice");

    assert_eq!(scheduler.filter(&AppointmentFilter::default()).len(), 3);
}

#[test]
fn test_for_client_returns_portal_bookings() {
    let mut scheduler = AppointmentScheduler::new();
    let mut portal = booking("Dana", "2024-06-01", "10:00");
    portal.client_id = Some("client-7".to_string());
    scheduler.create_appointment(portal).unwrap();
    scheduler
        .create_appointment(booking("Eve", "2024-06-01", "11:00"))
        .unwrap();

    let mine = scheduler.for_client("client-7");
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].customer_name, "Dana");
}

#[test]
fn test_exposed_transitions_table() {
    assert_eq!(
        AppointmentStatus::Pending.exposed_transitions(),
        &[
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled
        ]
    );
    assert!(AppointmentStatus::Completed.exposed_transitions().is_empty());
    assert!(AppointmentStatus::Cancelled.exposed_transitions().is_empty());
}
