use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::appointments::{
    migrate_legacy_appointments, Appointment, AppointmentFilter, AppointmentScheduler,
    AppointmentStatus, NewAppointment, StatusChange,
};
use crate::constants::{
    APPOINTMENTS_KEY, APPOINTMENT_TIME_SETTINGS_KEY, CLIENTS_KEY, CUSTOMERS_KEY, RECORDS_KEY,
    TIME_GROUPS_KEY,
};
use crate::customers::{self, Client, Customer};
use crate::dashboard::{self, DashboardSummary};
use crate::errors::{DatabaseError, Error, Result};
use crate::events::{DomainEvent, DomainEventSink};
use crate::portal::{self, PortalBooking, PortalTimeOption};
use crate::records::{FollowUpOffer, NewTreatmentRecord, SavedTreatmentRecord, TreatmentRecord};
use crate::storage::KeyValueStoreTrait;
use crate::time_groups::{NewTimeGroup, TimeGroup, TimeGroupRegistry, TimeOption};
use crate::time_settings::AppointmentTimeSettings;
use crate::utils::{new_id, SlotTime};

/// Owns every collection the scheduling core works with.
///
/// State is read once by [`ClinicSession::load`]. Each mutation works on a
/// copy of the affected collection, writes the copy to the store, and only
/// then replaces the in-memory collection, so a failed write changes nothing.
/// Events are emitted after the write succeeds.
pub struct ClinicSession {
    store: Arc<dyn KeyValueStoreTrait>,
    event_sink: Arc<dyn DomainEventSink>,
    time_groups: TimeGroupRegistry,
    scheduler: AppointmentScheduler,
    time_settings: AppointmentTimeSettings,
    customers: Vec<Customer>,
    records: Vec<TreatmentRecord>,
    clients: Vec<Client>,
}

impl ClinicSession {
    /// Reads all collections from the store, upgrading legacy appointments.
    ///
    /// Missing keys load as empty collections (or default settings). When
    /// legacy appointments were upgraded the collection is written back once.
    pub fn load(
        store: Arc<dyn KeyValueStoreTrait>,
        event_sink: Arc<dyn DomainEventSink>,
    ) -> Result<Self> {
        let raw_appointments: Vec<Value> = read_collection(store.as_ref(), APPOINTMENTS_KEY)?;
        let (raw_appointments, migrated) = migrate_legacy_appointments(raw_appointments);
        if migrated {
            info!("Upgraded legacy appointment data, writing it back");
            write_json(store.as_ref(), APPOINTMENTS_KEY, &raw_appointments)?;
        }
        let appointments = raw_appointments
            .into_iter()
            .map(serde_json::from_value::<Appointment>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| serialization_error(APPOINTMENTS_KEY, e))?;

        let time_groups = TimeGroupRegistry::from_groups(read_collection(
            store.as_ref(),
            TIME_GROUPS_KEY,
        )?);
        let time_settings = match store.get(APPOINTMENT_TIME_SETTINGS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| serialization_error(APPOINTMENT_TIME_SETTINGS_KEY, e))?,
            None => AppointmentTimeSettings::default(),
        };
        let customers = read_collection(store.as_ref(), CUSTOMERS_KEY)?;
        let records = read_collection(store.as_ref(), RECORDS_KEY)?;
        let clients = read_collection(store.as_ref(), CLIENTS_KEY)?;

        let session = Self {
            store,
            event_sink,
            time_groups,
            scheduler: AppointmentScheduler::from_appointments(appointments),
            time_settings,
            customers,
            records,
            clients,
        };
        info!(
            "Loaded session: {} time groups, {} appointments, {} customers, {} records",
            session.time_groups.len(),
            session.scheduler.list().len(),
            session.customers.len(),
            session.records.len()
        );
        Ok(session)
    }

    /// Writes every collection owned by the core back to the store.
    ///
    /// Clients are read-only here and are not written.
    pub fn save(&self) -> Result<()> {
        self.persist(TIME_GROUPS_KEY, self.time_groups.list_groups())?;
        self.persist(APPOINTMENTS_KEY, self.scheduler.list())?;
        self.persist(APPOINTMENT_TIME_SETTINGS_KEY, &self.time_settings)?;
        self.persist(CUSTOMERS_KEY, &self.customers)?;
        self.persist(RECORDS_KEY, &self.records)?;
        debug!("Session saved");
        Ok(())
    }

    // ---- Time groups ----

    pub fn list_time_groups(&self) -> &[TimeGroup] {
        self.time_groups.list_groups()
    }

    pub fn time_options(&self) -> Vec<TimeOption> {
        self.time_groups.time_options()
    }

    pub fn add_time_group(&mut self, new_group: NewTimeGroup) -> Result<TimeGroup> {
        let mut registry = self.time_groups.clone();
        let group = registry.add_group(&new_group.name, new_group.start_time, new_group.end_time)?;
        self.commit_time_groups(registry, vec![group.id.clone()])?;
        Ok(group)
    }

    pub fn update_time_group(&mut self, id: &str, changes: NewTimeGroup) -> Result<TimeGroup> {
        let mut registry = self.time_groups.clone();
        let group =
            registry.update_group(id, &changes.name, changes.start_time, changes.end_time)?;
        self.commit_time_groups(registry, vec![group.id.clone()])?;
        Ok(group)
    }

    /// Deletes a time group. Appointments booked on its window are untouched.
    pub fn delete_time_group(&mut self, id: &str) -> Result<TimeGroup> {
        let mut registry = self.time_groups.clone();
        let removed = registry.delete_group(id)?;
        self.commit_time_groups(registry, vec![removed.id.clone()])?;
        Ok(removed)
    }

    fn commit_time_groups(&mut self, registry: TimeGroupRegistry, ids: Vec<String>) -> Result<()> {
        self.persist(TIME_GROUPS_KEY, registry.list_groups())?;
        self.time_groups = registry;
        self.event_sink.emit(DomainEvent::time_groups_changed(ids));
        Ok(())
    }

    // ---- Legacy time settings ----

    pub fn appointment_time_settings(&self) -> AppointmentTimeSettings {
        self.time_settings
    }

    pub fn save_appointment_time_settings(
        &mut self,
        settings: AppointmentTimeSettings,
    ) -> Result<AppointmentTimeSettings> {
        settings.validate()?;
        self.persist(APPOINTMENT_TIME_SETTINGS_KEY, &settings)?;
        self.time_settings = settings;
        self.event_sink
            .emit(DomainEvent::AppointmentTimeSettingsChanged);
        Ok(settings)
    }

    pub fn legacy_time_options(&self) -> Vec<String> {
        self.time_settings.time_options()
    }

    // ---- Appointments ----

    pub fn appointments(&self) -> &[Appointment] {
        self.scheduler.list()
    }

    pub fn filter_appointments(&self, filter: &AppointmentFilter) -> Vec<Appointment> {
        self.scheduler.filter(filter)
    }

    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.scheduler.get(id)
    }

    pub fn list_active_conflicts(&self, date: NaiveDate, time: &SlotTime) -> Vec<Appointment> {
        self.scheduler.list_active_conflicts(date, time)
    }

    pub fn create_appointment(&mut self, new_appointment: NewAppointment) -> Result<Appointment> {
        let mut scheduler = self.scheduler.clone();
        let appointment = scheduler.create_appointment(new_appointment)?;
        self.commit_appointments(scheduler)?;
        self.emit_created(&appointment);
        Ok(appointment)
    }

    /// Sets an appointment's status. The first transition into `completed`
    /// also emits a treatment-record request carrying the draft.
    pub fn update_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> Result<StatusChange> {
        let mut scheduler = self.scheduler.clone();
        let change = scheduler.update_status(id, status)?;
        self.commit_appointments(scheduler)?;

        let mut events = vec![DomainEvent::appointment_status_changed(
            change.appointment.id.clone(),
            change.previous_status,
            change.appointment.status,
        )];
        if let Some(draft) = &change.record_draft {
            events.push(DomainEvent::treatment_record_requested(
                draft.appointment_id.clone(),
                draft.customer_name.clone(),
                draft.date,
                draft.treatment.clone(),
            ));
        }
        self.event_sink.emit_batch(events);
        Ok(change)
    }

    pub fn delete_appointment(&mut self, id: &str) -> Result<Appointment> {
        let mut scheduler = self.scheduler.clone();
        let removed = scheduler.delete_appointment(id)?;
        self.commit_appointments(scheduler)?;
        self.event_sink
            .emit(DomainEvent::appointment_deleted(removed.id.clone()));
        Ok(removed)
    }

    fn commit_appointments(&mut self, scheduler: AppointmentScheduler) -> Result<()> {
        self.persist(APPOINTMENTS_KEY, scheduler.list())?;
        self.scheduler = scheduler;
        Ok(())
    }

    fn emit_created(&self, appointment: &Appointment) {
        self.event_sink.emit(DomainEvent::appointment_created(
            appointment.id.clone(),
            appointment.date,
            appointment.time.to_string(),
        ));
    }

    // ---- Treatment records and customers ----

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn find_customer_by_name(&self, name: &str) -> Option<&Customer> {
        customers::find_by_name(&self.customers, name)
    }

    pub fn records(&self) -> &[TreatmentRecord] {
        &self.records
    }

    pub fn get_record(&self, id: &str) -> Option<&TreatmentRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Saves a treatment record and sets `lastVisit` on the first customer
    /// with the same name. When the record names a next visit, the result
    /// carries a follow-up offer; nothing is booked until the caller accepts
    /// it with [`ClinicSession::create_follow_up`].
    pub fn save_treatment_record(
        &mut self,
        new_record: NewTreatmentRecord,
    ) -> Result<SavedTreatmentRecord> {
        new_record.validate()?;

        let record = TreatmentRecord {
            id: new_id(),
            customer_name: new_record.customer_name.trim().to_string(),
            date: new_record.date,
            treatment: new_record.treatment,
            symptoms: new_record.symptoms,
            plan: new_record.plan,
            fee: new_record.fee,
            next_visit: new_record.next_visit,
            created_at: Some(Utc::now()),
        };

        let mut records = self.records.clone();
        records.push(record.clone());

        let mut customers = self.customers.clone();
        let customer_updated = match customers.iter_mut().find(|c| c.name == record.customer_name)
        {
            Some(customer) => {
                customer.last_visit = Some(record.date);
                true
            }
            None => {
                warn!(
                    "No customer named '{}' to update lastVisit for record {}",
                    record.customer_name, record.id
                );
                false
            }
        };

        self.persist(RECORDS_KEY, &records)?;
        if customer_updated {
            if let Err(err) = self.persist(CUSTOMERS_KEY, &customers) {
                // Put the stored records back so a reload does not resurrect
                // a record this call reports as failed.
                if let Err(rollback_err) = self.persist(RECORDS_KEY, &self.records) {
                    error!(
                        "Failed to restore records after customer write failed: {}",
                        rollback_err
                    );
                }
                return Err(err);
            }
        }
        self.records = records;
        self.customers = customers;

        let follow_up = FollowUpOffer::for_record(&record);
        let mut events = vec![DomainEvent::treatment_record_saved(
            record.id.clone(),
            record.customer_name.clone(),
        )];
        if let Some(offer) = &follow_up {
            events.push(DomainEvent::follow_up_suggested(
                offer.record_id.clone(),
                offer.customer_name.clone(),
                offer.next_visit,
            ));
        }
        self.event_sink.emit_batch(events);

        Ok(SavedTreatmentRecord {
            record,
            customer_updated,
            follow_up,
        })
    }

    /// Books the follow-up visit proposed by a saved record.
    pub fn create_follow_up(&mut self, record_id: &str) -> Result<Appointment> {
        let record = self
            .get_record(record_id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(format!("Treatment record {}", record_id)))?;

        let mut scheduler = self.scheduler.clone();
        let appointment = scheduler.create_follow_up(&record)?;
        self.commit_appointments(scheduler)?;
        self.emit_created(&appointment);
        Ok(appointment)
    }

    // ---- Client portal ----

    pub fn find_client(&self, client_id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == client_id)
    }

    pub fn portal_time_options(&self, date: Option<NaiveDate>) -> Vec<PortalTimeOption> {
        portal::portal_time_options(&self.time_groups, &self.scheduler, date)
    }

    /// Books on behalf of a portal client, with the same slot check as the
    /// front desk.
    pub fn book_from_portal(&mut self, booking: PortalBooking) -> Result<Appointment> {
        let client = self
            .find_client(&booking.client_id)
            .ok_or_else(|| DatabaseError::NotFound(format!("Client {}", booking.client_id)))?;
        let new_appointment = booking.to_new_appointment(client);
        self.create_appointment(new_appointment)
    }

    pub fn client_appointments(&self, client_id: &str) -> Vec<Appointment> {
        self.scheduler.for_client(client_id)
    }

    // ---- Dashboard ----

    pub fn dashboard(&self, today: NaiveDate) -> DashboardSummary {
        dashboard::summarize(&self.customers, self.scheduler.list(), &self.records, today)
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        write_json(self.store.as_ref(), key, value)
    }
}

fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStoreTrait,
    key: &str,
) -> Result<Vec<T>> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(&raw).map_err(|e| serialization_error(key, e))
        }
        _ => Ok(Vec::new()),
    }
}

fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStoreTrait,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value).map_err(|e| serialization_error(key, e))?;
    store.set(key, &raw)
}

fn serialization_error(key: &str, err: serde_json::Error) -> Error {
    Error::Serialization {
        key: key.to_string(),
        message: err.to_string(),
    }
}
