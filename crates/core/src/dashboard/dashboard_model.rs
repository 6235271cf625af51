use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::appointments::Appointment;
use crate::customers::Customer;
use crate::records::TreatmentRecord;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_customers: usize,
    /// Appointments dated `today`, any status.
    pub today_appointments: usize,
    pub total_records: usize,
    /// Sum of fees of records in the calendar month of `today`.
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_revenue: Decimal,
}

pub fn summarize(
    customers: &[Customer],
    appointments: &[Appointment],
    records: &[TreatmentRecord],
    today: NaiveDate,
) -> DashboardSummary {
    let monthly_revenue = records
        .iter()
        .filter(|r| r.date.year() == today.year() && r.date.month() == today.month())
        .map(|r| r.fee)
        .sum();

    DashboardSummary {
        total_customers: customers.len(),
        today_appointments: appointments.iter().filter(|a| a.date == today).count(),
        total_records: records.len(),
        monthly_revenue,
    }
}
