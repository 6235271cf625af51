//! Treatment record domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::appointments::Appointment;
use crate::errors::{Result, ValidationError};
use crate::utils::deserialize_id;

/// Domain model representing a saved treatment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    pub treatment: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_visit: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Input model for saving a treatment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTreatmentRecord {
    pub customer_name: String,
    pub date: NaiveDate,
    pub treatment: String,
    #[serde(default)]
    pub symptoms: String,
    #[serde(default)]
    pub plan: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub fee: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_visit: Option<NaiveDate>,
}

impl NewTreatmentRecord {
    /// Validates the record input.
    pub fn validate(&self) -> Result<()> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::MissingField("customerName".to_string()).into());
        }
        if self.treatment.trim().is_empty() {
            return Err(ValidationError::MissingField("treatment".to_string()).into());
        }
        if self.fee < Decimal::ZERO {
            return Err(
                ValidationError::InvalidInput("Fee cannot be negative".to_string()).into(),
            );
        }
        Ok(())
    }
}

/// Defaults handed to the record form when an appointment is completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentRecordDraft {
    pub appointment_id: String,
    pub customer_name: String,
    pub date: NaiveDate,
    /// Prefilled from the appointment's service.
    pub treatment: String,
}

impl TreatmentRecordDraft {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            appointment_id: appointment.id.clone(),
            customer_name: appointment.customer_name.clone(),
            date: appointment.date,
            treatment: appointment.service.clone(),
        }
    }
}

/// A follow-up visit the caller may book via `create_follow_up`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpOffer {
    pub record_id: String,
    pub customer_name: String,
    pub next_visit: NaiveDate,
}

impl FollowUpOffer {
    pub fn for_record(record: &TreatmentRecord) -> Option<Self> {
        record.next_visit.map(|next_visit| Self {
            record_id: record.id.clone(),
            customer_name: record.customer_name.clone(),
            next_visit,
        })
    }
}

/// Result of saving a treatment record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedTreatmentRecord {
    pub record: TreatmentRecord,
    /// Whether a customer with the record's name had `lastVisit` updated.
    pub customer_updated: bool,
    pub follow_up: Option<FollowUpOffer>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn new_record(fee: Decimal) -> NewTreatmentRecord {
        NewTreatmentRecord {
            customer_name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            treatment: "Massage".to_string(),
            symptoms: String::new(),
            plan: String::new(),
            fee,
            next_visit: None,
        }
    }

    #[test]
    fn test_validate_fee() {
        assert!(new_record(dec!(0)).validate().is_ok());
        assert!(new_record(dec!(250.50)).validate().is_ok());
        assert!(new_record(dec!(-1)).validate().is_err());
    }

    #[test]
    fn test_validate_requires_treatment() {
        let mut record = new_record(dec!(100));
        record.treatment = " ".to_string();
        assert!(record.validate().is_err());
    }

    #[test]
    fn test_record_reads_legacy_shape() {
        let record: TreatmentRecord = serde_json::from_str(
            r#"{"id": 1717200000000, "customerName": "Alice", "date": "2024-06-01",
                "treatment": "Massage", "symptoms": "Back pain", "plan": "",
                "fee": 300, "nextVisit": "2024-06-15"}"#,
        )
        .unwrap();

        assert_eq!(record.id, "1717200000000");
        assert_eq!(record.fee, dec!(300));
        assert_eq!(
            FollowUpOffer::for_record(&record).map(|o| o.next_visit),
            NaiveDate::from_ymd_opt(2024, 6, 15)
        );
    }
}
