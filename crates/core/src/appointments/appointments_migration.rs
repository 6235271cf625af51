//! Upgrades appointment objects written by older front-ends.

use log::debug;
use serde_json::{Map, Value};

use crate::constants::DEFAULT_SERVICE;

const ID_FIELDS: [&str; 2] = ["id", "clientId"];

/// Rewrites legacy appointment objects in place.
///
/// Two shapes are upgraded:
/// - portal bookings that carry `clientName` but no `customerName` get
///   `customerName` from `clientName`, `service` from `symptoms` (or the
///   default service label) and `notes` from `symptoms`;
/// - numeric `id` / `clientId` values become strings.
///
/// A `null` `notes` is replaced by an empty string. Returns the upgraded
/// collection and whether anything changed, so the caller can write it back once.
pub fn migrate_legacy_appointments(appointments: Vec<Value>) -> (Vec<Value>, bool) {
    let mut changed = false;

    let migrated = appointments
        .into_iter()
        .map(|mut value| {
            if let Value::Object(ref mut fields) = value {
                changed |= migrate_fields(fields);
            }
            value
        })
        .collect();

    (migrated, changed)
}

fn migrate_fields(fields: &mut Map<String, Value>) -> bool {
    let mut changed = false;

    let client_name = fields
        .get("clientName")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    let has_customer_name = fields
        .get("customerName")
        .and_then(Value::as_str)
        .is_some_and(|name| !name.is_empty());

    if let (Some(client_name), false) = (client_name, has_customer_name) {
        let symptoms = fields
            .get("symptoms")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let service = if symptoms.is_empty() {
            DEFAULT_SERVICE.to_string()
        } else {
            symptoms.clone()
        };

        debug!("Migrating legacy appointment for '{}'", client_name);
        fields.insert("customerName".to_string(), Value::String(client_name));
        fields.insert("service".to_string(), Value::String(service));
        fields.insert("notes".to_string(), Value::String(symptoms));
        changed = true;
    }

    for key in ID_FIELDS {
        if let Some(Value::Number(number)) = fields.get(key) {
            let text = number.to_string();
            fields.insert(key.to_string(), Value::String(text));
            changed = true;
        }
    }

    if matches!(fields.get("notes"), Some(Value::Null)) {
        fields.insert("notes".to_string(), Value::String(String::new()));
        changed = true;
    }

    changed
}
