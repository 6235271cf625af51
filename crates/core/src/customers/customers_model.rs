use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{deserialize_id, deserialize_optional_string_or_number};

/// A clinic customer as kept by the customer list.
///
/// Fields the scheduling core does not know about are carried in `extra` so
/// that rewriting the collection never drops them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub age: Option<String>,
    #[serde(default)]
    pub last_visit: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A self-service portal account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// First customer whose name matches exactly.
///
/// Customers are keyed by name: two customers sharing a name are
/// indistinguishable here and the earlier one wins.
pub fn find_by_name<'a>(customers: &'a [Customer], name: &str) -> Option<&'a Customer> {
    customers.iter().find(|c| c.name == name)
}
