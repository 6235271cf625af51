/// Storage key for the appointment collection
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Storage key for the time-group collection
pub const TIME_GROUPS_KEY: &str = "timeGroups";

/// Storage key for the legacy fixed-interval time settings
pub const APPOINTMENT_TIME_SETTINGS_KEY: &str = "appointmentTimeSettings";

/// Storage key for the customer collection
pub const CUSTOMERS_KEY: &str = "customers";

/// Storage key for the treatment-record collection
pub const RECORDS_KEY: &str = "records";

/// Storage key for self-service portal accounts
pub const CLIENTS_KEY: &str = "clients";

/// Time of day given to follow-up appointments
pub const FOLLOW_UP_TIME: &str = "09:00";

/// Notes written on follow-up appointments
pub const FOLLOW_UP_NOTES: &str = "follow-up";

/// Service label used when a booking names no service
pub const DEFAULT_SERVICE: &str = "Osteopathic treatment";
