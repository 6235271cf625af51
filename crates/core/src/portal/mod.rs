//! Client self-service booking.

mod portal_model;

pub use portal_model::{portal_time_options, PortalBooking, PortalTimeOption};
