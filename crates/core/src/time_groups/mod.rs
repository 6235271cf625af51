//! Time groups module - the registry of named, non-overlapping bookable windows.

mod time_groups_errors;
mod time_groups_model;
mod time_groups_registry;

#[cfg(test)]
mod time_groups_registry_tests;

pub use time_groups_errors::TimeGroupError;
pub use time_groups_model::{NewTimeGroup, TimeGroup, TimeOption};
pub use time_groups_registry::TimeGroupRegistry;
