//! Front-desk statistics.

mod dashboard_model;

pub use dashboard_model::{summarize, DashboardSummary};
