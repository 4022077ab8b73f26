//! Business logic that sits between routes and the store.

pub mod dashboard;

pub use dashboard::{DashboardReport, Period, build_report};
