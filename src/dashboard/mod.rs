//! Dashboard module - fleet-level aggregation of lifecycle metrics.

mod dashboard_model;
mod dashboard_service;

// Re-export the public interface
pub use dashboard_model::DashboardStats;
pub use dashboard_service::{calculate_dashboard_stats, calculate_dashboard_stats_now};
