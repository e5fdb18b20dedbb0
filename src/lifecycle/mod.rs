//! Lifecycle module - the pure asset financial-lifecycle calculator.

mod lifecycle_model;
mod lifecycle_service;

#[cfg(test)]
mod lifecycle_service_tests;

// Re-export the public interface
pub use lifecycle_model::{AssetMetrics, DepreciationEntry, DepreciationSchedule};
pub use lifecycle_service::{
    build_depreciation_schedule, calculate_metrics, calculate_metrics_now,
};
