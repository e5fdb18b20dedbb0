//! Assetledger Core - Asset lifecycle metrics for a fixed-asset register.
//!
//! This crate contains the pure financial-lifecycle computations of the
//! asset register: straight-line and declining-balance depreciation,
//! maintenance-cycle projection, disposal projection and fleet-level
//! aggregation. It is transport- and storage-agnostic; assets arrive as
//! untrusted wire records and are validated at the boundary before any
//! arithmetic runs.

pub mod assets;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod lifecycle;
pub mod utils;

// Re-export common types from the asset and lifecycle modules
pub use assets::*;
pub use dashboard::*;
pub use lifecycle::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
