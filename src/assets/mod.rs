//! Assets module - domain models and the wire-record validation boundary.

mod assets_constants;
mod assets_model;


// Re-export the public interface
pub use assets_constants::*;
pub use assets_model::{Asset, AssetRecord, AssetStatus, DepreciationMethod};
