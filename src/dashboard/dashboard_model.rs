use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fleet-level summary of the asset register at one evaluation instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_assets: u64,
    pub active_assets: u64,

    /// Assets whose maintenance cycle is overdue (disposed assets excluded).
    pub maintenance_due: u64,

    /// Assets past their projected disposal date (disposed assets excluded).
    pub disposal_due: u64,

    /// Sum of current book values across the fleet.
    pub total_value: Decimal,

    /// Sum of accumulated depreciation across the fleet.
    pub depreciated_value: Decimal,

    pub assets_by_category: HashMap<String, u64>,
    pub assets_by_location: HashMap<String, u64>,
}
