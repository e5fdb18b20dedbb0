//! Derived lifecycle figures. Recomputed on demand, never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::DepreciationMethod;

/// Snapshot of an asset's financial lifecycle at one evaluation instant.
///
/// A pure function of the asset record and the instant; identical inputs
/// always produce an identical snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetMetrics {
    /// Elapsed time since purchase in average years, 1 decimal place.
    pub age_in_years: Decimal,

    /// Cost allocated to date, capped at the full purchase cost.
    pub accumulated_depreciation: Decimal,

    /// Book value: purchase cost minus accumulated depreciation, floored at 0.
    pub current_value: Decimal,

    /// Accumulated depreciation as a whole percent of purchase cost;
    /// 0 when the purchase cost itself is 0.
    pub depreciation_percentage: i32,

    /// Next maintenance due date (last maintenance + one calendar year).
    pub next_maintenance_date: NaiveDate,

    /// Signed days until the next maintenance due date; negative is overdue.
    pub days_to_maintenance: i64,

    /// Projected end of useful life (purchase date + useful life).
    pub disposal_date: NaiveDate,

    /// Signed days until the projected disposal date; negative is overdue.
    pub days_to_disposal: i64,

    pub maintenance_overdue: bool,
    pub is_overdue: bool,
}

/// One year of a depreciation schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationEntry {
    /// 1-based year of ownership.
    pub year: u32,
    pub beginning_value: Decimal,
    pub depreciation_amount: Decimal,
    pub ending_value: Decimal,
    pub accumulated_depreciation: Decimal,
}

/// Full year-by-year depreciation schedule for one asset.
///
/// The final year absorbs rounding so the ending book value is exactly zero
/// and the entries sum exactly to the depreciable base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepreciationSchedule {
    pub asset_id: String,
    pub method: DepreciationMethod,
    pub depreciable_base: Decimal,
    pub entries: Vec<DepreciationEntry>,
}
