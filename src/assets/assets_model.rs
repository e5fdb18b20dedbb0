//! Asset domain models.

use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::assets_constants::MAX_USEFUL_LIFE_YEARS;
use crate::errors::{Error, ValidationError};
use crate::utils::time_utils::parse_calendar_date;

/// Asset lifecycle state.
///
/// Not consumed by the metrics calculator itself; it gates which register
/// actions are permitted and which assets count towards fleet aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    #[default]
    Active,
    Maintenance,
    Disposed,
    Missing,
    Wip,
    UnderVerification,
    Inactive,
}

impl AssetStatus {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            AssetStatus::Active => "ACTIVE",
            AssetStatus::Maintenance => "MAINTENANCE",
            AssetStatus::Disposed => "DISPOSED",
            AssetStatus::Missing => "MISSING",
            AssetStatus::Wip => "WIP",
            AssetStatus::UnderVerification => "UNDER_VERIFICATION",
            AssetStatus::Inactive => "INACTIVE",
        }
    }

    /// Parses a status from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(AssetStatus::Active),
            "MAINTENANCE" => Some(AssetStatus::Maintenance),
            "DISPOSED" => Some(AssetStatus::Disposed),
            "MISSING" => Some(AssetStatus::Missing),
            "WIP" => Some(AssetStatus::Wip),
            "UNDER_VERIFICATION" => Some(AssetStatus::UnderVerification),
            "INACTIVE" => Some(AssetStatus::Inactive),
            _ => None,
        }
    }
}

/// How acquisition cost is allocated over the useful life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepreciationMethod {
    #[default]
    StraightLine,
    DecliningBalance,
}

impl DepreciationMethod {
    /// Returns the database string representation (SCREAMING_SNAKE_CASE).
    pub const fn as_db_str(&self) -> &'static str {
        match self {
            DepreciationMethod::StraightLine => "STRAIGHT_LINE",
            DepreciationMethod::DecliningBalance => "DECLINING_BALANCE",
        }
    }

    /// Parses a method from its database string.
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "STRAIGHT_LINE" => Some(DepreciationMethod::StraightLine),
            "DECLINING_BALANCE" => Some(DepreciationMethod::DecliningBalance),
            _ => None,
        }
    }
}

/// Validated domain model for a physical asset.
///
/// Construction goes through [`AssetRecord`] conversion; a value of this
/// type always carries a parseable purchase date and non-negative magnitudes,
/// so the lifecycle calculator never sees malformed input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub custodian: Option<String>,
    pub status: AssetStatus,

    // Financial lifecycle parameters
    pub purchase_date: NaiveDate,
    pub purchase_cost: Decimal,
    pub useful_life_years: u32,
    pub depreciation_method: DepreciationMethod,

    /// Last recorded maintenance event; the purchase date stands in when no
    /// maintenance has been recorded yet.
    pub maintenance_date: Option<NaiveDate>,
}

impl Asset {
    /// The date the recurring maintenance cycle is anchored on.
    pub fn last_maintenance_or_purchase(&self) -> NaiveDate {
        self.maintenance_date.unwrap_or(self.purchase_date)
    }
}

/// Untrusted wire shape of an asset as the backend returns it: string dates,
/// floating-point cost, everything optional. Field names follow the REST
/// payload (snake_case, Mongo-style `_id`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AssetRecord {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub custodian: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_cost: Option<f64>,
    pub useful_life_years: Option<i64>,
    pub depreciation_method: Option<String>,
    pub maintenance_date: Option<String>,
}

impl TryFrom<AssetRecord> for Asset {
    type Error = Error;

    /// Validation boundary for assets coming off the wire.
    ///
    /// Required fields must be present and well-formed; nothing here defaults
    /// silently, so a NaN cost or an unparseable date fails loudly instead of
    /// flowing into the depreciation figures.
    fn try_from(record: AssetRecord) -> Result<Self, Self::Error> {
        let id = record
            .id
            .ok_or(ValidationError::MissingField("_id"))?;

        let purchase_date_raw = record
            .purchase_date
            .ok_or(ValidationError::MissingField("purchase_date"))?;
        let purchase_date = parse_calendar_date(&purchase_date_raw).ok_or_else(|| {
            ValidationError::InvalidDate {
                field: "purchase_date",
                value: purchase_date_raw,
            }
        })?;

        let cost_raw = record
            .purchase_cost
            .ok_or(ValidationError::MissingField("purchase_cost"))?;
        let purchase_cost = Decimal::from_f64(cost_raw)
            .filter(|cost| !cost.is_sign_negative() || cost.is_zero())
            .ok_or_else(|| ValidationError::InvalidMagnitude {
                field: "purchase_cost",
                value: cost_raw.to_string(),
            })?;

        let life_raw = record
            .useful_life_years
            .ok_or(ValidationError::MissingField("useful_life_years"))?;
        let useful_life_years = u32::try_from(life_raw)
            .ok()
            .filter(|life| *life <= MAX_USEFUL_LIFE_YEARS)
            .ok_or_else(|| ValidationError::InvalidMagnitude {
                field: "useful_life_years",
                value: life_raw.to_string(),
            })?;

        let status = match record.status {
            Some(raw) => AssetStatus::from_db_str(&raw.to_ascii_uppercase()).ok_or_else(|| {
                ValidationError::InvalidInput(format!("Unknown asset status: '{}'", raw))
            })?,
            None => AssetStatus::default(),
        };

        let depreciation_method = match record.depreciation_method {
            Some(raw) => {
                DepreciationMethod::from_db_str(&raw.to_ascii_uppercase()).ok_or_else(|| {
                    ValidationError::InvalidInput(format!(
                        "Unknown depreciation method: '{}'",
                        raw
                    ))
                })?
            }
            None => DepreciationMethod::default(),
        };

        let maintenance_date = match record.maintenance_date {
            Some(raw) if !raw.is_empty() => {
                Some(parse_calendar_date(&raw).ok_or_else(|| ValidationError::InvalidDate {
                    field: "maintenance_date",
                    value: raw,
                })?)
            }
            _ => None,
        };

        Ok(Asset {
            id,
            name: record.name,
            category: record.category,
            location: record.location,
            custodian: record.custodian,
            status,
            purchase_date,
            purchase_cost,
            useful_life_years,
            depreciation_method,
            maintenance_date,
        })
    }
}
