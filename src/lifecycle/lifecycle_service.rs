//! Asset lifecycle metrics calculator.
//!
//! Pure, deterministic transformation `(Asset, evaluation instant) ->
//! AssetMetrics`. The evaluation instant is an explicit parameter so the
//! same figures can be recomputed for any point in time; callers that want
//! wall-clock behavior use the `_now` wrapper.

use chrono::{NaiveDateTime, NaiveTime};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::assets::{Asset, DepreciationMethod, MAX_USEFUL_LIFE_YEARS};
use crate::constants::{
    AGE_DECIMAL_PRECISION, MAINTENANCE_CYCLE_YEARS, MONEY_DECIMAL_PRECISION, SECONDS_PER_YEAR,
};
use crate::errors::{Error, Result, ValidationError};
use crate::lifecycle::lifecycle_model::{AssetMetrics, DepreciationEntry, DepreciationSchedule};
use crate::utils::time_utils::{add_calendar_years, days_until, evaluation_instant_now};

/// Calculates lifecycle metrics for one asset at the given evaluation instant.
///
/// Age uses the 365.25-day average year. Accumulated depreciation is clamped
/// at the full purchase cost no matter how old the asset is, and book value
/// is floored at zero; the two figures always sum back to the purchase cost
/// for assets that are not yet fully depreciated.
pub fn calculate_metrics(asset: &Asset, evaluated_at: NaiveDateTime) -> Result<AssetMetrics> {
    validate_lifecycle_inputs(asset)?;

    let purchase_midnight = asset.purchase_date.and_time(NaiveTime::MIN);
    let elapsed_seconds = (evaluated_at - purchase_midnight).num_seconds();
    let age_in_years = Decimal::from(elapsed_seconds) / SECONDS_PER_YEAR;

    let depreciated_fraction = depreciated_fraction(
        asset.depreciation_method,
        age_in_years,
        asset.useful_life_years,
    );
    let accumulated_depreciation = round_money(depreciated_fraction * asset.purchase_cost);
    let current_value = (asset.purchase_cost - accumulated_depreciation).max(Decimal::ZERO);

    // Division guard: a zero-cost asset reads as 0% depreciated rather than
    // producing an undefined ratio.
    let depreciation_percentage = if asset.purchase_cost.is_zero() {
        0
    } else {
        whole_percent(depreciated_fraction)?
    };

    let next_maintenance_date = add_calendar_years(
        asset.last_maintenance_or_purchase(),
        MAINTENANCE_CYCLE_YEARS,
    );
    let days_to_maintenance = days_until(evaluated_at, next_maintenance_date);

    let disposal_date = add_calendar_years(asset.purchase_date, asset.useful_life_years as i32);
    let days_to_disposal = days_until(evaluated_at, disposal_date);

    Ok(AssetMetrics {
        age_in_years: age_in_years
            .round_dp_with_strategy(AGE_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero),
        accumulated_depreciation,
        current_value: round_money(current_value),
        depreciation_percentage,
        next_maintenance_date,
        days_to_maintenance,
        disposal_date,
        days_to_disposal,
        maintenance_overdue: days_to_maintenance < 0,
        is_overdue: days_to_disposal < 0,
    })
}

/// Convenience wrapper evaluating at the current wall-clock instant.
pub fn calculate_metrics_now(asset: &Asset) -> Result<AssetMetrics> {
    calculate_metrics(asset, evaluation_instant_now())
}

/// Builds the year-by-year depreciation schedule for an asset.
///
/// Per-year amounts are rounded to cents; the final year absorbs the rounding
/// remainder so the ending book value lands exactly on zero. A zero-year
/// useful life yields an empty schedule (the asset is fully depreciated at
/// acquisition).
pub fn build_depreciation_schedule(asset: &Asset) -> Result<DepreciationSchedule> {
    validate_lifecycle_inputs(asset)?;

    let life = asset.useful_life_years;
    let depreciable_base = round_money(asset.purchase_cost);
    let mut entries = Vec::with_capacity(life as usize);

    if life > 0 {
        let straight_line_annual = round_money(depreciable_base / Decimal::from(life));
        let declining_rate = dec!(2) / Decimal::from(life);

        let mut beginning_value = depreciable_base;
        let mut accumulated_depreciation = Decimal::ZERO;
        for year in 1..=life {
            let depreciation_amount = if year == life {
                // Final year writes the remaining book value off entirely
                beginning_value
            } else {
                let raw = match asset.depreciation_method {
                    DepreciationMethod::StraightLine => straight_line_annual,
                    DepreciationMethod::DecliningBalance => {
                        round_money(beginning_value * declining_rate)
                    }
                };
                raw.min(beginning_value)
            };
            let ending_value = beginning_value - depreciation_amount;
            accumulated_depreciation += depreciation_amount;

            entries.push(DepreciationEntry {
                year,
                beginning_value,
                depreciation_amount,
                ending_value,
                accumulated_depreciation,
            });
            beginning_value = ending_value;
        }
    }

    Ok(DepreciationSchedule {
        asset_id: asset.id.clone(),
        method: asset.depreciation_method,
        depreciable_base,
        entries,
    })
}

/// Fraction of the depreciable base consumed at the given age, in [0, 1] for
/// any non-negative age.
///
/// A zero-year useful life is treated as instantly fully depreciated rather
/// than rejected; that matches the register's observed behavior and keeps
/// the clamp the single source of the "never exceeds cost" invariant.
fn depreciated_fraction(
    method: DepreciationMethod,
    age_in_years: Decimal,
    useful_life_years: u32,
) -> Decimal {
    if useful_life_years == 0 {
        return Decimal::ONE;
    }
    match method {
        DepreciationMethod::StraightLine => {
            let annual_rate = Decimal::ONE / Decimal::from(useful_life_years);
            (age_in_years * annual_rate).min(Decimal::ONE)
        }
        DepreciationMethod::DecliningBalance => {
            if age_in_years <= Decimal::ZERO {
                return Decimal::ZERO;
            }
            let rate = dec!(2) / Decimal::from(useful_life_years);
            if rate >= Decimal::ONE {
                return Decimal::ONE;
            }
            let remaining = (Decimal::ONE - rate).powd(age_in_years);
            (Decimal::ONE - remaining).clamp(Decimal::ZERO, Decimal::ONE)
        }
    }
}

/// Re-checks the magnitudes the calculator divides by. Assets built through
/// the wire-record boundary already satisfy these, but the fields are public.
fn validate_lifecycle_inputs(asset: &Asset) -> Result<()> {
    if asset.purchase_cost.is_sign_negative() && !asset.purchase_cost.is_zero() {
        return Err(ValidationError::InvalidMagnitude {
            field: "purchase_cost",
            value: asset.purchase_cost.to_string(),
        }
        .into());
    }
    if asset.useful_life_years > MAX_USEFUL_LIFE_YEARS {
        return Err(ValidationError::InvalidMagnitude {
            field: "useful_life_years",
            value: asset.useful_life_years.to_string(),
        }
        .into());
    }
    Ok(())
}

fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
}

fn whole_percent(fraction: Decimal) -> Result<i32> {
    (fraction * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i32()
        .ok_or_else(|| {
            Error::Calculation(format!("Depreciation fraction out of range: {}", fraction))
        })
}
