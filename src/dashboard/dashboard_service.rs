//! Aggregates per-asset lifecycle metrics into register-wide figures.
//!
//! Each asset's metrics are an independent pure computation, so the
//! aggregation is a plain fold; callers that need parallelism can map the
//! calculator over chunks of the slice with no coordination.

use chrono::NaiveDateTime;
use log::{debug, warn};

use crate::assets::{Asset, AssetStatus, UNCATEGORIZED, UNSPECIFIED_LOCATION};
use crate::dashboard::dashboard_model::DashboardStats;
use crate::errors::Result;
use crate::lifecycle::calculate_metrics;
use crate::utils::time_utils::evaluation_instant_now;

/// Calculates fleet-wide statistics for the given assets at one instant.
///
/// Fails on the first asset that does not validate; a register screen
/// built on partial sums would quietly under-report value.
pub fn calculate_dashboard_stats(
    assets: &[Asset],
    evaluated_at: NaiveDateTime,
) -> Result<DashboardStats> {
    let mut stats = DashboardStats {
        total_assets: assets.len() as u64,
        ..Default::default()
    };

    for asset in assets {
        let metrics = match calculate_metrics(asset, evaluated_at) {
            Ok(metrics) => metrics,
            Err(err) => {
                warn!(
                    "Dashboard aggregation failed on asset {}: {}",
                    asset.id, err
                );
                return Err(err);
            }
        };

        stats.total_value += metrics.current_value;
        stats.depreciated_value += metrics.accumulated_depreciation;

        if asset.status == AssetStatus::Active {
            stats.active_assets += 1;
        }
        if asset.status != AssetStatus::Disposed {
            if metrics.maintenance_overdue {
                stats.maintenance_due += 1;
            }
            if metrics.is_overdue {
                stats.disposal_due += 1;
            }
        }

        let category = asset
            .category
            .clone()
            .unwrap_or_else(|| UNCATEGORIZED.to_string());
        *stats.assets_by_category.entry(category).or_insert(0) += 1;

        let location = asset
            .location
            .clone()
            .unwrap_or_else(|| UNSPECIFIED_LOCATION.to_string());
        *stats.assets_by_location.entry(location).or_insert(0) += 1;
    }

    debug!(
        "Aggregated {} assets at {}: {} maintenance due, {} disposal due",
        stats.total_assets, evaluated_at, stats.maintenance_due, stats.disposal_due
    );
    Ok(stats)
}

/// Convenience wrapper evaluating at the current wall-clock instant.
pub fn calculate_dashboard_stats_now(assets: &[Asset]) -> Result<DashboardStats> {
    calculate_dashboard_stats(assets, evaluation_instant_now())
}
