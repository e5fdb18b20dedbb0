use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Seconds in a civil day.
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Average days per year (leap-year approximation).
///
/// Deliberately 365.25 rather than an exact calendar subtraction; the
/// depreciation output is calibrated against this average and changing it
/// would silently change financial figures.
pub const DAYS_PER_YEAR: Decimal = dec!(365.25);

/// Seconds per average year (365.25 * 86400).
pub const SECONDS_PER_YEAR: Decimal = dec!(31557600);

/// Decimal precision for monetary amounts.
pub const MONEY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for asset age display.
pub const AGE_DECIMAL_PRECISION: u32 = 1;

/// Length of the recurring maintenance cycle, in calendar years.
pub const MAINTENANCE_CYCLE_YEARS: i32 = 1;
