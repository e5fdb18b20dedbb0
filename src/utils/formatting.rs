//! Safe display formatting for derived figures.
//!
//! The presentation layer renders whatever the calculator hands it; absent
//! values fall back to a neutral string instead of panicking or printing
//! garbage.

use rust_decimal::Decimal;

/// Fallback rendered for an absent monetary amount.
pub const CURRENCY_FALLBACK: &str = "$0";

/// Fallback rendered for an absent percentage.
pub const PERCENTAGE_FALLBACK: &str = "0%";

/// Formats a monetary amount as `$1,234.56`, falling back to [`CURRENCY_FALLBACK`]
/// when the value is absent.
pub fn format_currency(value: Option<Decimal>) -> String {
    match value {
        Some(amount) => format!("${}", group_thousands(&amount.to_string())),
        None => CURRENCY_FALLBACK.to_string(),
    }
}

/// Formats a whole percentage as `60%`, falling back to [`PERCENTAGE_FALLBACK`]
/// when the value is absent.
pub fn format_percentage(value: Option<i32>) -> String {
    match value {
        Some(percent) => format!("{}%", percent),
        None => PERCENTAGE_FALLBACK.to_string(),
    }
}

/// Inserts thousands separators into the integer part of a decimal string.
fn group_thousands(raw: &str) -> String {
    let (number, fraction) = match raw.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (raw, None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}
