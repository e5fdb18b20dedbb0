/// Upper bound on useful life, in years. Anything above this is a data-entry
/// error and would push the disposal projection outside the supported
/// calendar range.
pub const MAX_USEFUL_LIFE_YEARS: u32 = 200;

/// Grouping key for assets without a category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Grouping key for assets without a location.
pub const UNSPECIFIED_LOCATION: &str = "Unspecified";
