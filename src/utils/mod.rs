pub mod formatting;
pub mod time_utils;
