//! Module for additional computational capabilities
pub mod math_utils;
pub mod test_helper;
pub mod uom_macros;
pub use math_utils::saturating_div;
