//! Offline helpers: address format checks and wei-style unit conversion.
//!
//! Conversions go through `f64`, so only about 15-16 significant digits
//! survive and `to_wei(1.1)` is not exact in its low digits. Wei amounts are `i128`
//! so whole-unit values far beyond `i64::MAX` wei (about 9.2 units) still fit.

use std::sync::LazyLock;

use regex::Regex;

/// Number of wei in one display unit.
pub const WEI_PER_UNIT: f64 = 1e18;

static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]{40}$").expect("address pattern is valid"));

/// Returns true iff `address` is `0x` followed by exactly 40 hex digits.
pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_PATTERN.is_match(address)
}

/// Converts a display amount to wei. Saturates at the `i128` bounds; NaN maps to 0.
pub fn to_wei(amount: f64) -> i128 {
    (amount * WEI_PER_UNIT) as i128
}

pub fn from_wei(wei: i128) -> f64 {
    wei as f64 / WEI_PER_UNIT
}
