//! Value formatting for display: fixed-point token amounts, binary-prefix
//! scaling, and small text helpers shared by the presentation layer.

use std::fmt;

use chrono::{TimeZone, Utc};

/// Ordered binary-prefix table; the index is the number of divisions by 1024.
const UNIT_PREFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Render an integer token amount as a fixed-point decimal string.
///
/// The amount is interpreted as having `decimal_places` implied decimal
/// digits, so `pretty_value(12345, 2)` is `"123.45"`. The split is exact
/// integer arithmetic; with `decimal_places` of zero no decimal point is
/// rendered. `decimal_places` is a configured constant and is expected to
/// stay below 20 (the u64 decimal range).
pub fn pretty_value(amount: u64, decimal_places: u32) -> String {
    if decimal_places == 0 {
        return amount.to_string();
    }
    let scale = 10u64.pow(decimal_places);
    let whole = amount / scale;
    let fractional = amount % scale;
    format!("{}.{:0width$}", whole, fractional, width = decimal_places as usize)
}

/// Round to two decimal digits, for weight-style float display.
pub fn round_float(n: f64) -> f64 {
    (n * 100.0).round() / 100.0
}

/// A value scaled into binary-prefix range by [`divide_value_into_prefix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledValue {
    /// The scaled value, rounded to two decimal digits.
    pub value: f64,
    /// How many times the original value was divided by 1024.
    pub divisions: u32,
}

impl ScaledValue {
    pub fn prefix(&self) -> &'static str {
        unit_prefix(self.divisions)
    }
}

impl fmt::Display for ScaledValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.prefix();
        if prefix.is_empty() {
            write!(f, "{:.2}", self.value)
        } else {
            write!(f, "{:.2} {}", self.value, prefix)
        }
    }
}

/// Divide a large value by 1024 until it drops into prefix range.
///
/// `3000` scales to `2.93` after one division (K); `50_000_000` to `47.68`
/// after two (M). Values of 1024 or less are returned unscaled.
pub fn divide_value_into_prefix(value: f64) -> ScaledValue {
    let mut value = value;
    let mut divisions = 0u32;
    while value.is_finite() && value / 1024.0 > 1.0 {
        value /= 1024.0;
        divisions += 1;
    }

    ScaledValue {
        value: round_float(value),
        divisions,
    }
}

/// Letter code for a number of divisions by 1024.
///
/// Division counts beyond the table clamp to the last entry.
pub fn unit_prefix(divisions: u32) -> &'static str {
    UNIT_PREFIXES
        .get(divisions as usize)
        .copied()
        .unwrap_or(UNIT_PREFIXES[UNIT_PREFIXES.len() - 1])
}

/// Singular or plural form depending on the quantity.
pub fn plural<'a>(quantity: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if quantity == 1 { singular } else { plural }
}

/// Render a unix timestamp (seconds) for the transaction detail page.
///
/// Pinned to UTC so the same record renders identically everywhere.
pub fn format_timestamp(timestamp: i64) -> String {
    match Utc.timestamp_opt(timestamp, 0).single() {
        Some(dt) => dt.format("%m/%d/%Y %I:%M:%S %p").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_value_renders_fixed_point() {
        assert_eq!(pretty_value(12345, 2), "123.45");
        assert_eq!(pretty_value(100, 2), "1.00");
        assert_eq!(pretty_value(5, 2), "0.05");
        assert_eq!(pretty_value(0, 2), "0.00");
    }

    #[test]
    fn pretty_value_honors_configured_precision() {
        assert_eq!(pretty_value(12345, 0), "12345");
        assert_eq!(pretty_value(1, 6), "0.000001");
        assert_eq!(pretty_value(1_000_000, 6), "1.000000");
    }

    #[test]
    fn divide_value_scales_into_prefix_range() {
        let scaled = divide_value_into_prefix(3000.0);
        assert_eq!(scaled.divisions, 1);
        assert_eq!(scaled.value, 2.93);
        assert_eq!(scaled.prefix(), "K");

        let scaled = divide_value_into_prefix(50_000_000.0);
        assert_eq!(scaled.divisions, 2);
        assert_eq!(scaled.value, 47.68);
        assert_eq!(scaled.prefix(), "M");
    }

    #[test]
    fn divide_value_leaves_small_values_alone() {
        assert_eq!(divide_value_into_prefix(0.0), ScaledValue { value: 0.0, divisions: 0 });
        assert_eq!(divide_value_into_prefix(1023.0), ScaledValue {
            value: 1023.0,
            divisions: 0
        });
        // 1024 / 1024 is exactly 1, which is not > 1.
        assert_eq!(divide_value_into_prefix(1024.0), ScaledValue {
            value: 1024.0,
            divisions: 0
        });
        assert_eq!(divide_value_into_prefix(1025.0).divisions, 1);
    }

    #[test]
    fn scaled_value_displays_with_prefix() {
        assert_eq!(divide_value_into_prefix(3000.0).to_string(), "2.93 K");
        assert_eq!(divide_value_into_prefix(512.0).to_string(), "512.00");
    }

    #[test]
    fn unit_prefix_table() {
        let expected = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];
        for (divisions, prefix) in expected.iter().enumerate() {
            assert_eq!(unit_prefix(divisions as u32), *prefix);
        }
    }

    #[test]
    fn unit_prefix_clamps_beyond_table() {
        assert_eq!(unit_prefix(9), "Y");
        assert_eq!(unit_prefix(u32::MAX), "Y");
    }

    #[test]
    fn round_float_keeps_two_decimals() {
        assert_eq!(round_float(2.936), 2.94);
        assert_eq!(round_float(19.0), 19.0);
        assert_eq!(round_float(0.004), 0.0);
    }

    #[test]
    fn plural_picks_by_quantity() {
        assert_eq!(plural(1, "transaction", "transactions"), "transaction");
        assert_eq!(plural(0, "transaction", "transactions"), "transactions");
        assert_eq!(plural(2, "transaction", "transactions"), "transactions");
    }

    #[test]
    fn timestamp_renders_in_utc() {
        assert_eq!(format_timestamp(1_546_300_800), "01/01/2019 12:00:00 AM");
        assert_eq!(format_timestamp(1_546_347_723), "01/01/2019 01:02:03 PM");
    }
}
