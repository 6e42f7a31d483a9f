use std::num::IntErrorKind;
use tracing::trace;
use crate::parsing::regex::{RE_DECIMAL, RE_RADIX};

/// Turns the text of a numeric field into the value stored in state.
///
/// Empty input is 0. Decimal, exponent and `0x`/`0o`/`0b` forms are accepted, fractions
/// truncate toward zero and out-of-range values saturate at the `i32` bounds. Text that is
/// not a number at all also becomes 0, so state never holds a not-a-number value.
pub fn coerce_numeric_input(text: &str) -> i32 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0;
    }

    if RE_DECIMAL.is_match(trimmed) {
        // The pattern only admits forms f64 parsing understands
        return match trimmed.parse::<f64>() {
            Ok(value) => value as i32,
            Err(_) => 0,
        };
    }

    if let Some(caps) = RE_RADIX.captures(trimmed) {
        let radix = match &caps["radix"] {
            "x" | "X" => 16,
            "o" | "O" => 8,
            _ => 2,
        };
        return match u64::from_str_radix(&caps["digits"], radix) {
            Ok(value) => i32::try_from(value).unwrap_or(i32::MAX),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => i32::MAX,
            Err(_) => {
                trace!(input = trimmed, "Digits outside radix, coercing to 0");
                0
            }
        };
    }

    trace!(input = trimmed, "Not a number, coercing to 0");
    0
}
