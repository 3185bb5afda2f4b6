// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Amount and percentage formatting for labels.

use alloc::string::String;
use core::fmt::Write as _;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The dashboard's currency symbol (Indian rupee).
pub const RUPEE: &str = "\u{20b9}";

/// Formats `amount` as `<symbol><grouped integer>[.<decimals>]`.
///
/// The integer part is grouped in thousands with `,`. Amounts are rounded to cents; whole
/// amounts print without decimals and trailing zeros are trimmed (`1,234.5`). Negative amounts
/// get a leading `-` before the symbol. Non-finite amounts print as-is.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    let mut out = String::new();
    if !amount.is_finite() {
        let _ = write!(out, "{symbol}{amount}");
        return out;
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "the value is a non-negative whole number; `as` saturates out-of-range values"
    )]
    let cents = (amount.abs() * 100.0).round() as u64;
    if amount < 0.0 && cents != 0 {
        out.push('-');
    }
    out.push_str(symbol);
    push_grouped(&mut out, cents / 100);

    let frac = cents % 100;
    if frac != 0 {
        if frac % 10 == 0 {
            let _ = write!(out, ".{}", frac / 10);
        } else {
            let _ = write!(out, ".{frac:02}");
        }
    }
    out
}

/// Formats a percentage rounded to the nearest whole number, e.g. `65%`.
pub fn format_percent(value: f64) -> String {
    let mut out = String::new();
    let rounded = value.round();
    if rounded == 0.0 {
        out.push_str("0%");
    } else {
        let _ = write!(out, "{rounded}%");
    }
    out
}

fn push_grouped(out: &mut String, value: u64) {
    let mut digits = String::new();
    let _ = write!(digits, "{value}");
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
}
