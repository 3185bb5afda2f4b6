// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input: one entry per spending category.

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A category's slice of the total, as supplied by the hosting screen.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    /// Display name, shown in the legend.
    pub label: String,
    /// Amount spent in this category. The currency is not interpreted.
    pub amount: f64,
    /// Stroke color for this category's slice and legend swatch.
    pub color: Color,
}

impl CategoryShare {
    /// Creates a share.
    pub fn new(label: impl Into<String>, amount: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            amount,
            color,
        }
    }

    /// Returns the amount used for slice sizing.
    ///
    /// Negative amounts collapse to zero so they produce a zero-width slice instead of sweeping
    /// backwards over the previous one.
    pub fn chart_amount(&self) -> f64 {
        self.amount.max(0.0)
    }
}

/// Sums the chart amounts of `shares`.
pub fn total_amount(shares: &[CategoryShare]) -> f64 {
    shares.iter().map(CategoryShare::chart_amount).sum()
}

/// Sums the raw amounts of `shares`, negative ones included.
pub(crate) fn net_amount(shares: &[CategoryShare]) -> f64 {
    shares.iter().map(|s| s.amount).sum()
}

/// Returns each share's percentage of the total, in input order.
///
/// All entries are zero when the total is not positive.
pub fn percentages(shares: &[CategoryShare]) -> Vec<f64> {
    let total = total_amount(shares);
    shares
        .iter()
        .map(|s| {
            if total > 0.0 {
                s.chart_amount() / total * 100.0
            } else {
                0.0
            }
        })
        .collect()
}
