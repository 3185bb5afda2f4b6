// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Precondition failures reported by the chart builders.

use thiserror::Error;

/// Inputs that cannot produce a drawable chart.
///
/// The geometry is a pure function of its inputs, so none of these are retryable. Callers should
/// decline to draw the chart (render nothing or a placeholder) instead of passing partial output
/// to a renderer.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum InvalidInput {
    /// No categories were supplied.
    #[error("no category shares to chart")]
    EmptyShares,
    /// The amounts add up to zero or less, so no slice has a defined fraction.
    #[error("total amount must be positive, got {total}")]
    NonPositiveTotal {
        /// The offending total.
        total: f64,
    },
    /// The chart amounts add up to more than `f64` can represent.
    #[error("total amount must be finite, got {total}")]
    NonFiniteTotal {
        /// The offending total.
        total: f64,
    },
    /// The chart radius is zero, negative or NaN.
    #[error("chart radius must be positive, got {radius}")]
    NonPositiveRadius {
        /// The offending radius.
        radius: f64,
    },
    /// The slice stroke width is negative or NaN.
    #[error("stroke width must not be negative, got {stroke_width}")]
    NegativeStrokeWidth {
        /// The offending stroke width.
        stroke_width: f64,
    },
    /// The inter-slice gap is negative or NaN.
    #[error("slice gap must not be negative, got {gap_degrees} degrees")]
    NegativeGap {
        /// The offending gap, in degrees.
        gap_degrees: f64,
    },
    /// An amount is NaN or infinite.
    #[error("amount at index {index} is not finite")]
    NonFiniteAmount {
        /// Position of the share in the input list.
        index: usize,
    },
    /// A budget ring was asked to compare against a budget of zero or less.
    #[error("budget must be positive, got {budget}")]
    NonPositiveBudget {
        /// The offending budget.
        budget: f64,
    },
}
