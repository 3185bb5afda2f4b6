// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Monthly budget summary and the circular progress ring on the spending card.
//!
//! The ring is a stroked circle with a dash pattern of one circumference: shifting the dash by
//! the unspent share leaves exactly the spent share visible. It is rotated -90 degrees so
//! progress starts at 12 o'clock, like the donut slices.

use alloc::string::String;
use core::f64::consts::TAU;
use core::fmt::Write as _;

use kurbo::Point;
use peniko::Color;

use crate::format::{format_amount, format_percent};
use crate::{InvalidInput, z_order};

/// Amount spent against a monthly budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetSummary {
    /// Amount spent so far.
    pub spent: f64,
    /// Budget for the period. Always positive.
    pub budget: f64,
}

impl BudgetSummary {
    /// Creates a summary, rejecting budgets that are not positive.
    pub fn new(spent: f64, budget: f64) -> Result<Self, InvalidInput> {
        if !(budget.is_finite() && budget > 0.0) {
            return Err(InvalidInput::NonPositiveBudget { budget });
        }
        Ok(Self { spent, budget })
    }

    /// Returns the spent share of the budget in percent. May exceed 100.
    pub fn used_percent(&self) -> f64 {
        self.spent / self.budget * 100.0
    }

    /// Returns the width of the linear progress bar fill, in percent of the track.
    pub fn bar_fill_percent(&self) -> f64 {
        self.used_percent().clamp(0.0, 100.0)
    }

    /// Returns e.g. `"₹12,350 of ₹19,000 budget used"`.
    pub fn label(&self, currency_symbol: &str) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            "{} of {} budget used",
            format_amount(self.spent, currency_symbol),
            format_amount(self.budget, currency_symbol)
        );
        out
    }
}

/// Style and size of a circular progress ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressRingSpec {
    /// Side of the square the ring occupies.
    pub size: f64,
    /// Ring stroke width.
    pub stroke_width: f64,
    /// Color of the unfilled track.
    pub track_color: Color,
    /// Color of the progress arc.
    pub progress_color: Color,
    /// Color of the centered percentage label.
    pub label_color: Color,
    /// Font size of the centered percentage label.
    pub label_font_size: f64,
}

impl ProgressRingSpec {
    /// Creates a ring spec with the dashboard's green palette.
    pub fn new(size: f64, stroke_width: f64) -> Self {
        Self {
            size,
            stroke_width,
            track_color: Color::from_rgb8(0xd1, 0xfa, 0xe5),
            progress_color: Color::from_rgb8(0x16, 0xa3, 0x4a),
            label_color: Color::from_rgb8(0x15, 0x80, 0x3d),
            label_font_size: 14.0,
        }
    }

    /// Returns the radius of the stroke's centerline.
    pub fn radius(&self) -> f64 {
        ((self.size - self.stroke_width) / 2.0).max(0.0)
    }

    /// Returns the length of the ring's centerline.
    pub fn circumference(&self) -> f64 {
        TAU * self.radius()
    }

    /// Returns the dash offset that reveals `percent` of the ring.
    ///
    /// `percent` is clamped to `[0, 100]` so overspending draws a full ring rather than wrapping.
    pub fn dash_offset(&self, percent: f64) -> f64 {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        self.circumference() * ((100.0 - percent) / 100.0)
    }

    /// Positions the ring with its top-left corner at `origin`.
    ///
    /// The label shows the unclamped percentage.
    pub fn ring(&self, origin: Point, percent: f64) -> ProgressRing {
        let half = self.size / 2.0;
        ProgressRing {
            center: Point::new(origin.x + half, origin.y + half),
            radius: self.radius(),
            stroke_width: self.stroke_width,
            circumference: self.circumference(),
            dash_offset: self.dash_offset(percent),
            rotation_degrees: -90.0,
            label: format_percent(percent),
            track_color: self.track_color,
            progress_color: self.progress_color,
            label_color: self.label_color,
            label_font_size: self.label_font_size,
            track_z_index: z_order::RING_TRACK,
            progress_z_index: z_order::RING_PROGRESS,
            label_z_index: z_order::RING_LABEL,
        }
    }
}

impl Default for ProgressRingSpec {
    fn default() -> Self {
        Self::new(48.0, 6.0)
    }
}

/// A positioned progress ring.
///
/// Draw the track as a plain stroked circle, then the progress circle with dash array
/// `circumference circumference`, the given dash offset, round caps and the rotation applied
/// about `center`; finally the label centered on `center`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressRing {
    /// Ring center.
    pub center: Point,
    /// Stroke centerline radius.
    pub radius: f64,
    /// Stroke width.
    pub stroke_width: f64,
    /// Dash length and gap.
    pub circumference: f64,
    /// Dash offset hiding the unfilled share.
    pub dash_offset: f64,
    /// Rotation about `center`, in degrees.
    pub rotation_degrees: f64,
    /// Percentage label, e.g. `65%`.
    pub label: String,
    /// Track color.
    pub track_color: Color,
    /// Progress arc color.
    pub progress_color: Color,
    /// Label color.
    pub label_color: Color,
    /// Label font size.
    pub label_font_size: f64,
    /// Rendering order hint for the track.
    pub track_z_index: i32,
    /// Rendering order hint for the progress arc.
    pub progress_z_index: i32,
    /// Rendering order hint for the label.
    pub label_z_index: i32,
}
