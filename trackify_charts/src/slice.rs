// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut slice geometry.
//!
//! Slices are laid out clockwise from 12 o'clock in input order. Each slice owns its full
//! proportional share of the circle and gives up `gap_degrees` at its trailing edge, so the gap
//! never accumulates across slices. Outlines are closed wedges (center, leading edge, arc,
//! back to center); a [`MaskDisk`] painted over them leaves only the stroked ring visible.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Circle, Point};
use peniko::Color;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;
use crate::path::SvgPath;
use crate::share::{net_amount, total_amount};
use crate::{CategoryShare, ChartConfig, InvalidInput};

/// Converts a cumulative percentage into degrees.
const DEGREES_PER_PERCENT: f64 = 3.6;

/// Screen angle of 12 o'clock, in degrees from the positive x axis.
const TOP_OFFSET_DEGREES: f64 = -90.0;

/// One drawable slice of a donut chart.
///
/// Angles are in degrees, clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSlice {
    /// Closed wedge outline: `M center L start A r,r 0 large,1 end Z`.
    pub path: SvgPath,
    /// Outline color, taken from the category.
    pub stroke_color: Color,
    /// Outline width, taken from the chart config.
    pub stroke_width: f64,
    /// This category's share of the total, in `[0, 1]`.
    pub fraction: f64,
    /// Leading edge.
    pub start_degrees: f64,
    /// Trailing edge before the gap is applied.
    pub owned_end_degrees: f64,
    /// Trailing edge after the gap is applied. Never before `start_degrees`.
    pub end_degrees: f64,
    /// Whether the arc command takes the long way around.
    pub large_arc: bool,
}

impl ArcSlice {
    /// Returns the drawn angular span.
    pub fn sweep_degrees(&self) -> f64 {
        self.end_degrees - self.start_degrees
    }

    /// Returns the span this slice owns, gap included.
    pub fn owned_degrees(&self) -> f64 {
        self.owned_end_degrees - self.start_degrees
    }

    /// Returns `false` for zero-width slices, which renderers should skip.
    pub fn is_visible(&self) -> bool {
        self.sweep_degrees() > 0.0
    }

    /// Returns the SVG `d` attribute for this slice.
    pub fn path_data(&self) -> String {
        self.path.to_string()
    }
}

/// The filled disk painted over every slice to hollow out the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskDisk {
    /// Center in chart coordinates.
    pub center: Point,
    /// Radius, never negative.
    pub radius: f64,
}

impl MaskDisk {
    /// Returns the disk as a `kurbo::Circle`.
    pub fn to_circle(self) -> Circle {
        Circle::new(self.center, self.radius)
    }
}

/// Returns the mask disk for `config`: the slice radius minus half the stroke.
pub fn mask_disk(config: &ChartConfig) -> MaskDisk {
    MaskDisk {
        center: config.center_point(),
        radius: (config.radius - config.stroke_width / 2.0).max(0.0),
    }
}

/// Computes one slice per share, in input order.
///
/// The amounts must add up to a positive total, negative amounts included. Shares with negative
/// amounts then become zero-width slices and the rest split the circle. When a slice is narrower than the gap
/// its trailing edge is clamped to its leading edge instead of sweeping backwards.
///
/// With a single category the gap is still taken from the trailing edge, leaving a visible notch
/// at 12 o'clock.
pub fn compute_slices(
    shares: &[CategoryShare],
    config: &ChartConfig,
) -> Result<Vec<ArcSlice>, InvalidInput> {
    config.validate()?;
    if shares.is_empty() {
        return Err(InvalidInput::EmptyShares);
    }
    if let Some(index) = shares.iter().position(|s| !s.amount.is_finite()) {
        return Err(InvalidInput::NonFiniteAmount { index });
    }

    let net = net_amount(shares);
    if !(net > 0.0) {
        return Err(InvalidInput::NonPositiveTotal { total: net });
    }
    let total = total_amount(shares);
    if !total.is_finite() {
        return Err(InvalidInput::NonFiniteTotal { total });
    }

    let (slices, cumulative) = shares.iter().enumerate().fold(
        (Vec::with_capacity(shares.len()), 0.0),
        |(mut slices, cumulative), (index, share)| {
            if share.amount < 0.0 {
                tracing::warn!(index, amount = share.amount, "negative amount drawn as empty slice");
            }
            let (slice, next) = slice_at(share, total, cumulative, config);
            tracing::trace!(
                index,
                start = slice.start_degrees,
                end = slice.end_degrees,
                large_arc = slice.large_arc,
                "slice"
            );
            slices.push(slice);
            (slices, next)
        },
    );
    tracing::debug!(
        count = slices.len(),
        total,
        cumulative,
        "computed donut slices"
    );
    Ok(slices)
}

/// Lays out one slice starting at `cumulative` percent and returns it with the next start.
fn slice_at(
    share: &CategoryShare,
    total: f64,
    cumulative: f64,
    config: &ChartConfig,
) -> (ArcSlice, f64) {
    let fraction = share.chart_amount() / total;
    let percent = fraction * 100.0;

    let start_degrees = cumulative * DEGREES_PER_PERCENT;
    let owned_end_degrees = (cumulative + percent) * DEGREES_PER_PERCENT;
    let end_degrees = (owned_end_degrees - config.gap_degrees).max(start_degrees);
    let large_arc = percent > 50.0;

    let center = config.center_point();
    let mut path = SvgPath::new();
    path.move_to(center);
    path.line_to(point_on_circle(center, config.radius, start_degrees));
    path.arc_to(
        config.radius,
        large_arc,
        true,
        point_on_circle(center, config.radius, end_degrees),
    );
    path.close_path();

    let slice = ArcSlice {
        path,
        stroke_color: share.color,
        stroke_width: config.stroke_width,
        fraction,
        start_degrees,
        owned_end_degrees,
        end_degrees,
        large_arc,
    };
    (slice, cumulative + percent)
}

/// Returns the point at `degrees` clockwise from 12 o'clock.
fn point_on_circle(center: Point, radius: f64, degrees: f64) -> Point {
    let radians = (degrees + TOP_OFFSET_DEGREES).to_radians();
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use approx::assert_abs_diff_eq;
    use peniko::color::palette::css;

    use super::*;
    use crate::path::PathCommand;

    fn share(amount: f64) -> CategoryShare {
        CategoryShare::new("c", amount, css::TOMATO)
    }

    fn arc_end(slice: &ArcSlice) -> Point {
        match slice.path.commands()[2] {
            PathCommand::ArcTo { to, .. } => to,
            other => panic!("expected an arc command, got {other:?}"),
        }
    }

    #[test]
    fn halves_span_each_side_of_the_circle() {
        let config = ChartConfig::new(80.0).with_stroke_width(10.0);
        let slices = compute_slices(&[share(50.0), share(50.0)], &config).unwrap();

        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].start_degrees, 0.0);
        assert_eq!(slices[0].end_degrees, 180.0);
        assert_eq!(slices[1].start_degrees, 180.0);
        assert_eq!(slices[1].end_degrees, 360.0);
        assert!(!slices[0].large_arc && !slices[1].large_arc, "no slice exceeds half");

        assert_eq!(slices[0].path_data(), "M 85,85 L 85,5 A 80,80 0 0,1 85,165 Z");

        let end = arc_end(&slices[1]);
        assert_abs_diff_eq!(end.x, 85.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end.y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn gap_is_taken_from_the_trailing_edge_only() {
        let config = ChartConfig::new(50.0).with_gap_degrees(12.0);
        let slices = compute_slices(&[share(1.0), share(1.0), share(2.0)], &config).unwrap();

        assert_abs_diff_eq!(slices[0].start_degrees, 0.0);
        assert_abs_diff_eq!(slices[0].end_degrees, 78.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[1].start_degrees, 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[1].end_degrees, 168.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[2].start_degrees, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[2].end_degrees, 348.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[2].owned_end_degrees, 360.0, epsilon = 1e-9);
    }

    #[test]
    fn dominant_slice_takes_the_large_arc() {
        let config = ChartConfig::new(10.0);
        let slices = compute_slices(&[share(3.0), share(1.0)], &config).unwrap();
        assert!(slices[0].large_arc, "75% slice must take the long way");
        assert!(!slices[1].large_arc, "25% slice must take the short way");
        assert!(slices[0].path_data().contains(" 0 1,1 "));
    }

    #[test]
    fn exactly_half_is_not_a_large_arc() {
        let config = ChartConfig::new(10.0);
        let slices = compute_slices(&[share(1.0), share(1.0)], &config).unwrap();
        assert!(slices.iter().all(|s| !s.large_arc), "50% is not more than half");
    }

    #[test]
    fn single_category_keeps_the_trailing_gap() {
        let config = ChartConfig::new(80.0)
            .with_stroke_width(10.0)
            .with_gap_degrees(12.0);
        let slices = compute_slices(&[share(100.0)], &config).unwrap();

        assert_eq!(slices.len(), 1);
        assert_abs_diff_eq!(slices[0].sweep_degrees(), 348.0, epsilon = 1e-9);
        assert!(slices[0].large_arc, "a full-circle slice is more than half");
        assert!(slices[0].is_visible());
    }

    #[test]
    fn empty_or_zero_input_is_rejected() {
        let config = ChartConfig::new(80.0);
        assert_eq!(
            compute_slices(&[], &config),
            Err(InvalidInput::EmptyShares)
        );
        assert_eq!(
            compute_slices(&[share(0.0), share(0.0)], &config),
            Err(InvalidInput::NonPositiveTotal { total: 0.0 })
        );
        assert_eq!(
            compute_slices(&[share(1.0)], &ChartConfig::new(-1.0)),
            Err(InvalidInput::NonPositiveRadius { radius: -1.0 })
        );
        assert_eq!(
            compute_slices(&[share(1.0), share(f64::NAN)], &config),
            Err(InvalidInput::NonFiniteAmount { index: 1 })
        );
    }

    #[test]
    fn negative_amounts_count_against_the_total() {
        let config = ChartConfig::new(80.0);
        assert_eq!(
            compute_slices(&[share(5.0), share(-10.0)], &config),
            Err(InvalidInput::NonPositiveTotal { total: -5.0 })
        );
        assert_eq!(
            compute_slices(&[share(5.0), share(-5.0)], &config),
            Err(InvalidInput::NonPositiveTotal { total: 0.0 })
        );
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let config = ChartConfig::new(80.0);
        assert_eq!(
            compute_slices(&[share(1e308), share(1e308)], &config),
            Err(InvalidInput::NonFiniteTotal {
                total: f64::INFINITY
            })
        );
        let slices = compute_slices(&[share(1e307), share(1e307)], &config).unwrap();
        assert_abs_diff_eq!(slices[1].start_degrees, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn negative_amount_becomes_an_empty_slice() {
        let config = ChartConfig::new(20.0).with_gap_degrees(4.0);
        let slices = compute_slices(&[share(1.0), share(-5.0), share(1.0)], &config).unwrap();

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[1].fraction, 0.0);
        assert_eq!(slices[1].sweep_degrees(), 0.0);
        assert!(!slices[1].is_visible());
        assert_abs_diff_eq!(slices[1].start_degrees, 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slices[2].start_degrees, 180.0, epsilon = 1e-9);
    }

    #[test]
    fn slice_narrower_than_the_gap_does_not_sweep_backwards() {
        let config = ChartConfig::new(20.0).with_gap_degrees(12.0);
        let slices = compute_slices(&[share(99.0), share(1.0)], &config).unwrap();
        let thin = &slices[1];
        assert_abs_diff_eq!(thin.owned_degrees(), 3.6, epsilon = 1e-9);
        assert_eq!(thin.end_degrees, thin.start_degrees);
        assert!(!thin.is_visible());
    }

    #[test]
    fn output_is_deterministic() {
        let config = ChartConfig::default();
        let shares = vec![share(4500.0), share(3500.0), share(2500.0), share(1850.0)];
        let a = compute_slices(&shares, &config).unwrap();
        let b = compute_slices(&shares, &config).unwrap();
        let a: Vec<String> = a.iter().map(ArcSlice::path_data).collect();
        let b: Vec<String> = b.iter().map(ArcSlice::path_data).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn mask_disk_hides_the_inner_half_of_the_stroke() {
        let config = ChartConfig::new(80.0).with_stroke_width(10.0);
        let disk = mask_disk(&config);
        assert_eq!(disk.center, Point::new(85.0, 85.0));
        assert_eq!(disk.radius, 75.0);
        assert_eq!(disk.to_circle().radius, 75.0);

        let thick = ChartConfig::new(4.0).with_stroke_width(20.0);
        assert_eq!(mask_disk(&thick).radius, 0.0);
    }
}
