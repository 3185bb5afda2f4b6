// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart rendering parameters.

use kurbo::{Point, Size};

use crate::InvalidInput;

/// Parameters shared by every slice of one chart render.
///
/// The chart is drawn inside a square whose side is `2 * center()`: the stroke straddles the
/// circle of `radius`, so half of it is added around the circle to keep it from being clipped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Radius of the circle that slice arcs are traced on.
    pub radius: f64,
    /// Stroke width applied to every slice outline.
    pub stroke_width: f64,
    /// Angle, in degrees, pulled back from each slice's trailing edge.
    pub gap_degrees: f64,
}

impl ChartConfig {
    /// Creates a config with the given radius, no stroke and no gap.
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            stroke_width: 0.0,
            gap_degrees: 0.0,
        }
    }

    /// Sets the slice stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Sets the trailing gap between adjacent slices, in degrees.
    pub fn with_gap_degrees(mut self, gap_degrees: f64) -> Self {
        self.gap_degrees = gap_degrees;
        self
    }

    /// Returns the x and y coordinate of the chart center.
    pub fn center(&self) -> f64 {
        self.radius + self.stroke_width / 2.0
    }

    /// Returns the chart center as a point.
    pub fn center_point(&self) -> Point {
        let c = self.center();
        Point::new(c, c)
    }

    /// Returns the size of the square the chart occupies.
    pub fn view_size(&self) -> Size {
        let side = self.center() * 2.0;
        Size::new(side, side)
    }

    /// Checks the radius, stroke width and gap.
    ///
    /// NaN and infinite values are rejected.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(InvalidInput::NonPositiveRadius {
                radius: self.radius,
            });
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(InvalidInput::NegativeStrokeWidth {
                stroke_width: self.stroke_width,
            });
        }
        if !(self.gap_degrees.is_finite() && self.gap_degrees >= 0.0) {
            return Err(InvalidInput::NegativeGap {
                gap_degrees: self.gap_degrees,
            });
        }
        Ok(())
    }
}

impl Default for ChartConfig {
    /// The home dashboard's breakdown chart: radius 80, stroke 10, 12 degree gap.
    fn default() -> Self {
        Self::new(80.0).with_stroke_width(10.0).with_gap_degrees(12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_leaves_room_for_half_the_stroke() {
        let config = ChartConfig::new(80.0).with_stroke_width(10.0);
        assert_eq!(config.center(), 85.0);
        assert_eq!(config.view_size(), Size::new(170.0, 170.0));
        assert_eq!(config.center_point(), Point::new(85.0, 85.0));
    }

    #[test]
    fn validate_rejects_bad_parameters() {
        assert_eq!(
            ChartConfig::new(0.0).validate(),
            Err(InvalidInput::NonPositiveRadius { radius: 0.0 })
        );
        assert_eq!(
            ChartConfig::new(10.0).with_stroke_width(-1.0).validate(),
            Err(InvalidInput::NegativeStrokeWidth { stroke_width: -1.0 })
        );
        assert_eq!(
            ChartConfig::new(10.0).with_gap_degrees(-2.0).validate(),
            Err(InvalidInput::NegativeGap { gap_degrees: -2.0 })
        );
        assert!(
            ChartConfig::new(f64::NAN).validate().is_err(),
            "NaN radius must be rejected"
        );
        assert_eq!(ChartConfig::default().validate(), Ok(()));
    }
}
