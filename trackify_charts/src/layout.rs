// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny measure/arrange layout helper for dashboard cards.
//!
//! Cards stack their parts vertically: a title, a centered chart, and an optional legend that
//! spans the card's inner width. Sizes come from a measure pass; this module only places them.

use kurbo::{Rect, Size};

/// Layout inputs for a single card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayoutSpec {
    /// Outer card width.
    pub width: f64,
    /// Padding inside the card edge, applied on all sides.
    pub padding: f64,
    /// Height reserved for the title.
    pub title_height: f64,
    /// Gap between the title and the chart.
    pub title_gap: f64,
    /// Chart extent. The chart is centered horizontally.
    pub chart_size: Size,
    /// Gap between the chart and the legend.
    pub chart_gap: f64,
    /// Desired legend size, if the card has a legend.
    pub legend_size: Option<Size>,
}

impl Default for CardLayoutSpec {
    fn default() -> Self {
        Self {
            width: 320.0,
            padding: 16.0,
            title_height: 0.0,
            title_gap: 12.0,
            chart_size: Size::ZERO,
            chart_gap: 16.0,
            legend_size: None,
        }
    }
}

impl CardLayoutSpec {
    /// Returns the width available to the card's content.
    pub fn inner_width(&self) -> f64 {
        (self.width - 2.0 * self.padding.max(0.0)).max(0.0)
    }
}

/// Output of the arrange pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardLayout {
    /// Outer card bounds.
    pub view: Rect,
    /// Title rectangle.
    pub title: Rect,
    /// Chart rectangle.
    pub chart: Rect,
    /// Legend rectangle (if any).
    pub legend: Option<Rect>,
}

impl CardLayout {
    /// Computes a layout from the provided specification.
    ///
    /// A card narrower than its chart grows to fit the chart.
    pub fn arrange(spec: &CardLayoutSpec) -> Self {
        let pad = spec.padding.max(0.0);
        let chart_w = spec.chart_size.width.max(0.0);
        let chart_h = spec.chart_size.height.max(0.0);
        let width = spec.width.max(chart_w + 2.0 * pad);
        let inner_w = width - 2.0 * pad;

        let mut y = pad;
        let title_h = spec.title_height.max(0.0);
        let title = Rect::new(pad, y, pad + inner_w, y + title_h);
        y += title_h;
        if title_h > 0.0 {
            y += spec.title_gap.max(0.0);
        }

        let chart_x = pad + (inner_w - chart_w) * 0.5;
        let chart = Rect::new(chart_x, y, chart_x + chart_w, y + chart_h);
        y += chart_h;

        let legend = spec.legend_size.map(|size| {
            y += spec.chart_gap.max(0.0);
            let legend_w = size.width.max(0.0).min(inner_w);
            let legend_x = pad + (inner_w - legend_w) * 0.5;
            let rect = Rect::new(legend_x, y, legend_x + legend_w, y + size.height.max(0.0));
            y += size.height.max(0.0);
            rect
        });

        Self {
            view: Rect::new(0.0, 0.0, width, y + pad),
            title,
            chart,
            legend,
        }
    }
}
