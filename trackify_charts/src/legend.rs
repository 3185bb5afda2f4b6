// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category legend layout.
//!
//! The breakdown card lists every category under the chart as a round color swatch followed by
//! `"<name> - <amount>"`. Items flow left to right, wrap when the next one would overflow the
//! available width, and each row is centered.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write as _;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use peniko::color::palette::css;

use crate::format::format_amount;
use crate::measure::TextMeasurer;
use crate::{CategoryShare, z_order};

/// One legend row item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendItem {
    /// The label shown next to the swatch.
    pub label: String,
    /// The swatch color.
    pub color: Color,
}

impl LegendItem {
    /// Convenience constructor for a solid-color swatch.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }

    /// Builds the `"<name> - <amount>"` item for a chart category.
    pub fn for_share(share: &CategoryShare, currency_symbol: &str) -> Self {
        let mut label = String::new();
        let _ = write!(
            label,
            "{} - {}",
            share.label,
            format_amount(share.amount, currency_symbol)
        );
        Self {
            label,
            color: share.color,
        }
    }
}

/// A positioned legend item.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// Swatch circle center.
    pub swatch_center: Point,
    /// Swatch circle radius.
    pub swatch_radius: f64,
    /// Swatch color.
    pub color: Color,
    /// Label text (unshaped).
    pub label: String,
    /// Label anchor: start of the text, vertically centered.
    pub label_pos: Point,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Color,
    /// Item bounds, margins included.
    pub bounds: Rect,
    /// Rendering order hint for the swatch.
    pub swatch_z_index: i32,
    /// Rendering order hint for the label.
    pub label_z_index: i32,
}

/// An unpositioned category legend.
///
/// Use this with a measure/arrange layout pass:
/// - Measure: call [`CategoryLegendSpec::measure`] to get the desired size.
/// - Arrange: call [`CategoryLegendSpec::arrange`] once you know the origin.
#[derive(Clone, Debug)]
pub struct CategoryLegendSpec {
    /// Swatch circle diameter.
    pub swatch_size: f64,
    /// Horizontal gap between swatch and label.
    pub label_dx: f64,
    /// Margin around every item, on all sides.
    pub item_margin: f64,
    /// Label font size.
    pub font_size: f64,
    /// Label color.
    pub text_fill: Color,
    /// Width available for a row. Rows wrap before exceeding it.
    pub max_width: f64,
    /// Items in display order.
    pub items: Vec<LegendItem>,
}

impl CategoryLegendSpec {
    /// Creates a legend with the dashboard's defaults and unbounded width.
    pub fn new(items: Vec<LegendItem>) -> Self {
        Self {
            swatch_size: 12.0,
            label_dx: 6.0,
            item_margin: 6.0,
            font_size: 12.0,
            text_fill: css::BLACK,
            max_width: f64::INFINITY,
            items,
        }
    }

    /// Creates a legend listing each share with its formatted amount.
    pub fn from_shares(shares: &[CategoryShare], currency_symbol: &str) -> Self {
        Self::new(
            shares
                .iter()
                .map(|s| LegendItem::for_share(s, currency_symbol))
                .collect(),
        )
    }

    /// Sets the width rows wrap at.
    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = max_width.max(0.0);
        self
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the swatch diameter.
    pub fn with_swatch_size(mut self, swatch_size: f64) -> Self {
        self.swatch_size = swatch_size;
        self
    }

    /// Sets the label color.
    pub fn with_text_fill(mut self, text_fill: Color) -> Self {
        self.text_fill = text_fill;
        self
    }

    /// Measures the desired legend size.
    ///
    /// With a finite `max_width` the legend claims the full width, since rows are centered in it.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let rows = self.rows(measurer);
        let widest = rows.iter().map(|r| r.width).fold(0.0, f64::max);
        let height = rows.iter().map(|r| r.height).sum();
        let width = if self.max_width.is_finite() {
            self.max_width
        } else {
            widest
        };
        Size::new(width, height)
    }

    /// Positions every item with the legend's top-left corner at `origin`.
    pub fn arrange(&self, origin: Point, measurer: &dyn TextMeasurer) -> Vec<LegendEntry> {
        let rows = self.rows(measurer);
        let size = self.measure(measurer);
        let mut out = Vec::with_capacity(self.items.len());
        let mut y = origin.y;

        for row in &rows {
            let mut x = origin.x + ((size.width - row.width) * 0.5).max(0.0);
            for &(index, item_width) in &row.items {
                let item = &self.items[index];
                let m = self.item_margin.max(0.0);
                let mid_y = y + row.height * 0.5;
                let swatch_radius = self.swatch_size * 0.5;
                out.push(LegendEntry {
                    swatch_center: Point::new(x + m + swatch_radius, mid_y),
                    swatch_radius,
                    color: item.color,
                    label: item.label.clone(),
                    label_pos: Point::new(x + m + self.swatch_size + self.label_dx, mid_y),
                    font_size: self.font_size,
                    text_fill: self.text_fill,
                    bounds: Rect::new(x, y, x + item_width, y + row.height),
                    swatch_z_index: z_order::LEGEND_SWATCHES,
                    label_z_index: z_order::LEGEND_LABELS,
                });
                x += item_width;
            }
            y += row.height;
        }
        out
    }

    fn item_size(&self, item: &LegendItem, measurer: &dyn TextMeasurer) -> Size {
        let m = self.item_margin.max(0.0);
        let (w, h) = measurer.measure(&item.label, self.font_size);
        Size::new(
            m + self.swatch_size + self.label_dx + w + m,
            m + self.swatch_size.max(h) + m,
        )
    }

    fn rows(&self, measurer: &dyn TextMeasurer) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let size = self.item_size(item, measurer);
            let fits = rows
                .last()
                .is_some_and(|r| r.width + size.width <= self.max_width);
            if !fits {
                rows.push(Row::default());
            }
            if let Some(row) = rows.last_mut() {
                row.items.push((index, size.width));
                row.width += size.width;
                row.height = row.height.max(size.height);
            }
        }
        rows
    }
}

#[derive(Debug, Default)]
struct Row {
    /// `(item index, item width)` pairs.
    items: Vec<(usize, f64)>,
    width: f64,
    height: f64,
}
