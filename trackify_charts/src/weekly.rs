// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "Weekly Overview" bar chart: one bottom-aligned column per day.
//!
//! Each column stacks, from the bottom up, the day name, the amount label and the bar. Bar heights
//! are the day's share of the busiest day in percent, read directly as chart units, then capped
//! at `max_bar_height` and floored at `min_bar_height`.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;

use crate::format::{RUPEE, format_amount};
use crate::measure::TextMeasurer;
use crate::z_order;

/// One day of spending.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyAmount {
    /// Short day name, e.g. `"Mon"`.
    pub day: String,
    /// Amount spent that day.
    pub amount: f64,
}

impl DailyAmount {
    /// Creates a day entry.
    pub fn new(day: impl Into<String>, amount: f64) -> Self {
        Self {
            day: day.into(),
            amount,
        }
    }

    fn chart_amount(&self) -> f64 {
        if self.amount.is_finite() {
            self.amount.max(0.0)
        } else {
            0.0
        }
    }
}

/// Returns `amount` as a percentage of `max`.
///
/// Zero when `max` is not a positive finite number, so an idle week draws flat bars.
pub fn bar_height_percent(amount: f64, max: f64) -> f64 {
    if !(max.is_finite() && max > 0.0) {
        return 0.0;
    }
    (amount / max * 100.0).max(0.0)
}

/// An unpositioned weekly bar chart.
#[derive(Clone, Debug)]
pub struct WeeklyChartSpec {
    /// Days in display order.
    pub days: Vec<DailyAmount>,
    /// Total chart height. Columns are aligned to its bottom edge.
    pub height: f64,
    /// Bar width.
    pub bar_width: f64,
    /// Bar corner radius.
    pub corner_radius: f64,
    /// Height cap for the tallest bars.
    pub max_bar_height: f64,
    /// Height floor, so idle days still show a stub.
    pub min_bar_height: f64,
    /// Vertical gap below the bar and below the amount label.
    pub spacing: f64,
    /// Font size for amount and day labels.
    pub font_size: f64,
    /// Bar color.
    pub bar_fill: Color,
    /// Amount label color.
    pub amount_fill: Color,
    /// Day label color.
    pub day_fill: Color,
    /// Currency symbol for amount labels.
    pub currency_symbol: String,
}

impl WeeklyChartSpec {
    /// Creates a chart with the dashboard's defaults.
    pub fn new(days: Vec<DailyAmount>) -> Self {
        Self {
            days,
            height: 150.0,
            bar_width: 20.0,
            corner_radius: 4.0,
            max_bar_height: 80.0,
            min_bar_height: 8.0,
            spacing: 4.0,
            font_size: 12.0,
            bar_fill: Color::from_rgba8(0x16, 0xa3, 0x4a, 0xff),
            amount_fill: Color::from_rgba8(0x16, 0xa3, 0x4a, 0xff),
            day_fill: Color::from_rgba8(0x6b, 0x72, 0x80, 0xff),
            currency_symbol: String::from(RUPEE),
        }
    }

    /// Sets the total chart height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the currency symbol used in amount labels.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Returns the largest daily amount, or zero for an empty or idle week.
    pub fn max_amount(&self) -> f64 {
        self.days
            .iter()
            .map(DailyAmount::chart_amount)
            .fold(0.0, f64::max)
    }

    /// Returns each day's bar height in chart units, in display order.
    pub fn bar_heights(&self) -> Vec<f64> {
        let max = self.max_amount();
        let floor = self.min_bar_height.max(0.0);
        let cap = self.max_bar_height.max(floor);
        self.days
            .iter()
            .map(|d| bar_height_percent(d.chart_amount(), max).clamp(floor, cap))
            .collect()
    }

    /// Positions every column in a `width` wide chart with its top-left corner at `origin`.
    ///
    /// Columns split the width evenly and each bar is centered in its column.
    pub fn arrange(&self, origin: Point, width: f64, measurer: &dyn TextMeasurer) -> Vec<WeeklyBar> {
        if self.days.is_empty() {
            return Vec::new();
        }
        let heights = self.bar_heights();
        #[allow(
            clippy::cast_precision_loss,
            reason = "a week has a handful of days"
        )]
        let column_w = width.max(0.0) / self.days.len() as f64;
        let bottom = origin.y + self.height;
        let gap = self.spacing.max(0.0);

        self.days
            .iter()
            .zip(heights)
            .enumerate()
            .map(|(i, (day, bar_h))| {
                #[allow(
                    clippy::cast_precision_loss,
                    reason = "a week has a handful of days"
                )]
                let mid_x = origin.x + column_w * (i as f64 + 0.5);

                let (_, day_h) = measurer.measure(&day.day, self.font_size);
                let day_pos = Point::new(mid_x, bottom - day_h * 0.5);

                let amount_label = format_amount(day.amount, &self.currency_symbol);
                let (_, amount_h) = measurer.measure(&amount_label, self.font_size);
                let amount_bottom = bottom - day_h - gap;
                let amount_pos = Point::new(mid_x, amount_bottom - gap - amount_h * 0.5);

                let bar_bottom = amount_bottom - gap - amount_h - gap;
                let half_w = self.bar_width * 0.5;
                let bar = Rect::new(mid_x - half_w, bar_bottom - bar_h, mid_x + half_w, bar_bottom);

                WeeklyBar {
                    bar,
                    corner_radius: self.corner_radius,
                    bar_fill: self.bar_fill,
                    amount_label,
                    amount_pos,
                    amount_fill: self.amount_fill,
                    day_label: day.day.clone(),
                    day_pos,
                    day_fill: self.day_fill,
                    font_size: self.font_size,
                    bar_z_index: z_order::BARS,
                    label_z_index: z_order::BAR_LABELS,
                }
            })
            .collect()
    }
}

/// A positioned weekly column.
///
/// Label positions are text anchors: horizontally centered, vertically at the text's middle.
#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyBar {
    /// Bar rectangle.
    pub bar: Rect,
    /// Bar corner radius.
    pub corner_radius: f64,
    /// Bar color.
    pub bar_fill: Color,
    /// Formatted amount.
    pub amount_label: String,
    /// Amount label anchor.
    pub amount_pos: Point,
    /// Amount label color.
    pub amount_fill: Color,
    /// Day name.
    pub day_label: String,
    /// Day label anchor.
    pub day_pos: Point,
    /// Day label color.
    pub day_fill: Color,
    /// Font size for both labels.
    pub font_size: f64,
    /// Rendering order hint for the bar.
    pub bar_z_index: i32,
    /// Rendering order hint for the labels.
    pub label_z_index: i32,
}
