// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The "Category Breakdown" dashboard card: title, donut chart and legend.
//!
//! The card owns layout for its parts. Geometry failures only affect the chart: the title and
//! legend are still laid out, and the chart slot is left for a placeholder.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use peniko::Color;
use peniko::color::palette::css;

use crate::format::RUPEE;
use crate::{
    CardLayout, CardLayoutSpec, CategoryLegendSpec, CategoryShare, ChartConfig, DonutChart,
    DonutChartSpec, InvalidInput, LegendEntry, TextMeasurer, z_order,
};

/// A card title.
#[derive(Clone, Debug, PartialEq)]
pub struct CardTitle {
    /// Title text (unshaped).
    pub text: String,
    /// Anchor: start of the text, vertically centered.
    pub pos: Point,
    /// Font size.
    pub font_size: f64,
    /// Text color.
    pub fill: Color,
    /// Rendering order hint.
    pub z_index: i32,
}

/// Inputs for the category breakdown card.
#[derive(Clone, Debug)]
pub struct BreakdownCardSpec {
    /// Title text.
    pub title: String,
    /// Title font size.
    pub title_font_size: f64,
    /// Title color.
    pub title_fill: Color,
    /// Currency symbol for legend amounts.
    pub currency_symbol: String,
    /// The chart.
    pub chart: DonutChartSpec,
    /// Card layout options. `title_height`, `chart_size` and `legend_size` are filled in by
    /// [`BreakdownCardSpec::build`].
    pub layout: CardLayoutSpec,
}

impl BreakdownCardSpec {
    /// Creates a card for `shares` drawn with `config`.
    pub fn new(shares: Vec<CategoryShare>, config: ChartConfig) -> Self {
        Self {
            title: String::from("Category Breakdown"),
            title_font_size: 16.0,
            title_fill: css::BLACK,
            currency_symbol: String::from(RUPEE),
            chart: DonutChartSpec::new(config).with_shares(shares),
            layout: CardLayoutSpec::default(),
        }
    }

    /// Sets the title text.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the currency symbol used in the legend.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Sets the outer card width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.layout.width = width;
        self
    }

    /// Measures, arranges and computes the card.
    pub fn build(&self, measurer: &dyn TextMeasurer) -> BreakdownCard {
        let (_, title_h) = measurer.measure(&self.title, self.title_font_size);
        let legend_spec =
            CategoryLegendSpec::from_shares(&self.chart.shares, &self.currency_symbol)
                .with_max_width(self.layout.inner_width());
        let legend_size = (!legend_spec.items.is_empty()).then(|| legend_spec.measure(measurer));

        let layout = CardLayout::arrange(&CardLayoutSpec {
            title_height: title_h,
            chart_size: self.chart.config.view_size(),
            legend_size,
            ..self.layout
        });

        let chart = self.chart.build();
        if let Err(err) = &chart {
            tracing::warn!(%err, "breakdown chart not drawn");
        }

        let legend = match layout.legend {
            Some(rect) => legend_spec.arrange(rect.origin(), measurer),
            None => Vec::new(),
        };

        BreakdownCard {
            title: CardTitle {
                text: self.title.clone(),
                pos: Point::new(layout.title.x0, layout.title.center().y),
                font_size: self.title_font_size,
                fill: self.title_fill,
                z_index: z_order::TITLES,
            },
            chart_rect: layout.chart,
            chart,
            legend,
            layout,
        }
    }
}

/// A laid-out breakdown card.
#[derive(Clone, Debug, PartialEq)]
pub struct BreakdownCard {
    /// Card layout rectangles.
    pub layout: CardLayout,
    /// Positioned title.
    pub title: CardTitle,
    /// Where the chart goes. Chart geometry is local to this rectangle's origin.
    pub chart_rect: Rect,
    /// Chart geometry, or why it cannot be drawn.
    pub chart: Result<DonutChart, InvalidInput>,
    /// Positioned legend entries.
    pub legend: Vec<LegendEntry>,
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::HeuristicTextMeasurer;

    fn shares() -> Vec<CategoryShare> {
        vec![
            CategoryShare::new("Food", 4500.0, css::GREEN),
            CategoryShare::new("Transport", 3500.0, css::ORANGE),
            CategoryShare::new("Bills", 1000.0, css::RED),
        ]
    }

    #[test]
    fn card_places_chart_between_title_and_legend() {
        let card = BreakdownCardSpec::new(shares(), ChartConfig::default())
            .build(&HeuristicTextMeasurer);

        let chart = card.chart.as_ref().unwrap();
        assert_eq!(chart.slices.len(), 3);
        assert_eq!(card.legend.len(), 3);
        assert_eq!(card.chart_rect.width(), 170.0);
        assert!(card.title.pos.y < card.chart_rect.y0);
        assert!(card.legend.iter().all(|e| e.bounds.y0 >= card.chart_rect.y1));
        assert!(card.layout.view.contains(card.legend[2].bounds.center()));
        assert_eq!(card.title.text, "Category Breakdown");
    }

    #[test]
    fn invalid_chart_still_lays_out_the_card() {
        let zeros = vec![CategoryShare::new("Food", 0.0, css::GREEN)];
        let card = BreakdownCardSpec::new(zeros, ChartConfig::default())
            .with_currency_symbol("$")
            .build(&HeuristicTextMeasurer);

        assert_eq!(
            card.chart,
            Err(InvalidInput::NonPositiveTotal { total: 0.0 })
        );
        assert_eq!(card.legend.len(), 1);
        assert_eq!(card.legend[0].label, "Food - $0");
        assert_eq!(card.chart_rect.height(), 170.0);
    }
}
