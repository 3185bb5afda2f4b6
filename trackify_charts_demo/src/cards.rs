// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard cards drawn into SVG scenes.

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use peniko::color::palette::css;
use trackify_charts::{
    BreakdownCard, BudgetSummary, CARD_BACKGROUND, CHART_MASK, CardLayout, CardLayoutSpec,
    DonutChart, ProgressRingSpec, RING_PROGRESS, RING_TRACK, TITLES, TextMeasurer,
    WeeklyChartSpec, format_amount,
};

use crate::svg::{SvgElement, SvgScene, TextAnchor};

const CARD_RADIUS: f64 = 12.0;
const MUTED: Color = Color::from_rgba8(0x6b, 0x72, 0x80, 0xff);
const PLACEHOLDER_TEXT: &str = "No spending to chart yet";

/// Draws the category breakdown card.
///
/// When the chart geometry is invalid, a placeholder message takes the chart's place.
pub(crate) fn breakdown_card_svg(card: &BreakdownCard) -> String {
    let mut scene = SvgScene::default();
    scene.set_view_box(card.layout.view);
    push_card_background(&mut scene, card.layout.view);

    scene.push(
        card.title.z_index,
        SvgElement::Text {
            pos: card.title.pos,
            text: card.title.text.clone(),
            font_size: card.title.font_size,
            anchor: TextAnchor::Start,
            bold: true,
            fill: card.title.fill,
        },
    );

    match &card.chart {
        Ok(chart) => push_donut(&mut scene, chart, card.chart_rect.origin().to_vec2()),
        Err(_) => scene.push(
            CHART_MASK,
            SvgElement::Text {
                pos: card.chart_rect.center(),
                text: PLACEHOLDER_TEXT.to_string(),
                font_size: 12.0,
                anchor: TextAnchor::Middle,
                bold: false,
                fill: MUTED,
            },
        ),
    }

    for entry in &card.legend {
        scene.push(
            entry.swatch_z_index,
            SvgElement::Circle {
                center: entry.swatch_center,
                radius: entry.swatch_radius,
                fill: Some(entry.color),
                stroke: None,
                dash: None,
                rotate_degrees: 0.0,
            },
        );
        scene.push(
            entry.label_z_index,
            SvgElement::Text {
                pos: entry.label_pos,
                text: entry.label.clone(),
                font_size: entry.font_size,
                anchor: TextAnchor::Start,
                bold: false,
                fill: entry.text_fill,
            },
        );
    }

    scene.to_svg_string()
}

/// Pushes the donut's visible slices and its mask, offset by `origin`.
fn push_donut(scene: &mut SvgScene, chart: &DonutChart, origin: Vec2) {
    for slice in chart.visible_slices() {
        scene.push(
            chart.slice_z_index,
            SvgElement::Path {
                d: slice.path_data(),
                translate: origin,
                fill: css::WHITE,
                stroke: slice.stroke_color,
                stroke_width: slice.stroke_width,
            },
        );
    }
    scene.push(
        chart.mask_z_index,
        SvgElement::Circle {
            center: chart.mask.center + origin,
            radius: chart.mask.radius,
            fill: Some(css::WHITE),
            stroke: None,
            dash: None,
            rotate_degrees: 0.0,
        },
    );
}

/// Draws the monthly spending card: totals, a linear bar and the progress ring.
pub(crate) fn budget_card_svg(
    summary: &BudgetSummary,
    ring_spec: &ProgressRingSpec,
    currency_symbol: &str,
    width: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    let pad = 16.0;
    let heading = "Total Spent This Month";
    let (_, heading_h) = measurer.measure(heading, 14.0);
    let amount = format_amount(summary.spent, currency_symbol);
    let (_, amount_h) = measurer.measure(&amount, 28.0);
    let bar_h = 8.0;
    let caption = summary.label(currency_symbol);
    let (_, caption_h) = measurer.measure(&caption, 12.0);

    let content_h = heading_h + 4.0 + amount_h + 12.0 + bar_h + 8.0 + caption_h;
    let height = (content_h + 2.0 * pad).max(ring_spec.size + 2.0 * pad);
    let view = Rect::new(0.0, 0.0, width, height);

    let mut scene = SvgScene::default();
    scene.set_view_box(view);
    push_card_background(&mut scene, view);

    let mut y = pad;
    for (text, font_size, bold, h, fill) in [
        (heading.to_string(), 14.0, false, heading_h, css::BLACK),
        (amount, 28.0, true, amount_h, css::BLACK),
    ] {
        scene.push(
            TITLES,
            SvgElement::Text {
                pos: Point::new(pad, y + h * 0.5),
                text,
                font_size,
                anchor: TextAnchor::Start,
                bold,
                fill,
            },
        );
        y += h + 4.0;
    }
    y += 8.0;

    let track = Rect::new(pad, y, width - pad, y + bar_h);
    scene.push(
        RING_TRACK,
        SvgElement::Rect {
            rect: track,
            corner_radius: bar_h * 0.5,
            fill: ring_spec.track_color,
        },
    );
    let fill_w = track.width() * summary.bar_fill_percent() / 100.0;
    scene.push(
        RING_PROGRESS,
        SvgElement::Rect {
            rect: Rect::new(track.x0, track.y0, track.x0 + fill_w, track.y1),
            corner_radius: bar_h * 0.5,
            fill: ring_spec.progress_color,
        },
    );
    y = track.y1 + 8.0;

    scene.push(
        TITLES,
        SvgElement::Text {
            pos: Point::new(pad, y + caption_h * 0.5),
            text: caption,
            font_size: 12.0,
            anchor: TextAnchor::Start,
            bold: false,
            fill: MUTED,
        },
    );

    let ring = ring_spec.ring(
        Point::new(width - pad - ring_spec.size, pad),
        summary.used_percent(),
    );
    scene.push(
        ring.track_z_index,
        SvgElement::Circle {
            center: ring.center,
            radius: ring.radius,
            fill: None,
            stroke: Some((ring.track_color, ring.stroke_width)),
            dash: None,
            rotate_degrees: 0.0,
        },
    );
    scene.push(
        ring.progress_z_index,
        SvgElement::Circle {
            center: ring.center,
            radius: ring.radius,
            fill: None,
            stroke: Some((ring.progress_color, ring.stroke_width)),
            dash: Some((ring.circumference, ring.dash_offset)),
            rotate_degrees: ring.rotation_degrees,
        },
    );
    scene.push(
        ring.label_z_index,
        SvgElement::Text {
            pos: ring.center,
            text: ring.label,
            font_size: ring.label_font_size,
            anchor: TextAnchor::Middle,
            bold: true,
            fill: ring.label_color,
        },
    );

    scene.to_svg_string()
}

/// Draws the weekly overview card: a title over one bar column per day.
pub(crate) fn weekly_card_svg(
    spec: &WeeklyChartSpec,
    width: f64,
    measurer: &dyn TextMeasurer,
) -> String {
    let title = "Weekly Overview";
    let title_font_size = 16.0;
    let (_, title_h) = measurer.measure(title, title_font_size);
    let base = CardLayoutSpec {
        width,
        title_height: title_h,
        ..CardLayoutSpec::default()
    };
    let layout = CardLayout::arrange(&CardLayoutSpec {
        chart_size: Size::new(base.inner_width(), spec.height),
        ..base
    });

    let mut scene = SvgScene::default();
    scene.set_view_box(layout.view);
    push_card_background(&mut scene, layout.view);
    scene.push(
        TITLES,
        SvgElement::Text {
            pos: Point::new(layout.title.x0, layout.title.center().y),
            text: title.to_string(),
            font_size: title_font_size,
            anchor: TextAnchor::Start,
            bold: true,
            fill: css::BLACK,
        },
    );

    for column in spec.arrange(layout.chart.origin(), layout.chart.width(), measurer) {
        scene.push(
            column.bar_z_index,
            SvgElement::Rect {
                rect: column.bar,
                corner_radius: column.corner_radius,
                fill: column.bar_fill,
            },
        );
        for (pos, text, fill) in [
            (column.amount_pos, column.amount_label, column.amount_fill),
            (column.day_pos, column.day_label, column.day_fill),
        ] {
            scene.push(
                column.label_z_index,
                SvgElement::Text {
                    pos,
                    text,
                    font_size: column.font_size,
                    anchor: TextAnchor::Middle,
                    bold: false,
                    fill,
                },
            );
        }
    }

    scene.to_svg_string()
}

fn push_card_background(scene: &mut SvgScene, view: Rect) {
    scene.push(
        CARD_BACKGROUND,
        SvgElement::Rect {
            rect: view,
            corner_radius: CARD_RADIUS,
            fill: css::WHITE,
        },
    );
}
