// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `trackify_charts_demo`.

use std::fmt::Write as _;

use kurbo::{Point, Rect, Vec2};
use peniko::Color;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TextAnchor {
    Start,
    Middle,
}

/// A drawable SVG element.
#[derive(Clone, Debug)]
pub(crate) enum SvgElement {
    Rect {
        rect: Rect,
        corner_radius: f64,
        fill: Color,
    },
    Path {
        d: String,
        translate: Vec2,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: Option<Color>,
        stroke: Option<(Color, f64)>,
        /// `(dash length, dash offset)`, drawn with round caps.
        dash: Option<(f64, f64)>,
        rotate_degrees: f64,
    },
    Text {
        pos: Point,
        text: String,
        font_size: f64,
        anchor: TextAnchor,
        bold: bool,
        fill: Color,
    },
}

/// Elements with paint order, rendered sorted by `(z_index, insertion order)`.
#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    elements: Vec<(i32, SvgElement)>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn push(&mut self, z_index: i32, element: SvgElement) {
        self.elements.push((z_index, element));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        let _ = write!(
            out,
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        );
        out.push('\n');

        let mut order: Vec<usize> = (0..self.elements.len()).collect();
        // Stable sort keeps insertion order within a z-index.
        order.sort_by_key(|&i| self.elements[i].0);

        for i in order {
            write_element(&mut out, &self.elements[i].1);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_element(out: &mut String, element: &SvgElement) {
    match element {
        SvgElement::Rect {
            rect,
            corner_radius,
            fill,
        } => {
            let _ = write!(
                out,
                r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}""#,
                rect.x0,
                rect.y0,
                rect.width(),
                rect.height(),
                corner_radius
            );
            write_paint_attr(out, "fill", *fill);
            out.push_str("/>\n");
        }
        SvgElement::Path {
            d,
            translate,
            fill,
            stroke,
            stroke_width,
        } => {
            let _ = write!(out, r#"<path d="{d}""#);
            if *translate != Vec2::ZERO {
                let _ = write!(
                    out,
                    r#" transform="translate({} {})""#,
                    translate.x, translate.y
                );
            }
            write_paint_attr(out, "fill", *fill);
            if *stroke_width > 0.0 {
                write_paint_attr(out, "stroke", *stroke);
                let _ = write!(out, r#" stroke-width="{stroke_width}""#);
            }
            out.push_str("/>\n");
        }
        SvgElement::Circle {
            center,
            radius,
            fill,
            stroke,
            dash,
            rotate_degrees,
        } => {
            let _ = write!(
                out,
                r#"<circle cx="{}" cy="{}" r="{}""#,
                center.x, center.y, radius
            );
            match fill {
                Some(fill) => write_paint_attr(out, "fill", *fill),
                None => out.push_str(r#" fill="none""#),
            }
            if let Some((color, width)) = stroke {
                write_paint_attr(out, "stroke", *color);
                let _ = write!(out, r#" stroke-width="{width}""#);
            }
            if let Some((length, offset)) = dash {
                let _ = write!(
                    out,
                    r#" stroke-dasharray="{length} {length}" stroke-dashoffset="{offset}" stroke-linecap="round""#
                );
            }
            if *rotate_degrees != 0.0 {
                let _ = write!(
                    out,
                    r#" transform="rotate({} {} {})""#,
                    rotate_degrees, center.x, center.y
                );
            }
            out.push_str("/>\n");
        }
        SvgElement::Text {
            pos,
            text,
            font_size,
            anchor,
            bold,
            fill,
        } => {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="middle""#,
                pos.x, pos.y, font_size
            );
            out.push_str(match anchor {
                TextAnchor::Start => r#" text-anchor="start""#,
                TextAnchor::Middle => r#" text-anchor="middle""#,
            });
            if *bold {
                out.push_str(r#" font-weight="700""#);
            }
            write_paint_attr(out, "fill", *fill);
            out.push('>');
            out.push_str(&escape_xml(text));
            out.push_str("</text>\n");
        }
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    let _ = write!(out, r#" {name}="{value}""#);
    if let Some(o) = opacity {
        let _ = write!(out, r#" {name}-opacity="{o}""#);
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
