// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A tiny SVG path mini-language builder.
//!
//! Slice outlines have to reach the renderer as SVG path data with a real elliptical arc (`A`)
//! command, which `kurbo::BezPath` cannot express: it flattens arcs into cubic Béziers. So we
//! keep the four commands a slice needs and format them ourselves, and convert to a `BezPath`
//! only when a caller wants kurbo geometry.

use core::fmt;

use kurbo::{Arc, BezPath, Point, SvgArc, Vec2};
use smallvec::SmallVec;

/// One path command, in absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// `M x,y`
    MoveTo(Point),
    /// `L x,y`
    LineTo(Point),
    /// `A rx,ry x_rotation large_arc,sweep x,y`
    ArcTo {
        /// Ellipse radii.
        radii: Vec2,
        /// Ellipse rotation in degrees.
        x_rotation: f64,
        /// Take the arc spanning more than 180 degrees.
        large_arc: bool,
        /// Trace the arc in the positive-angle (clockwise on screen) direction.
        sweep: bool,
        /// End point.
        to: Point,
    },
    /// `Z`
    Close,
}

/// An SVG path made of absolute commands.
///
/// The `Display` impl produces the `d` attribute string, e.g.
/// `M 85,85 L 85,5 A 80,80 0 0,1 165,85 Z`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgPath {
    commands: SmallVec<[PathCommand; 4]>,
}

impl SvgPath {
    /// Creates an empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a move command.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::MoveTo(p.into()));
    }

    /// Appends a line command.
    pub fn line_to(&mut self, p: impl Into<Point>) {
        self.commands.push(PathCommand::LineTo(p.into()));
    }

    /// Appends a circular arc of `radius` with no rotation.
    pub fn arc_to(&mut self, radius: f64, large_arc: bool, sweep: bool, to: impl Into<Point>) {
        self.commands.push(PathCommand::ArcTo {
            radii: Vec2::new(radius, radius),
            x_rotation: 0.0,
            large_arc,
            sweep,
            to: to.into(),
        });
    }

    /// Appends a close command.
    pub fn close_path(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the commands in order.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Converts to a `BezPath`, approximating arcs with cubics within `tolerance`.
    ///
    /// Arcs whose end point equals their start point are dropped, matching how SVG renderers
    /// treat them.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut out = BezPath::new();
        let mut start = Point::ZERO;
        let mut current = Point::ZERO;
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    out.move_to(p);
                    start = p;
                    current = p;
                }
                PathCommand::LineTo(p) => {
                    out.line_to(p);
                    current = p;
                }
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let svg_arc = SvgArc {
                        from: current,
                        to,
                        radii,
                        x_rotation: x_rotation.to_radians(),
                        large_arc,
                        sweep,
                    };
                    match Arc::from_svg_arc(&svg_arc) {
                        Some(arc) => out.extend(arc.append_iter(tolerance)),
                        None if to != current => out.line_to(to),
                        None => {}
                    }
                    current = to;
                }
                PathCommand::Close => {
                    out.close_path();
                    current = start;
                }
            }
        }
        out
    }
}

impl fmt::Display for SvgPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *command {
                PathCommand::MoveTo(p) => write!(f, "M {},{}", Num(p.x), Num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L {},{}", Num(p.x), Num(p.y))?,
                PathCommand::ArcTo {
                    radii,
                    x_rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {},{} {} {},{} {},{}",
                    Num(radii.x),
                    Num(radii.y),
                    Num(x_rotation),
                    u8::from(large_arc),
                    u8::from(sweep),
                    Num(to.x),
                    Num(to.y),
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Shortest round-trip decimal form, with negative zero printed as `0`.
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;

    use approx::assert_abs_diff_eq;
    use kurbo::{PathEl, Shape};

    use super::*;

    fn quarter() -> SvgPath {
        let mut p = SvgPath::new();
        p.move_to((10.0, 10.0));
        p.line_to((10.0, 0.0));
        p.arc_to(10.0, false, true, (20.0, 10.0));
        p.close_path();
        p
    }

    #[test]
    fn formats_svg_path_data() {
        assert_eq!(
            quarter().to_string(),
            "M 10,10 L 10,0 A 10,10 0 0,1 20,10 Z"
        );
    }

    #[test]
    fn negative_zero_prints_as_zero() {
        let mut p = SvgPath::new();
        p.move_to((-0.0, 1.5));
        assert_eq!(p.to_string(), "M 0,1.5");
    }

    #[test]
    fn bez_path_approximates_the_arc() {
        let bez = quarter().to_bez_path(0.01);
        assert!(
            bez.elements().iter().any(|el| matches!(el, PathEl::CurveTo(..))),
            "arc should become cubic segments"
        );
        let bounds = bez.bounding_box();
        assert_abs_diff_eq!(bounds.x0, 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.y0, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.x1, 20.0, epsilon = 1e-6);
        assert_abs_diff_eq!(bounds.y1, 10.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_length_arc_is_dropped() {
        let mut p = SvgPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((0.0, -5.0));
        p.arc_to(5.0, true, true, (0.0, -5.0));
        p.close_path();
        let bez = p.to_bez_path(0.1);
        assert_eq!(bez.elements().len(), 3);
    }
}
