// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for the Trackify expense dashboard.
//!
//! The heart of this crate is the donut slice geometry: [`compute_slices`] turns a list of
//! category amounts into closed SVG wedge paths laid out clockwise from 12 o'clock, with a fixed
//! angular gap taken from each slice's trailing edge. A [`MaskDisk`] painted on top hollows the
//! wedges into a ring.
//!
//! Around it sit the pieces the dashboard cards need:
//! - **Legends** listing each category with its formatted amount.
//! - **Budget rings** showing how much of the monthly budget is spent.
//! - **Weekly bars** comparing each day with the busiest one.
//! - **Breakdowns** folding individual expenses into per-category shares.
//! - **Card layout** stacking title, chart and legend.
//!
//! Everything here is a pure function of its inputs. Output is expressed as geometry and SVG
//! path data; drawing it is left to the rendering surface.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod breakdown;
mod card;
mod config;
mod donut;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod measure;
mod path;
mod progress;
mod share;
mod slice;
mod weekly;
mod z_order;

pub use breakdown::{ExpenseRecord, category_breakdown, total_spent};
pub use card::{BreakdownCard, BreakdownCardSpec, CardTitle};
pub use config::ChartConfig;
pub use donut::{DonutChart, DonutChartSpec};
pub use error::InvalidInput;
pub use format::{RUPEE, format_amount, format_percent};
pub use layout::{CardLayout, CardLayoutSpec};
pub use legend::{CategoryLegendSpec, LegendEntry, LegendItem};
pub use measure::{HeuristicTextMeasurer, TextMeasurer};
pub use path::{PathCommand, SvgPath};
pub use progress::{BudgetSummary, ProgressRing, ProgressRingSpec};
pub use share::{CategoryShare, percentages, total_amount};
pub use slice::{ArcSlice, MaskDisk, compute_slices, mask_disk};
pub use weekly::{DailyAmount, WeeklyBar, WeeklyChartSpec, bar_height_percent};
pub use z_order::*;
