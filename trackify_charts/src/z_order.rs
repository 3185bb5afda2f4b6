// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for dashboard card elements.
//!
//! Renderers should sort by `(z_index, insertion order)` for a deterministic tie-break.

/// Card background fills.
pub const CARD_BACKGROUND: i32 = -100;

/// Donut slice outlines.
pub const CHART_SLICES: i32 = 0;
/// The disk that hollows out the donut. Must stay above [`CHART_SLICES`].
pub const CHART_MASK: i32 = 10;

/// Weekly overview bars.
pub const BARS: i32 = 5;

/// Progress ring track (the unfilled circle).
pub const RING_TRACK: i32 = 20;
/// Progress ring arc.
pub const RING_PROGRESS: i32 = 30;
/// Progress ring percentage label.
pub const RING_LABEL: i32 = 40;

/// Legend swatches.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend labels.
pub const LEGEND_LABELS: i32 = 70;
/// Weekly overview amount and day labels.
pub const BAR_LABELS: i32 = 70;
/// Card titles.
pub const TITLES: i32 = 80;
