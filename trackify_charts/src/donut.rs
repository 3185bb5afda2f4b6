// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut chart assembly: slices plus the mask disk drawn over them.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::slice::{compute_slices, mask_disk};
use crate::{ArcSlice, CategoryShare, ChartConfig, InvalidInput, MaskDisk, z_order};

/// A donut chart description: rendering parameters plus the categories to draw.
#[derive(Clone, Debug)]
pub struct DonutChartSpec {
    /// Radius, stroke width and gap.
    pub config: ChartConfig,
    /// Categories in drawing order.
    pub shares: Vec<CategoryShare>,
    /// Rendering order hint for the slices.
    pub slice_z_index: i32,
    /// Rendering order hint for the mask disk. Must paint above the slices.
    pub mask_z_index: i32,
}

impl DonutChartSpec {
    /// Creates a spec with no categories.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            shares: Vec::new(),
            slice_z_index: z_order::CHART_SLICES,
            mask_z_index: z_order::CHART_MASK,
        }
    }

    /// Appends one category.
    pub fn with_share(mut self, share: CategoryShare) -> Self {
        self.shares.push(share);
        self
    }

    /// Replaces the categories.
    pub fn with_shares(mut self, shares: impl IntoIterator<Item = CategoryShare>) -> Self {
        self.shares = shares.into_iter().collect();
        self
    }

    /// Computes the chart geometry.
    pub fn build(&self) -> Result<DonutChart, InvalidInput> {
        let slices = compute_slices(&self.shares, &self.config)?;
        Ok(DonutChart {
            center: self.config.center_point(),
            view_size: self.config.view_size(),
            slices,
            mask: mask_disk(&self.config),
            slice_z_index: self.slice_z_index,
            mask_z_index: self.mask_z_index.max(self.slice_z_index + 1),
        })
    }
}

impl Default for DonutChartSpec {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

/// Drawable output of [`DonutChartSpec::build`], in chart-local coordinates.
///
/// The chart occupies `(0, 0)..view_size`. Renderers draw every visible slice, then the mask.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutChart {
    /// Chart center.
    pub center: Point,
    /// Square extent of the chart, including the outer half of the stroke.
    pub view_size: Size,
    /// One slice per category, in input order.
    pub slices: Vec<ArcSlice>,
    /// Disk painted over the slices.
    pub mask: MaskDisk,
    /// Rendering order hint for the slices.
    pub slice_z_index: i32,
    /// Rendering order hint for the mask disk.
    pub mask_z_index: i32,
}

impl DonutChart {
    /// Returns the slices a renderer should draw, skipping zero-width ones.
    pub fn visible_slices(&self) -> impl Iterator<Item = &ArcSlice> {
        self.slices.iter().filter(|s| s.is_visible())
    }
}
