// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties of the donut slice layout over generated category amounts.

use approx::assert_abs_diff_eq;
use peniko::Color;
use proptest::prelude::*;
use trackify_charts::{
    ArcSlice, CategoryShare, ChartConfig, InvalidInput, PathCommand, compute_slices,
};

fn shares_from(amounts: &[f64]) -> Vec<CategoryShare> {
    amounts
        .iter()
        .enumerate()
        .map(|(i, &amount)| {
            let shade = u8::try_from(i * 20 % 256).unwrap_or(0);
            CategoryShare::new(format!("c{i}"), amount, Color::from_rgb8(shade, 0, 255 - shade))
        })
        .collect()
}

fn arc_points(slice: &ArcSlice) -> (kurbo::Point, kurbo::Point) {
    match slice.path.commands() {
        [
            PathCommand::MoveTo(_),
            PathCommand::LineTo(start),
            PathCommand::ArcTo { to, .. },
            PathCommand::Close,
        ] => (*start, *to),
        other => panic!("unexpected slice path: {other:?}"),
    }
}

proptest! {
    #[test]
    fn one_slice_per_share_in_input_order(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..12),
        gap in 0.0f64..20.0
    ) {
        let shares = shares_from(&amounts);
        let config = ChartConfig::new(80.0).with_stroke_width(10.0).with_gap_degrees(gap);
        let slices = compute_slices(&shares, &config).expect("valid input");

        prop_assert_eq!(slices.len(), shares.len());
        for (slice, share) in slices.iter().zip(&shares) {
            prop_assert_eq!(slice.stroke_color, share.color);
            prop_assert_eq!(slice.stroke_width, 10.0);
        }
    }

    #[test]
    fn owned_spans_tile_the_full_circle(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..12),
        gap in 0.0f64..20.0
    ) {
        let shares = shares_from(&amounts);
        let config = ChartConfig::new(50.0).with_gap_degrees(gap);
        let slices = compute_slices(&shares, &config).expect("valid input");

        let total: f64 = slices.iter().map(ArcSlice::owned_degrees).sum();
        prop_assert!((total - 360.0).abs() < 1e-6, "owned spans sum to {}", total);

        prop_assert_eq!(slices[0].start_degrees, 0.0);
        for pair in slices.windows(2) {
            prop_assert!(
                (pair[1].start_degrees - pair[0].owned_end_degrees).abs() < 1e-9,
                "gap between {} and {}",
                pair[0].owned_end_degrees,
                pair[1].start_degrees
            );
        }
    }

    #[test]
    fn gap_comes_off_the_trailing_edge_without_reversing(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..12),
        gap in 0.0f64..45.0
    ) {
        let shares = shares_from(&amounts);
        let config = ChartConfig::new(50.0).with_gap_degrees(gap);
        let slices = compute_slices(&shares, &config).expect("valid input");

        for slice in &slices {
            prop_assert!(slice.end_degrees >= slice.start_degrees);
            if slice.owned_degrees() >= gap {
                prop_assert!(
                    (slice.end_degrees + gap - slice.owned_end_degrees).abs() < 1e-9,
                    "end {} + gap {} != owned end {}",
                    slice.end_degrees,
                    gap,
                    slice.owned_end_degrees
                );
            } else {
                prop_assert!(!slice.is_visible());
            }
        }
    }

    #[test]
    fn large_arc_marks_only_a_majority_slice(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..8)
    ) {
        let shares = shares_from(&amounts);
        let slices = compute_slices(&shares, &ChartConfig::new(30.0)).expect("valid input");
        let total: f64 = amounts.iter().sum();

        for (slice, amount) in slices.iter().zip(&amounts) {
            prop_assert_eq!(slice.large_arc, amount / total * 100.0 > 50.0);
        }
        prop_assert!(slices.iter().filter(|s| s.large_arc).count() <= 1);
    }

    #[test]
    fn arc_endpoints_lie_on_the_circle(
        amounts in prop::collection::vec(0.01f64..10_000.0, 1..12),
        radius in 1.0f64..500.0,
        stroke in 0.0f64..40.0,
        gap in 0.0f64..20.0
    ) {
        let shares = shares_from(&amounts);
        let config = ChartConfig::new(radius).with_stroke_width(stroke).with_gap_degrees(gap);
        let center = config.center_point();
        let slices = compute_slices(&shares, &config).expect("valid input");

        for slice in &slices {
            let (start, end) = arc_points(slice);
            prop_assert!(((start - center).hypot() - radius).abs() < 1e-6 * radius);
            prop_assert!(((end - center).hypot() - radius).abs() < 1e-6 * radius);
            prop_assert!(!slice.path_data().contains("NaN"));
        }
    }

    #[test]
    fn repeated_calls_produce_identical_paths(
        amounts in prop::collection::vec(-100.0f64..10_000.0, 1..12),
        gap in 0.0f64..20.0
    ) {
        prop_assume!(amounts.iter().sum::<f64>() > 0.0);
        let shares = shares_from(&amounts);
        let config = ChartConfig::new(80.0).with_stroke_width(10.0).with_gap_degrees(gap);

        let first: Vec<String> = compute_slices(&shares, &config)
            .expect("valid input")
            .iter()
            .map(ArcSlice::path_data)
            .collect();
        let second: Vec<String> = compute_slices(&shares, &config)
            .expect("valid input")
            .iter()
            .map(ArcSlice::path_data)
            .collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn non_positive_totals_are_rejected(
        amounts in prop::collection::vec(-10_000.0f64..=0.0, 1..12)
    ) {
        let shares = shares_from(&amounts);
        let result = compute_slices(&shares, &ChartConfig::new(80.0));
        prop_assert!(
            matches!(result, Err(InvalidInput::NonPositiveTotal { .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn refunds_outweighing_spending_are_rejected(
        amounts in prop::collection::vec(0.0f64..1_000.0, 1..6),
        excess in 0.0f64..1_000.0
    ) {
        let mut amounts = amounts;
        let refund = -(amounts.iter().sum::<f64>() + excess);
        amounts.push(refund);
        let shares = shares_from(&amounts);
        let result = compute_slices(&shares, &ChartConfig::new(80.0));
        prop_assert!(
            matches!(result, Err(InvalidInput::NonPositiveTotal { .. })),
            "got {:?}",
            result
        );
    }
}

#[test]
fn dashboard_categories_match_their_shares() {
    let amounts = [4500.0, 3500.0, 2500.0, 1850.0, 1000.0];
    let config = ChartConfig::new(80.0)
        .with_stroke_width(10.0)
        .with_gap_degrees(12.0);
    let slices = compute_slices(&shares_from(&amounts), &config).expect("valid input");

    let total: f64 = amounts.iter().sum();
    for (slice, amount) in slices.iter().zip(amounts) {
        assert_abs_diff_eq!(slice.owned_degrees(), amount / total * 360.0, epsilon = 1e-9);
        assert_abs_diff_eq!(slice.sweep_degrees(), slice.owned_degrees() - 12.0, epsilon = 1e-9);
        assert!(!slice.large_arc, "no dashboard category exceeds half");
    }
}
