// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashboard demo for `trackify_charts`.
//!
//! Writes the home screen cards as inline SVGs into a single HTML page.

mod cards;
mod data;
mod html;
mod svg;

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use trackify_charts::{
    BreakdownCardSpec, BudgetSummary, ChartConfig, HeuristicTextMeasurer, ProgressRingSpec, RUPEE,
    WeeklyChartSpec, category_breakdown, format_amount, total_spent,
};

use crate::html::HtmlSection;

/// Render the Trackify dashboard cards to an HTML report.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Output HTML path.
    #[arg(short, long, default_value = "trackify_dashboard.html")]
    output: PathBuf,

    /// Gap between slices, in degrees.
    #[arg(long, value_name = "DEG", default_value_t = 12.0)]
    gap: f64,

    /// Donut radius, in SVG units.
    #[arg(long, default_value_t = 80.0)]
    radius: f64,

    /// Slice stroke width.
    #[arg(long, default_value_t = 10.0)]
    stroke_width: f64,

    /// Outer width of each card.
    #[arg(long, default_value_t = 320.0)]
    card_width: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    let config = ChartConfig::new(args.radius)
        .with_stroke_width(args.stroke_width)
        .with_gap_degrees(args.gap);
    let measurer = HeuristicTextMeasurer;

    let sections = vec![
        budget_section(&args, &measurer)?,
        breakdown_section(&args, config, &measurer),
        weekly_section(&args, &measurer),
        history_section(&args, config, &measurer),
    ];

    let report = html::render_report("Trackify dashboard", &sections);
    std::fs::write(&args.output, report)?;
    tracing::info!(path = %args.output.display(), cards = sections.len(), "wrote dashboard report");
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init();
}

fn budget_section(
    args: &Args,
    measurer: &HeuristicTextMeasurer,
) -> Result<HtmlSection, Box<dyn Error>> {
    let summary = BudgetSummary::new(data::TOTAL_SPENT, data::BUDGET)?;
    let ring = ProgressRingSpec::default();
    tracing::debug!(
        used_percent = summary.used_percent(),
        "budget summary computed"
    );
    Ok(HtmlSection {
        title: "Total Spent",
        description: "Monthly total, a linear budget bar and the progress ring with its percent label.",
        svg: cards::budget_card_svg(&summary, &ring, RUPEE, args.card_width, measurer),
    })
}

fn breakdown_section(
    args: &Args,
    config: ChartConfig,
    measurer: &HeuristicTextMeasurer,
) -> HtmlSection {
    let card = BreakdownCardSpec::new(data::categories(), config)
        .with_width(args.card_width)
        .build(measurer);
    HtmlSection {
        title: "Category Breakdown",
        description: "Donut chart of the month's categories with gapped slices, a white center mask and the wrapped legend.",
        svg: cards::breakdown_card_svg(&card),
    }
}

fn weekly_section(args: &Args, measurer: &HeuristicTextMeasurer) -> HtmlSection {
    let spec = WeeklyChartSpec::new(data::weekly());
    HtmlSection {
        title: "Weekly Overview",
        description: "Daily spending as bars relative to the busiest day, capped at 80 units with an 8 unit minimum.",
        svg: cards::weekly_card_svg(&spec, args.card_width, measurer),
    }
}

fn history_section(
    args: &Args,
    config: ChartConfig,
    measurer: &HeuristicTextMeasurer,
) -> HtmlSection {
    let history = data::history();
    let shares = category_breakdown(&history);
    let title = format!("History - {}", format_amount(total_spent(&history), RUPEE));
    let card = BreakdownCardSpec::new(shares, config)
        .with_title(title)
        .with_width(args.card_width)
        .build(measurer);
    HtmlSection {
        title: "Expense History",
        description: "Categories aggregated from individual expense records. Travel takes more than half of the circle, so its arc uses the large-arc flag.",
        svg: cards::breakdown_card_svg(&card),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_cards_render() {
        let args = Args::parse_from(["trackify_charts_demo"]);
        let config = ChartConfig::new(args.radius)
            .with_stroke_width(args.stroke_width)
            .with_gap_degrees(args.gap);
        let measurer = HeuristicTextMeasurer;

        let breakdown = breakdown_section(&args, config, &measurer);
        assert_eq!(breakdown.svg.matches("<path").count(), 5);
        assert!(breakdown.svg.contains("Food - \u{20b9}4,500"));

        let history = history_section(&args, config, &measurer);
        assert!(history.svg.contains(" 0 1,1 "));

        let weekly = weekly_section(&args, &measurer);
        assert_eq!(weekly.svg.matches("<rect").count(), 8, "background plus seven bars");
        assert!(weekly.svg.contains("\u{20b9}2,100"));
        assert!(weekly.svg.contains(">Sun</text>"));

        let budget = budget_section(&args, &measurer).expect("valid budget");
        assert!(budget.svg.contains("65%"));
    }

    #[test]
    fn empty_breakdown_renders_placeholder() {
        let card = BreakdownCardSpec::new(Vec::new(), ChartConfig::default())
            .build(&HeuristicTextMeasurer);
        let svg = cards::breakdown_card_svg(&card);
        assert!(svg.contains("No spending to chart yet"));
        assert!(!svg.contains("<path"));
    }
}
