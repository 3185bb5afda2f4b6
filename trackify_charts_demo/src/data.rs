// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static dashboard data.

use peniko::Color;
use trackify_charts::{CategoryShare, DailyAmount, ExpenseRecord};

pub(crate) const GREEN: Color = Color::from_rgba8(0x22, 0xc5, 0x5e, 0xff);
pub(crate) const AMBER: Color = Color::from_rgba8(0xf5, 0x9e, 0x0b, 0xff);
pub(crate) const BLUE: Color = Color::from_rgba8(0x3b, 0x82, 0xf6, 0xff);
pub(crate) const VIOLET: Color = Color::from_rgba8(0x8b, 0x5c, 0xf6, 0xff);
pub(crate) const RED: Color = Color::from_rgba8(0xef, 0x44, 0x44, 0xff);
pub(crate) const ORANGE: Color = Color::from_rgba8(0xf9, 0x73, 0x16, 0xff);

/// Spent this month.
pub(crate) const TOTAL_SPENT: f64 = 12_350.0;
/// Monthly budget.
pub(crate) const BUDGET: f64 = 19_000.0;

/// Home screen category totals.
pub(crate) fn categories() -> Vec<CategoryShare> {
    vec![
        CategoryShare::new("Food", 4500.0, GREEN),
        CategoryShare::new("Transport", 3500.0, AMBER),
        CategoryShare::new("Shopping", 2500.0, BLUE),
        CategoryShare::new("Others", 1850.0, VIOLET),
        CategoryShare::new("Bills", 1000.0, RED),
    ]
}

/// Expense history, newest first.
pub(crate) fn history() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Shopping", "Grocery shopping", 450.0, BLUE),
        ExpenseRecord::new("Food", "Lunch with friends", 120.0, GREEN),
        ExpenseRecord::new("Transport", "Taxi fare", 80.0, AMBER),
        ExpenseRecord::new("Home", "Monthly rent", 2500.0, RED),
        ExpenseRecord::new("Shopping", "Electronics", 750.0, BLUE),
        ExpenseRecord::new("Entertainment", "Gaming subscription", 300.0, VIOLET),
        ExpenseRecord::new("Food", "Coffee shop", 150.0, GREEN),
        ExpenseRecord::new("Travel", "Flight tickets", 12000.0, ORANGE),
    ]
}

/// Spending per day of the current week.
pub(crate) fn weekly() -> Vec<DailyAmount> {
    vec![
        DailyAmount::new("Mon", 1200.0),
        DailyAmount::new("Tue", 800.0),
        DailyAmount::new("Wed", 1500.0),
        DailyAmount::new("Thu", 900.0),
        DailyAmount::new("Fri", 2100.0),
        DailyAmount::new("Sat", 1800.0),
        DailyAmount::new("Sun", 1400.0),
    ]
}
