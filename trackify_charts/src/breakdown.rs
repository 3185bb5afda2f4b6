// Copyright 2026 the Trackify Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Category breakdown of individual expenses.
//!
//! Expense history lists single purchases; the breakdown chart wants one share per category.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::Color;

use crate::CategoryShare;

/// A single recorded expense.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRecord {
    /// Category name, used as the grouping key.
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Amount spent.
    pub amount: f64,
    /// Category color.
    pub color: Color,
}

impl ExpenseRecord {
    /// Creates a record.
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        color: Color,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            amount,
            color,
        }
    }
}

/// Sums records per category.
///
/// Categories keep the order they are first seen in, and the color of their first record.
/// Records with non-finite amounts are skipped.
pub fn category_breakdown<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
) -> Vec<CategoryShare> {
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut shares: Vec<CategoryShare> = Vec::new();

    for record in records {
        if !record.amount.is_finite() {
            tracing::warn!(
                category = record.category.as_str(),
                "skipping expense with non-finite amount"
            );
            continue;
        }
        match index.get(record.category.as_str()) {
            Some(&i) => shares[i].amount += record.amount,
            None => {
                index.insert(record.category.as_str(), shares.len());
                shares.push(CategoryShare::new(
                    record.category.clone(),
                    record.amount,
                    record.color,
                ));
            }
        }
    }
    tracing::debug!(categories = shares.len(), "built category breakdown");
    shares
}

/// Sums every finite amount, the "Total Expenses" figure.
pub fn total_spent<'a>(records: impl IntoIterator<Item = &'a ExpenseRecord>) -> f64 {
    records
        .into_iter()
        .map(|r| r.amount)
        .filter(|a| a.is_finite())
        .sum()
}
