//! Aggregations over record collections.

use crate::types::{CartItem, Transaction, TransactionKind, TransactionSummary};

/// Inclusive valid range for a single grade.
pub const GRADE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Sum of `price * qty` over all lines; `0.0` for an empty cart.
pub fn cart_subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

/// Arithmetic mean of `scores`.
///
/// Returns `0.0` if `scores` is empty or if any score lies outside `0..=100` (NaN included).
/// One bad score invalidates the whole input; invalid entries are not skipped.
pub fn average_grade(scores: &[f64]) -> f64 {
    if scores.is_empty() || !scores.iter().all(|s| GRADE_RANGE.contains(s)) {
        return 0.0;
    }
    let total: f64 = scores.iter().sum();
    total / scores.len() as f64
}

/// Income and expense totals, and their difference.
pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let (income, expense) = transactions
        .iter()
        .fold((0.0, 0.0), |(income, expense), t| match t.kind {
            TransactionKind::Income => (income + t.amount, expense),
            TransactionKind::Expense => (income, expense + t.amount),
        });
    TransactionSummary {
        income,
        expense,
        net: income - expense,
    }
}
