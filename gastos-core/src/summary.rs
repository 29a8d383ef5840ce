//! Fold parsed rows into a grand total and per-category totals.

use std::collections::HashMap;

use crate::row::Row;

/// Aggregate view over a row sequence.
///
/// Invariant: the sum of `by_category` values equals `total` to within
/// floating-point tolerance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub by_category: HashMap<String, f64>,
}

impl Summary {
    /// Category totals ordered by amount descending, name ascending on
    /// ties, so display output is deterministic.
    pub fn categories_sorted(&self) -> Vec<(&str, f64)> {
        let mut cats: Vec<(&str, f64)> = self
            .by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        cats.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        cats
    }
}

/// Accumulate rows in encounter order.
///
/// Categories are keyed as already normalized by the parser. The parser
/// never emits non-finite amounts; if one sneaks in anyway it is skipped
/// rather than propagated into a corrupt total.
pub fn summarize(rows: &[Row]) -> Summary {
    let mut summary = Summary::default();
    for row in rows {
        if !row.amount.is_finite() {
            continue;
        }
        summary.total += row.amount;
        *summary.by_category.entry(row.category.clone()).or_insert(0.0) += row.amount;
    }
    summary
}
