//! Category distribution - how spending splits across categories.

use super::progress::percentage_complete;
use crate::entities::{CategoryTotal, Transaction};

/// Label for transactions without a category.
pub const UNCATEGORIZED: &str = "Sin categoría";

/// One category's slice of the total.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category name
    pub category: String,
    /// Amount spent in the category
    pub total: f64,
    /// Share of the grand total, `0` when the grand total is zero
    pub percentage: f64,
}

/// Computes each category's share of the summed totals, keeping input order.
#[must_use]
pub fn category_distribution(totals: &[CategoryTotal]) -> Vec<CategoryShare> {
    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    totals
        .iter()
        .map(|t| CategoryShare {
            category: t.category.clone(),
            total: t.total,
            percentage: percentage_complete(t.total, grand_total),
        })
        .collect()
}

/// Sums transaction amounts per category name, in first-seen order.
#[must_use]
pub fn totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for transaction in transactions {
        let name = transaction.category_name().unwrap_or(UNCATEGORIZED);
        match totals.iter_mut().find(|t| t.category == name) {
            Some(existing) => existing.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: name.to_string(),
                total: transaction.amount,
            }),
        }
    }
    totals
}
