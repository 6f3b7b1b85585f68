//! Budget progress - consumption against monthly and per-category limits.

use super::progress::{ProgressStatus, percentage_complete, remaining};
use crate::entities::{CategoryBudget, MonthlyBudget, budget::DEFAULT_ALERT_THRESHOLD};

/// Consumption figures for one limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetProgress {
    /// The configured limit
    pub limit: f64,
    /// Amount spent against the limit
    pub consumed: f64,
    /// Negative when over the limit
    pub remaining: f64,
    /// Unclamped; above 100 when over the limit
    pub percentage: f64,
    /// Traffic-light state at the budget's alert threshold
    pub status: ProgressStatus,
}

impl BudgetProgress {
    /// Computes the figures for `consumed` out of `limit`, warning at `alert_threshold` percent.
    #[must_use]
    pub fn new(limit: f64, consumed: f64, alert_threshold: f64) -> Self {
        let percentage = percentage_complete(consumed, limit);
        Self {
            limit,
            consumed,
            remaining: remaining(limit, consumed),
            percentage,
            status: ProgressStatus::from_percentage(percentage, alert_threshold),
        }
    }

    /// True once spending has passed the limit.
    #[must_use]
    pub fn is_over_limit(&self) -> bool {
        self.remaining < 0.0
    }
}

/// Progress of a category sub-budget, labelled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryProgress {
    /// Category id
    pub id: i64,
    /// Category name, or a placeholder built from the id
    pub name: String,
    /// Consumption against the category limit
    pub progress: BudgetProgress,
}

/// Progress of the whole month, flagged at the default alert threshold.
#[must_use]
pub fn budget_progress(budget: &MonthlyBudget) -> BudgetProgress {
    BudgetProgress::new(budget.total_limit, budget.consumed, DEFAULT_ALERT_THRESHOLD)
}

/// Progress of one category, flagged at its own alert threshold.
#[must_use]
pub fn category_progress(budget: &CategoryBudget) -> CategoryProgress {
    CategoryProgress {
        id: budget.id,
        name: budget
            .category_name
            .clone()
            .unwrap_or_else(|| format!("Categoría {}", budget.category.unwrap_or(budget.id))),
        progress: BudgetProgress::new(budget.limit, budget.consumed, budget.alert_threshold),
    }
}

/// Categories at or past their alert threshold, most consumed first.
#[must_use]
pub fn categories_needing_attention(budget: &MonthlyBudget) -> Vec<CategoryProgress> {
    let mut flagged: Vec<CategoryProgress> = budget
        .category_budgets
        .iter()
        .map(category_progress)
        .filter(|c| c.progress.status != ProgressStatus::OnTrack)
        .collect();
    flagged.sort_by(|a, b| b.progress.percentage.total_cmp(&a.progress.percentage));
    flagged
}

/// Average that can still be spent per remaining day, if the backend reported
/// how many days are left. Zero once the budget is exhausted.
#[must_use]
pub fn daily_allowance(budget: &MonthlyBudget) -> Option<f64> {
    let days = budget.days_left_in_month.filter(|d| *d > 0)?;
    #[allow(clippy::cast_precision_loss)]
    let days = days as f64;
    Some(remaining(budget.total_limit, budget.consumed).max(0.0) / days)
}
