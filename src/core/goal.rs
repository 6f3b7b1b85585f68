//! Goal progress - how far a savings goal is and how much is still needed.

use super::progress::percentage_complete;
use crate::entities::Goal;
use chrono::NaiveDate;

/// Derived figures for a savings goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    /// Unclamped; saving past the target reports above 100
    pub percentage: f64,
    /// Amount still missing, never negative
    pub missing: f64,
    /// Whole days until the deadline, `0` once it has passed
    pub days_remaining: Option<i64>,
    /// Deposit per 30 days that reaches the target by the deadline
    pub suggested_monthly: Option<f64>,
    /// Completed by flag or by reaching the target
    pub completed: bool,
}

impl GoalProgress {
    /// Deadline passed with money still missing.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        !self.completed && self.days_remaining == Some(0) && self.missing > 0.0
    }
}

/// Computes a goal's progress as of `today`.
#[must_use]
pub fn goal_progress(goal: &Goal, today: NaiveDate) -> GoalProgress {
    let missing = (goal.target - goal.current).max(0.0);
    let days_remaining = goal
        .deadline
        .map(|deadline| (deadline - today).num_days().max(0));

    // months are counted as 30 days and never fewer than one
    #[allow(clippy::cast_precision_loss)]
    let suggested_monthly = days_remaining
        .filter(|days| *days > 0)
        .map(|days| missing / (days as f64 / 30.0).max(1.0));

    GoalProgress {
        percentage: percentage_complete(goal.current, goal.target),
        missing,
        days_remaining,
        suggested_monthly,
        completed: goal.completed || (goal.target > 0.0 && goal.current >= goal.target),
    }
}
