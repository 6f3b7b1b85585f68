//! Progress and ratio calculations shared by budgets, goals, loans and the dashboard.
//!
//! Every ratio returns `0.0` when its denominator is zero (or negative) instead
//! of `NaN` or infinity, because display code formats these values directly.
//! Results are never clamped here; [`clamp_for_display`] exists for progress bars.

/// `current / target * 100`, or `0` when `target <= 0`. Unclamped: 150 of 100 is `150`.
#[must_use]
pub fn percentage_complete(current: f64, target: f64) -> f64 {
    if target > 0.0 {
        current / target * 100.0
    } else {
        0.0
    }
}

/// `limit - consumed`. Negative means over the limit.
#[must_use]
pub fn remaining(limit: f64, consumed: f64) -> f64 {
    limit - consumed
}

/// Debt as a percentage of income, or `0` when there is no income.
#[must_use]
pub fn debt_to_income_ratio(total_debt: f64, total_income: f64) -> f64 {
    if total_income > 0.0 {
        total_debt / total_income * 100.0
    } else {
        0.0
    }
}

/// Share of income not spent, as a percentage; `0` when there is no income.
/// Negative when spending exceeds income.
#[must_use]
pub fn savings_rate(income: f64, expense: f64) -> f64 {
    if income > 0.0 {
        (income - expense) / income * 100.0
    } else {
        0.0
    }
}

/// Clamps a percentage into `0..=100` for bars and rings.
#[must_use]
pub fn clamp_for_display(percentage: f64) -> f64 {
    if percentage.is_nan() {
        return 0.0;
    }
    percentage.clamp(0.0, 100.0)
}

/// Traffic-light state of a consumption percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressStatus {
    /// Below the alert threshold
    OnTrack,
    /// At or above the alert threshold but under the limit
    Warning,
    /// At or above 100% of the limit
    Exceeded,
}

impl ProgressStatus {
    /// Classifies `percentage` against `alert_threshold` (e.g. 80).
    #[must_use]
    pub fn from_percentage(percentage: f64, alert_threshold: f64) -> Self {
        if percentage >= 100.0 {
            Self::Exceeded
        } else if percentage >= alert_threshold {
            Self::Warning
        } else {
            Self::OnTrack
        }
    }
}

/// Generates a progress bar string for visual representation.
///
/// Creates a text-based progress bar like: `[████████░░] 80.0%`. The bar is
/// clamped; the printed percentage is not.
#[must_use]
pub fn format_progress_bar(progress_percent: f64, bar_length: Option<usize>) -> String {
    let length = bar_length.unwrap_or(10);
    let clamped_progress = clamp_for_display(progress_percent);

    // clamped_progress ∈ [0, 100] and length is small, so the cast cannot overflow
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let filled = ((clamped_progress / 100.0) * length as f64).round() as usize;
    let empty = length.saturating_sub(filled);

    format!(
        "[{}{}] {progress_percent:.1}%",
        "█".repeat(filled),
        "░".repeat(empty)
    )
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_percentage_complete_is_unclamped() {
        assert_eq!(percentage_complete(150.0, 100.0), 150.0);
        assert_eq!(percentage_complete(25.0, 100.0), 25.0);
    }

    #[test]
    fn test_percentage_complete_zero_target() {
        assert_eq!(percentage_complete(50.0, 0.0), 0.0);
        assert_eq!(percentage_complete(0.0, 0.0), 0.0);
        assert_eq!(percentage_complete(50.0, -10.0), 0.0);
    }

    #[test]
    fn test_remaining_may_go_negative() {
        assert_eq!(remaining(1000.0, 1200.0), -200.0);
        assert_eq!(remaining(1000.0, 400.0), 600.0);
    }

    #[test]
    fn test_debt_to_income_ratio() {
        assert_eq!(debt_to_income_ratio(5000.0, 10000.0), 50.0);
        assert_eq!(debt_to_income_ratio(5000.0, 0.0), 0.0);
    }

    #[test]
    fn test_savings_rate() {
        assert_eq!(savings_rate(8000.0, 6000.0), 25.0);
        assert_eq!(savings_rate(0.0, 6000.0), 0.0);
        assert_eq!(savings_rate(1000.0, 1500.0), -50.0);
    }

    #[test]
    fn test_ratios_never_produce_nan_or_infinity() {
        for value in [
            percentage_complete(1.0, 0.0),
            debt_to_income_ratio(1.0, 0.0),
            savings_rate(0.0, 1.0),
        ] {
            assert!(value.is_finite());
            assert_eq!(value, 0.0);
        }
    }

    #[test]
    fn test_clamp_for_display() {
        assert_eq!(clamp_for_display(150.0), 100.0);
        assert_eq!(clamp_for_display(-5.0), 0.0);
        assert_eq!(clamp_for_display(f64::NAN), 0.0);
        assert_eq!(clamp_for_display(42.5), 42.5);
    }

    #[test]
    fn test_progress_status_thresholds() {
        assert_eq!(
            ProgressStatus::from_percentage(79.9, 80.0),
            ProgressStatus::OnTrack
        );
        assert_eq!(
            ProgressStatus::from_percentage(80.0, 80.0),
            ProgressStatus::Warning
        );
        assert_eq!(
            ProgressStatus::from_percentage(100.0, 80.0),
            ProgressStatus::Exceeded
        );
        assert_eq!(
            ProgressStatus::from_percentage(95.0, 100.0),
            ProgressStatus::OnTrack
        );
    }

    #[test]
    fn test_format_progress_bar_half() {
        assert_eq!(format_progress_bar(50.0, Some(10)), "[█████░░░░░] 50.0%");
    }

    #[test]
    fn test_format_progress_bar_overflow_keeps_real_percentage() {
        assert_eq!(format_progress_bar(150.0, Some(10)), "[██████████] 150.0%");
    }

    #[test]
    fn test_format_progress_bar_default_length() {
        assert_eq!(format_progress_bar(0.0, None), "[░░░░░░░░░░] 0.0%");
    }
}
