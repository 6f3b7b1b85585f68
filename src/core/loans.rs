//! Loan progress - per-loan repayment and portfolio totals.

use super::progress::{percentage_complete, remaining};
use crate::entities::Loan;

/// Repayment state of one loan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanProgress {
    /// Principal repaid so far
    pub paid: f64,
    /// Principal still owed
    pub remaining: f64,
    /// Share of the principal repaid
    pub percentage: f64,
    /// Installments left, when the loan is paid in installments
    pub installments_left: Option<u32>,
}

/// Totals across every loan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LoanPortfolio {
    /// Sum of the amounts still owed
    pub total_debt: f64,
    /// Sum of principal repaid
    pub total_paid: f64,
    /// Sum of original principals
    pub total_original: f64,
    /// `total_paid` over `total_original`, `0` with no principal
    pub overall_progress: f64,
    /// Loans not yet completed
    pub active_loans: usize,
}

/// Computes one loan's repayment progress. `remaining_amount` is taken as-is.
#[must_use]
pub fn loan_progress(loan: &Loan) -> LoanProgress {
    let paid = remaining(loan.amount, loan.remaining_amount);
    LoanProgress {
        paid,
        remaining: loan.remaining_amount,
        percentage: percentage_complete(paid, loan.amount),
        installments_left: loan
            .installments
            .map(|total| total.saturating_sub(loan.paid_installments.unwrap_or(0))),
    }
}

/// Folds every loan into portfolio totals.
#[must_use]
pub fn portfolio(loans: &[Loan]) -> LoanPortfolio {
    let mut totals = loans
        .iter()
        .fold(LoanPortfolio::default(), |mut acc, loan| {
            acc.total_debt += loan.remaining_amount;
            acc.total_paid += loan.amount - loan.remaining_amount;
            acc.total_original += loan.amount;
            if loan.is_active() {
                acc.active_loans += 1;
            }
            acc
        });
    totals.overall_progress = percentage_complete(totals.total_paid, totals.total_original);
    totals
}
