//! Loan entities - loans, their payments, and the backend's loan summary.
//!
//! `remaining_amount` normally stays at or below `amount`, but the client
//! never clamps it.
use super::wire;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A loan being paid down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier for the loan
    pub id: i64,
    /// Human-readable name (e.g., "Auto")
    #[serde(default)]
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Original principal
    #[serde(deserialize_with = "wire::amount")]
    pub amount: f64,
    /// Principal still owed
    #[serde(default, deserialize_with = "wire::amount")]
    pub remaining_amount: f64,
    /// Amount of each installment
    #[serde(default, deserialize_with = "wire::optional_amount")]
    pub installment_amount: Option<f64>,
    /// Number of installments agreed
    #[serde(default)]
    pub installments: Option<u32>,
    /// Installments paid so far
    #[serde(default)]
    pub paid_installments: Option<u32>,
    /// Date the loan was taken
    #[serde(default, deserialize_with = "wire::optional_date")]
    pub date: Option<NaiveDate>,
    /// Set once the loan is fully repaid
    #[serde(default)]
    pub is_completed: bool,
}

impl Loan {
    /// True while the loan is still being repaid.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_completed
    }
}

/// Payload for creating or updating a loan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewLoan {
    /// Human-readable name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Principal borrowed
    pub amount: f64,
    /// Number of installments
    pub installments: u32,
    /// Date the loan was taken
    pub date: NaiveDate,
}

/// A single repayment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoanPayment {
    /// Unique identifier for the payment
    pub id: i64,
    /// Loan the payment belongs to
    #[serde(default)]
    pub loan: Option<i64>,
    /// Amount repaid
    #[serde(deserialize_with = "wire::amount")]
    pub amount: f64,
    /// Date of the payment
    #[serde(deserialize_with = "wire::date")]
    pub date: NaiveDate,
    /// Optional note
    #[serde(default)]
    pub notes: Option<String>,
}

/// Payload for `add_payment`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewLoanPayment {
    /// Amount repaid; must be positive
    pub amount: f64,
    /// Date of the payment
    pub date: NaiveDate,
    /// Optional note
    pub notes: Option<String>,
}

/// Aggregate figures computed by the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoansSummary {
    /// Sum of original principals
    #[serde(deserialize_with = "wire::amount")]
    pub total_amount: f64,
    /// Sum repaid across all loans
    #[serde(deserialize_with = "wire::amount")]
    pub total_paid: f64,
    /// Sum still owed
    #[serde(deserialize_with = "wire::amount")]
    pub remaining_debt: f64,
    /// Loans not yet completed
    pub active_loans: u32,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_deserialize_minimal_loan() {
        let loan: Loan = serde_json::from_str(r#"{"id": 1, "amount": "5000.00"}"#).unwrap();
        assert_eq!(loan.amount, 5000.0);
        assert_eq!(loan.remaining_amount, 0.0);
        assert!(loan.is_active());
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let summary: LoansSummary = serde_json::from_str(r#"{"remaining_debt": "1200.5"}"#).unwrap();
        assert_eq!(summary.remaining_debt, 1200.5);
        assert_eq!(summary.active_loans, 0);
    }
}
