//! Loans and their repayments.

use crate::{
    entities::{Loan, LoanPayment, LoansSummary, NewLoan, NewLoanPayment},
    errors::Result,
    http::{ApiClient, Transport},
};
use reqwest::Method;

const LOANS: &str = "loans/";
const PAYMENTS: &str = "loan-payments/";

fn loan_path(id: i64) -> String {
    format!("{LOANS}{id}/")
}

/// All loans, active and completed.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Loan>> {
    client.get_list(LOANS).await
}

/// One loan by id.
pub async fn get<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<Loan> {
    client.get_json(&loan_path(id)).await
}

/// Creates a loan.
pub async fn create<T: Transport>(client: &ApiClient<T>, loan: &NewLoan) -> Result<Loan> {
    client.send_json(Method::POST, LOANS, loan).await
}

/// Replaces a loan's editable fields.
pub async fn update<T: Transport>(client: &ApiClient<T>, id: i64, loan: &NewLoan) -> Result<Loan> {
    client.send_json(Method::PUT, &loan_path(id), loan).await
}

/// Deletes a loan.
pub async fn delete<T: Transport>(client: &ApiClient<T>, id: i64) -> Result<()> {
    client.send_empty(Method::DELETE, &loan_path(id), None).await
}

/// Backend-computed totals across all loans.
pub async fn summary<T: Transport>(client: &ApiClient<T>) -> Result<LoansSummary> {
    client.get_json("loans/summary/").await
}

/// Records a repayment against a loan.
pub async fn add_payment<T: Transport>(
    client: &ApiClient<T>,
    loan_id: i64,
    payment: &NewLoanPayment,
) -> Result<LoanPayment> {
    let path = format!("{LOANS}{loan_id}/add_payment/");
    client.send_json(Method::POST, &path, payment).await
}

/// Payments recorded against one loan.
pub async fn payments<T: Transport>(client: &ApiClient<T>, loan_id: i64) -> Result<Vec<LoanPayment>> {
    client.get_list(&format!("{LOANS}{loan_id}/payments/")).await
}

/// Every payment across all loans.
pub async fn all_payments<T: Transport>(client: &ApiClient<T>) -> Result<Vec<LoanPayment>> {
    client.get_list(PAYMENTS).await
}

/// Deletes a single payment.
pub async fn delete_payment<T: Transport>(client: &ApiClient<T>, payment_id: i64) -> Result<()> {
    let path = format!("{PAYMENTS}{payment_id}/");
    client.send_empty(Method::DELETE, &path, None).await
}
