//! Expense and income ledgers.

use crate::{
    entities::{DashboardSummary, NewTransaction, Transaction, TransactionKind},
    errors::Result,
    http::{ApiClient, Page, Transport},
};
use reqwest::Method;
use tracing::debug;

fn item_path(kind: TransactionKind, id: i64) -> String {
    format!("{}{id}/", kind.collection_path())
}

/// Fetches one page (1-based) of a ledger.
pub async fn list<T: Transport>(
    client: &ApiClient<T>,
    kind: TransactionKind,
    page: u32,
) -> Result<Page<Transaction>> {
    let path = format!("{}?page={}", kind.collection_path(), page.max(1));
    client.get_page(&path).await
}

/// Walks every page of a ledger.
pub async fn list_all<T: Transport>(
    client: &ApiClient<T>,
    kind: TransactionKind,
) -> Result<Vec<Transaction>> {
    let mut page_number = 1;
    let mut transactions = Vec::new();
    loop {
        let page = list(client, kind, page_number).await?;
        let more = page.has_next();
        transactions.extend(page.results);
        if !more {
            break;
        }
        page_number += 1;
    }
    debug!(
        "Loaded {} transactions from {} page(s) of {}",
        transactions.len(),
        page_number,
        kind.collection_path()
    );
    Ok(transactions)
}

/// Records a transaction after checking it locally.
///
/// # Errors
/// `Error::InvalidRecord` before any request if the record is malformed,
/// `Error::Validation` if the backend rejects it.
pub async fn create<T: Transport>(
    client: &ApiClient<T>,
    kind: TransactionKind,
    transaction: NewTransaction,
) -> Result<Transaction> {
    let transaction = transaction.validated()?;
    client
        .send_json(Method::POST, kind.collection_path(), &transaction)
        .await
}

/// Replaces a transaction, with the same local checks as [`create`].
pub async fn update<T: Transport>(
    client: &ApiClient<T>,
    kind: TransactionKind,
    id: i64,
    transaction: NewTransaction,
) -> Result<Transaction> {
    let transaction = transaction.validated()?;
    client
        .send_json(Method::PUT, &item_path(kind, id), &transaction)
        .await
}

/// Deletes a transaction.
pub async fn delete<T: Transport>(
    client: &ApiClient<T>,
    kind: TransactionKind,
    id: i64,
) -> Result<()> {
    client
        .send_empty(Method::DELETE, &item_path(kind, id), None)
        .await
}

/// The backend's aggregated income/expense overview.
pub async fn dashboard<T: Transport>(client: &ApiClient<T>) -> Result<DashboardSummary> {
    client.get_json("transactions/gastos/dashboard/").await
}
