//! Savings goals.

use crate::{
    entities::{Goal, NewGoal, SavingsDeposit, SavingsReceipt},
    errors::{Error, Result},
    http::{ApiClient, Transport},
};
use reqwest::Method;
use tracing::info;

/// All goals, including completed ones.
pub async fn list<T: Transport>(client: &ApiClient<T>) -> Result<Vec<Goal>> {
    client.get_list("goals/").await
}

/// Creates a goal.
pub async fn create<T: Transport>(client: &ApiClient<T>, goal: &NewGoal) -> Result<Goal> {
    client.send_json(Method::POST, "goals/", goal).await
}

/// Adds `amount` to a goal's savings.
///
/// # Errors
/// `Error::InvalidRecord` without a request when `amount` is not positive.
pub async fn add_savings<T: Transport>(
    client: &ApiClient<T>,
    goal_id: i64,
    amount: f64,
) -> Result<SavingsReceipt> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidRecord {
            message: format!("savings amount must be greater than zero, got {amount}"),
        });
    }
    let path = format!("goals/{goal_id}/add_savings/");
    let receipt: SavingsReceipt = client
        .send_json(Method::POST, &path, &SavingsDeposit { amount })
        .await?;
    if let Some(message) = &receipt.message {
        info!("Goal {goal_id}: {message}");
    }
    Ok(receipt)
}

/// Flags a goal as completed regardless of its balance.
pub async fn mark_completed<T: Transport>(client: &ApiClient<T>, goal_id: i64) -> Result<()> {
    let path = format!("goals/{goal_id}/mark_completed/");
    client.send_empty(Method::POST, &path, None).await
}

/// Deletes a goal.
pub async fn delete<T: Transport>(client: &ApiClient<T>, goal_id: i64) -> Result<()> {
    let path = format!("goals/{goal_id}/");
    client.send_empty(Method::DELETE, &path, None).await
}
