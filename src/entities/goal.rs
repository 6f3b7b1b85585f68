//! Goal entity - a savings target with an optional deadline.
use super::wire;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A savings goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier for the goal
    pub id: i64,
    /// Human-readable name (e.g., "Vacaciones")
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Amount to reach
    #[serde(rename = "monto_objetivo", deserialize_with = "wire::amount")]
    pub target: f64,
    /// Saved so far; may exceed `target`
    #[serde(rename = "monto_actual", deserialize_with = "wire::amount")]
    pub current: f64,
    /// Date the target should be reached by
    #[serde(
        rename = "fecha_limite",
        default,
        deserialize_with = "wire::optional_date"
    )]
    pub deadline: Option<NaiveDate>,
    /// Whether the goal has been marked as completed
    #[serde(rename = "completada", default)]
    pub completed: bool,
}

/// Payload for creating a goal.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewGoal {
    /// Human-readable name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Free-form description
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Amount to reach
    #[serde(rename = "monto_objetivo")]
    pub target: f64,
    /// Amount already saved
    #[serde(rename = "monto_actual")]
    pub current: f64,
    /// Optional target date
    #[serde(rename = "fecha_limite")]
    pub deadline: Option<NaiveDate>,
}

/// Payload for `add_savings`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SavingsDeposit {
    /// Amount to add; must be positive
    pub amount: f64,
}

/// Response to `add_savings`; the backend may attach a congratulatory message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SavingsReceipt {
    /// Message shown when the deposit completes the goal
    #[serde(default)]
    pub message: Option<String>,
}
