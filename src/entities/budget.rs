//! Budget entities - the monthly budget and its per-category sub-budgets.
//!
//! Category limits are independent of the parent total: nothing requires the
//! sub-budgets to sum to `total_limit`.
use super::wire;
use serde::{Deserialize, Serialize};

/// Alert threshold applied when the backend omits one.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 80.0;

const fn default_alert_threshold() -> f64 {
    DEFAULT_ALERT_THRESHOLD
}

/// A month's overall budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyBudget {
    /// Unique identifier for the budget
    pub id: i64,
    /// Spending limit for the whole month
    #[serde(rename = "presupuesto_total", deserialize_with = "wire::amount")]
    pub total_limit: f64,
    /// Spent so far this month
    #[serde(rename = "gastado_actual", deserialize_with = "wire::amount")]
    pub consumed: f64,
    /// Per-category limits nested in this budget
    #[serde(default)]
    pub category_budgets: Vec<CategoryBudget>,
    /// Days left until the month ends, when the backend computes it
    #[serde(rename = "dias_restantes_mes", default)]
    pub days_left_in_month: Option<i64>,
}

/// A per-category limit inside a monthly budget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBudget {
    /// Unique identifier for the category budget
    pub id: i64,
    /// Category the limit applies to
    #[serde(rename = "categoria", default)]
    pub category: Option<i64>,
    /// Display name of that category
    #[serde(rename = "categoria_nombre", default)]
    pub category_name: Option<String>,
    /// Limit assigned to the category
    #[serde(rename = "limite_asignado", deserialize_with = "wire::amount")]
    pub limit: f64,
    /// Spent in the category so far this month
    #[serde(rename = "gastado_actual", deserialize_with = "wire::amount")]
    pub consumed: f64,
    /// Percentage of the limit at which the category is flagged
    #[serde(rename = "alerta_porcentaje", default = "default_alert_threshold")]
    pub alert_threshold: f64,
}

/// Payload for creating the current month's budget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewMonthlyBudget {
    /// Spending limit for the whole month
    #[serde(rename = "presupuesto_total")]
    pub total_limit: f64,
}

/// Payload for adding a category budget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewCategoryBudget {
    /// Category the limit applies to
    #[serde(rename = "categoria")]
    pub category: i64,
    /// Limit to assign
    #[serde(rename = "limite_asignado")]
    pub limit: f64,
    /// Percentage of the limit at which the category is flagged
    #[serde(rename = "alerta_porcentaje")]
    pub alert_threshold: f64,
}

/// A budget alert raised by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// Unique identifier for the alert
    pub id: i64,
    /// Backend type tag such as `exceeded` or `warning`
    #[serde(rename = "tipo", default)]
    pub kind: String,
    /// Human-readable alert text
    #[serde(rename = "mensaje", default)]
    pub message: String,
    /// Share of the limit spent when the alert fired
    #[serde(
        rename = "porcentaje_gastado",
        default,
        deserialize_with = "wire::optional_amount"
    )]
    pub percentage: Option<f64>,
}

/// A suggestion attached to the budget summary.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    /// Backend type tag of the suggestion
    #[serde(rename = "tipo")]
    pub kind: String,
    /// Short heading
    #[serde(rename = "titulo")]
    pub title: String,
    /// Body text
    #[serde(rename = "mensaje")]
    pub message: String,
}

/// Payload of `budgets/monthly/summary/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// The current month's budget
    #[serde(rename = "presupuesto_mensual")]
    pub budget: MonthlyBudget,
    /// Alerts not yet dismissed
    #[serde(rename = "alertas_activas", default)]
    pub active_alerts: Vec<BudgetAlert>,
    /// Categories already over their limit
    #[serde(rename = "categorias_excedidas", default)]
    pub categories_exceeded: u32,
    /// Categories past their alert threshold but under the limit
    #[serde(rename = "categorias_en_alerta", default)]
    pub categories_on_alert: u32,
    /// Suggestions for the rest of the month
    #[serde(rename = "recomendaciones", default)]
    pub recommendations: Vec<Recommendation>,
}
