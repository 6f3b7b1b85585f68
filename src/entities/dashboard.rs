//! Dashboard entity - the backend's pre-aggregated expense/income overview.
use super::wire;
use serde::{Deserialize, Serialize};

/// Payload of `transactions/gastos/dashboard/`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    /// Income minus expenses
    #[serde(deserialize_with = "wire::amount")]
    pub balance: f64,
    /// Sum of all income
    #[serde(rename = "total_ingresos", deserialize_with = "wire::amount")]
    pub total_income: f64,
    /// Sum of all expenses
    #[serde(rename = "total_gastos", deserialize_with = "wire::amount")]
    pub total_expense: f64,
    /// Expense totals per category
    #[serde(rename = "gastos_por_categoria")]
    pub expenses_by_category: Vec<CategoryTotal>,
    /// Income and expense per month
    #[serde(rename = "evolucion_mensual")]
    pub monthly: Vec<MonthlyFlow>,
}

/// Total spent in one category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// Category name
    #[serde(rename = "categoria")]
    pub category: String,
    /// Amount spent in the category
    #[serde(deserialize_with = "wire::amount")]
    pub total: f64,
}

/// Income and expense for one month of the evolution chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MonthlyFlow {
    /// Month label as rendered by the backend
    #[serde(rename = "mes")]
    pub month: String,
    /// Income for the month
    #[serde(rename = "ingresos", deserialize_with = "wire::amount")]
    pub income: f64,
    /// Expenses for the month
    #[serde(rename = "gastos", deserialize_with = "wire::amount")]
    pub expense: f64,
}

impl MonthlyFlow {
    /// Income minus expenses for the month.
    #[must_use]
    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}
