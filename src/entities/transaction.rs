//! Transaction entity - an expense (`gasto`) or income (`ingreso`) record.
//!
//! Each record has a positive `amount`, a calendar `date`, a description, an
//! optional category reference and an optional recurrence. `recurrence_days`
//! is present if and only if `is_recurring` is set.
use super::{category::CategoryInfo, wire};
use crate::errors::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which ledger a transaction belongs to. Selects the endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    /// Money going out (`gasto`)
    Expense,
    /// Money coming in (`ingreso`)
    Income,
}

impl TransactionKind {
    /// Collection path for this kind, relative to the API base.
    #[must_use]
    pub const fn collection_path(self) -> &'static str {
        match self {
            Self::Expense => "transactions/gastos/",
            Self::Income => "transactions/ingresos/",
        }
    }

    /// Sign applied when folding amounts into a running balance.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Expense => -1.0,
            Self::Income => 1.0,
        }
    }
}

/// A transaction as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for the transaction
    pub id: i64,
    /// Always positive; the kind decides whether it adds or subtracts
    #[serde(rename = "monto", deserialize_with = "wire::amount")]
    pub amount: f64,
    /// Calendar date the transaction applies to
    #[serde(rename = "fecha", deserialize_with = "wire::date")]
    pub date: NaiveDate,
    /// Free-form description
    #[serde(rename = "descripcion", default)]
    pub description: String,
    /// Category id, if categorised
    #[serde(rename = "categoria", default)]
    pub category: Option<i64>,
    /// Expanded category details supplied alongside the id
    #[serde(rename = "categoria_info", default)]
    pub category_info: Option<CategoryInfo>,
    /// Whether the transaction repeats
    #[serde(rename = "es_recurrente", default)]
    pub is_recurring: bool,
    /// Recurrence interval in days
    #[serde(rename = "frecuencia_dias", default)]
    pub recurrence_days: Option<u32>,
}

impl Transaction {
    /// Display name of the category, if the backend expanded it.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        self.category_info.as_ref().map(|info| info.name.as_str())
    }
}

/// Payload for creating or updating a transaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTransaction {
    /// Amount; must be positive
    #[serde(rename = "monto")]
    pub amount: f64,
    /// Calendar date the transaction applies to
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Free-form description
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Category id, if categorised
    #[serde(rename = "categoria")]
    pub category: Option<i64>,
    /// Whether the transaction repeats
    #[serde(rename = "es_recurrente")]
    pub is_recurring: bool,
    /// Recurrence interval in days; required when recurring
    #[serde(rename = "frecuencia_dias")]
    pub recurrence_days: Option<u32>,
}

impl NewTransaction {
    /// Checks the record invariants before it is sent.
    ///
    /// A non-recurring record has any stray interval cleared rather than
    /// rejected, matching how the entry form submits.
    ///
    /// # Errors
    /// Returns `Error::InvalidRecord` if the amount is not a positive finite
    /// number, or if a recurring record has no positive interval.
    pub fn validated(mut self) -> Result<Self> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err(Error::InvalidRecord {
                message: format!("amount must be greater than zero, got {}", self.amount),
            });
        }

        if self.is_recurring {
            match self.recurrence_days {
                Some(days) if days > 0 => {}
                _ => {
                    return Err(Error::InvalidRecord {
                        message: "recurring transactions need an interval in days".to_string(),
                    });
                }
            }
        } else {
            self.recurrence_days = None;
        }

        Ok(self)
    }
}
