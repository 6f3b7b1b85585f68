//! Category entity - labels transactions and budgets.
use serde::{Deserialize, Serialize};

/// A spending or income category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: i64,
    /// Display name (e.g., "Comida", "Transporte")
    #[serde(rename = "nombre")]
    pub name: String,
    /// `"gasto"` or `"ingreso"` when the backend distinguishes them
    #[serde(rename = "tipo", default)]
    pub kind: Option<String>,
    /// Hex colour used in charts
    #[serde(default)]
    pub color: Option<String>,
}

/// Category details embedded in transaction and budget payloads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInfo {
    /// Unique identifier for the category
    pub id: i64,
    /// Display name
    #[serde(rename = "nombre")]
    pub name: String,
    /// Hex colour used in charts
    #[serde(default)]
    pub color: Option<String>,
}
