//! Notification entities - in-app notices about goals, budgets and loans.
use serde::{Deserialize, Serialize};

/// Urgency attached to a notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Needs action now
    Urgent,
    /// Needs attention soon
    High,
    /// Worth a look
    Medium,
    /// Informational
    #[default]
    Low,
}

/// A single notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identifier for the notification
    pub id: i64,
    /// Short heading
    #[serde(rename = "titulo", default)]
    pub title: String,
    /// Body text
    #[serde(rename = "mensaje", default)]
    pub message: String,
    /// Backend type tag such as `goal_completed` or `budget_exceeded`
    #[serde(rename = "tipo", default)]
    pub kind: String,
    /// Urgency, `low` when absent
    #[serde(rename = "prioridad", default)]
    pub priority: Priority,
    /// Whether the user has seen it
    #[serde(rename = "leida", default)]
    pub read: bool,
    /// Humanised age ("hace 5 minutos") rendered by the backend
    #[serde(rename = "tiempo_transcurrido", default)]
    pub elapsed: Option<String>,
}

/// Response of `unread_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct UnreadCount {
    /// Number of unread notifications
    pub unread_count: u32,
}
