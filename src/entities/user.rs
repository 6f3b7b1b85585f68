//! User and authentication payloads.
use serde::{Deserialize, Serialize};

/// The authenticated user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,
    /// Login name
    pub username: String,
    /// Contact email
    #[serde(default)]
    pub email: Option<String>,
    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Login form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Plain-text password
    pub password: String,
}

/// Registration form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// Desired login name
    pub username: String,
    /// Contact email
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Same password again; the backend checks they match
    pub password_confirm: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
}

/// Editable profile fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// New email, left unchanged when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New given name, left unchanged when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// New family name, left unchanged when `None`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Password change form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    /// Current password
    pub old_password: String,
    /// Replacement password
    pub new_password: String,
}

/// Response to login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// The signed-in user
    pub user: User,
}
