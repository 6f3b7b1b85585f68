/// Backend base URL, CSRF endpoint and login route
pub mod api;

/// Display and polling settings from finance.toml
pub mod settings;

/// Persisted client-side preferences (user, dark mode)
pub mod preferences;
