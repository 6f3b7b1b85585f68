//! API connection configuration.
//!
//! This module resolves where the backend lives and how the client talks to it:
//! the base URL, the CSRF bootstrap endpoint and cookie name, and the route the
//! client navigates to when a session expires. Values come from environment
//! variables (optionally loaded from `.env`) with defaults matching the hosted backend.

use crate::errors::{Error, Result};
use reqwest::Url;

/// Default backend base URL when `FINANCE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "https://finance-backend-k12z.onrender.com/api";
/// Path (relative to the base URL) of the token-issuing endpoint.
pub const DEFAULT_CSRF_PATH: &str = "auth/csrf/";
/// Cookie the backend mirrors the CSRF token into.
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";
/// Header carrying the token on mutating requests (`X-CSRFToken`; header
/// names are case-insensitive and stored lowercase).
pub const CSRF_HEADER: &str = "x-csrftoken";
/// Login entry point used for unauthenticated redirects.
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

/// Connection settings for the backend REST API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every endpoint path is joined onto
    pub base_url: String,
    /// Token endpoint path, relative to `base_url`
    pub csrf_path: String,
    /// Name of the cookie holding the CSRF token
    pub csrf_cookie: String,
    /// Route to navigate to on HTTP 401
    pub login_route: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            csrf_path: DEFAULT_CSRF_PATH.to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

impl ApiConfig {
    /// Builds a config from `FINANCE_API_URL` and `FINANCE_LOGIN_ROUTE`,
    /// falling back to defaults for anything unset.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("FINANCE_API_URL").unwrap_or(defaults.base_url),
            login_route: std::env::var("FINANCE_LOGIN_ROUTE").unwrap_or(defaults.login_route),
            ..defaults
        }
    }

    /// Parses the base URL, normalised to end with `/` so relative joins keep
    /// the last path segment (`.../api` + `auth/csrf/` -> `.../api/auth/csrf/`).
    pub fn base(&self) -> Result<Url> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let url = Url::parse(&raw).map_err(|e| Error::Config {
            message: format!("Invalid API base URL {raw:?}: {e}"),
        })?;
        if url.cannot_be_a_base() {
            return Err(Error::Config {
                message: format!("API base URL {raw:?} cannot be used as a base"),
            });
        }
        Ok(url)
    }

    /// Resolves an endpoint path against the base URL. Leading slashes are
    /// ignored so `"/goals/"` and `"goals/"` resolve identically.
    pub fn join(&self, path: &str) -> Result<Url> {
        join_path(&self.base()?, path)
    }
}

/// Joins `path` onto an already-normalised base URL.
pub fn join_path(base: &Url, path: &str) -> Result<Url> {
    base.join(path.trim_start_matches('/'))
        .map_err(|e| Error::Config {
            message: format!("Invalid endpoint path {path:?}: {e}"),
        })
}
