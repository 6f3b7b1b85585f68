//! Cookie lookup capability used by the CSRF manager.
//!
//! The backend mirrors the CSRF token into a cookie on every response. Reading it
//! back through [`CookieStore`] lets the manager skip the network entirely once
//! the cookie exists, and lets tests substitute an in-memory store.

use reqwest::{
    Url,
    cookie::{CookieStore as _, Jar},
};
use std::sync::Arc;

/// Read-only view of the cookies that will accompany requests to the backend.
pub trait CookieStore: Send + Sync {
    /// Value of the cookie called `name`, if set.
    fn get(&self, name: &str) -> Option<String>;
}

impl<C: CookieStore + ?Sized> CookieStore for Arc<C> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// [`CookieStore`] over the `reqwest` jar shared with the transport.
#[derive(Debug, Clone)]
pub struct JarCookies {
    jar: Arc<Jar>,
    url: Url,
}

impl JarCookies {
    /// Reads cookies the jar would send to `url`.
    #[must_use]
    pub const fn new(jar: Arc<Jar>, url: Url) -> Self {
        Self { jar, url }
    }
}

impl CookieStore for JarCookies {
    fn get(&self, name: &str) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let header = header.to_str().ok()?;
        find_cookie(header, name)
    }
}

/// Finds `name` in a `Cookie` header value (`a=1; csrftoken=xyz`).
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
