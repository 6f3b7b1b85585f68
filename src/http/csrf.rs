//! CSRF token acquisition and caching.
//!
//! Mutating requests must carry the backend's anti-forgery token. The token is
//! looked up in this order:
//!
//! 1. the `csrftoken` cookie, which the backend sets on any response (no network);
//! 2. the token cached in memory by an earlier fetch;
//! 3. a single `GET auth/csrf/` shared by every concurrent caller.
//!
//! Only one fetch is ever in flight. The first caller to miss becomes the
//! leader and publishes a `watch` channel in the pending slot; later callers
//! subscribe and await the leader's outcome. The slot is cleared when the fetch
//! settles, successfully or not, so a failed fetch can be retried by the next
//! request. Fetch failures are logged and reported as `None`: the request then
//! goes out without the header and the backend rejects it on its own.

use super::{
    cookies::CookieStore,
    transport::{ApiRequest, Transport},
};
use reqwest::{Method, Url};
use serde::Deserialize;
use std::{
    fmt,
    sync::{Mutex, MutexGuard, PoisonError},
};
use tokio::sync::watch;
use tracing::{debug, trace, warn};

/// An anti-forgery token. Its value is never written to logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The value to send in the CSRF header.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

#[derive(Deserialize)]
struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    csrf_token: String,
}

/// `None` until the leader settles, then `Some(outcome)`.
type FetchOutcome = Option<Option<CsrfToken>>;

/// Caches the CSRF token and de-duplicates fetches of it.
pub struct CsrfTokenManager {
    cookies: Box<dyn CookieStore>,
    cookie_name: String,
    endpoint: Url,
    cached: Mutex<Option<CsrfToken>>,
    pending: Mutex<Option<watch::Receiver<FetchOutcome>>>,
}

impl fmt::Debug for CsrfTokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsrfTokenManager")
            .field("cookie_name", &self.cookie_name)
            .field("endpoint", &self.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

enum Role {
    Leader(watch::Sender<FetchOutcome>),
    Follower(watch::Receiver<FetchOutcome>),
}

/// Clears the pending slot when the leader finishes or is dropped mid-fetch.
struct PendingGuard<'a> {
    slot: &'a Mutex<Option<watch::Receiver<FetchOutcome>>>,
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        lock(self.slot).take();
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CsrfTokenManager {
    /// Creates a manager reading `cookie_name` from `cookies` and fetching from `endpoint`.
    #[must_use]
    pub fn new(cookies: Box<dyn CookieStore>, cookie_name: impl Into<String>, endpoint: Url) -> Self {
        Self {
            cookies,
            cookie_name: cookie_name.into(),
            endpoint,
            cached: Mutex::new(None),
            pending: Mutex::new(None),
        }
    }

    /// Token endpoint this manager fetches from.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Returns a token if one is available without I/O.
    #[must_use]
    pub fn current(&self) -> Option<CsrfToken> {
        if let Some(value) = self.cookies.get(&self.cookie_name) {
            trace!("CSRF token found in cookie {}", self.cookie_name);
            return Some(CsrfToken(value));
        }
        lock(&self.cached).clone()
    }

    /// Returns the token, fetching it at most once across concurrent callers.
    ///
    /// Returns `None` when the fetch fails; the failure is logged, never raised.
    pub async fn get_token<T: Transport>(&self, transport: &T) -> Option<CsrfToken> {
        if let Some(token) = self.current() {
            return Some(token);
        }

        let role = {
            let mut pending = lock(&self.pending);
            match pending.as_ref() {
                Some(receiver) => Role::Follower(receiver.clone()),
                None => {
                    let (sender, receiver) = watch::channel(None);
                    *pending = Some(receiver);
                    Role::Leader(sender)
                }
            }
        };

        match role {
            Role::Follower(mut receiver) => {
                trace!("Awaiting in-flight CSRF token fetch");
                let outcome = receiver.wait_for(Option::is_some).await.ok()?;
                outcome.clone().flatten()
            }
            Role::Leader(sender) => {
                let guard = PendingGuard {
                    slot: &self.pending,
                };
                let token = self.fetch(transport).await;
                if let Some(token) = &token {
                    *lock(&self.cached) = Some(token.clone());
                }
                drop(guard);
                sender.send_replace(Some(token.clone()));
                token
            }
        }
    }

    /// Forgets the cached token, e.g. after logout.
    pub fn clear(&self) {
        lock(&self.cached).take();
        debug!("Cleared cached CSRF token");
    }

    async fn fetch<T: Transport>(&self, transport: &T) -> Option<CsrfToken> {
        debug!("Fetching CSRF token from {}", self.endpoint);
        let request = ApiRequest::new(Method::GET, self.endpoint.clone());

        let response = match transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Could not fetch CSRF token: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!(
                "CSRF token endpoint answered {}; continuing without token",
                response.status()
            );
            return None;
        }

        match response.json::<CsrfResponse>() {
            Ok(body) if !body.csrf_token.is_empty() => Some(CsrfToken(body.csrf_token)),
            Ok(_) => {
                warn!("CSRF token endpoint returned an empty token");
                None
            }
            Err(e) => {
                warn!("Malformed CSRF token response: {}", e);
                None
            }
        }
    }
}
