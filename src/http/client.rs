//! The shared API client and its interceptors.
//!
//! Every request goes through two hooks:
//!
//! - **request**: `POST`/`PUT`/`PATCH`/`DELETE` wait for a CSRF token and attach
//!   it as `X-CSRFToken` when one is available. Safe methods go out untouched and
//!   never wait on a token fetch.
//! - **response**: HTTP 401 triggers a single navigation to the login route and
//!   is reported as `Error::Unauthenticated`. Every other status, including 400
//!   and 404, is handed back unchanged for the caller to interpret.
//!
//! Nothing is retried and no deadline is imposed.

use super::{
    cookies::{CookieStore, JarCookies},
    csrf::{CsrfToken, CsrfTokenManager},
    listing::{Listing, Page},
    navigator::{LogNavigator, Navigator},
    transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport},
};
use crate::{
    config::api::{ApiConfig, CSRF_HEADER, join_path},
    errors::{Error, Result},
};
use reqwest::{Method, StatusCode, Url, cookie::Jar, header::HeaderName};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};
use tracing::{debug, info, trace};

/// True for methods that change server state and therefore need the CSRF header.
#[must_use]
pub fn is_mutating(method: &Method) -> bool {
    matches!(
        *method,
        Method::POST | Method::PUT | Method::PATCH | Method::DELETE
    )
}

/// HTTP client bound to one backend.
pub struct ApiClient<T> {
    transport: T,
    base_url: Url,
    csrf: CsrfTokenManager,
    navigator: Arc<dyn Navigator>,
    login_route: String,
    redirecting: AtomicBool,
}

impl<T> std::fmt::Debug for ApiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("csrf", &self.csrf)
            .field("login_route", &self.login_route)
            .finish_non_exhaustive()
    }
}

impl ApiClient<ReqwestTransport> {
    /// Builds the production client: `reqwest` transport, shared cookie jar,
    /// and a navigator that logs redirects.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base()?;
        let jar = Arc::new(Jar::default());
        let transport = ReqwestTransport::new(Arc::clone(&jar))?;
        let cookies = JarCookies::new(jar, base_url);
        Self::new(transport, Box::new(cookies), Arc::new(LogNavigator), config)
    }
}

impl<T: Transport> ApiClient<T> {
    /// Assembles a client from its collaborators.
    pub fn new(
        transport: T,
        cookies: Box<dyn CookieStore>,
        navigator: Arc<dyn Navigator>,
        config: &ApiConfig,
    ) -> Result<Self> {
        let base_url = config.base()?;
        let csrf_endpoint = join_path(&base_url, &config.csrf_path)?;
        Ok(Self {
            transport,
            csrf: CsrfTokenManager::new(cookies, config.csrf_cookie.clone(), csrf_endpoint),
            base_url,
            navigator,
            login_route: config.login_route.clone(),
            redirecting: AtomicBool::new(false),
        })
    }

    /// Base URL every endpoint path is joined to.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// The CSRF token manager shared by all requests.
    #[must_use]
    pub const fn csrf(&self) -> &CsrfTokenManager {
        &self.csrf
    }

    /// Resolves an endpoint path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        join_path(&self.base_url, path)
    }

    /// Acquires the CSRF token ahead of the first mutating request.
    pub async fn bootstrap_csrf(&self) -> Option<CsrfToken> {
        self.csrf.get_token(&self.transport).await
    }

    /// Re-arms the 401 redirect after the user has signed in again.
    pub fn reset_session_redirect(&self) {
        self.redirecting.store(false, Ordering::Release);
    }

    /// Sends one request through both interceptors.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse> {
        let mut request = ApiRequest::new(method, self.endpoint(path)?);
        request.body = body;

        self.intercept_request(&mut request).await;
        debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        trace!("{} <- {}", response.status(), path);
        self.intercept_response(response)
    }

    async fn intercept_request(&self, request: &mut ApiRequest) {
        if !is_mutating(&request.method) {
            return;
        }
        match self.csrf.get_token(&self.transport).await {
            Some(token) => request.set_header(HeaderName::from_static(CSRF_HEADER), token.as_str()),
            None => debug!(
                "Sending {} {} without a CSRF token",
                request.method, request.url
            ),
        }
    }

    fn intercept_response(&self, response: ApiResponse) -> Result<ApiResponse> {
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        if self
            .redirecting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
        {
            info!("Session rejected; navigating to {}", self.login_route);
            self.navigator.navigate(&self.login_route);
        }
        Err(Error::Unauthenticated)
    }

    /// Sends a `GET` to `path`.
    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::GET, path, None).await
    }

    /// Sends a `POST` to `path`; carries the CSRF token.
    pub async fn post(&self, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse> {
        self.request(Method::POST, path, body).await
    }

    /// Sends a `PUT` to `path`; carries the CSRF token.
    pub async fn put(&self, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse> {
        self.request(Method::PUT, path, body).await
    }

    /// Sends a `PATCH` to `path`; carries the CSRF token.
    pub async fn patch(&self, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse> {
        self.request(Method::PATCH, path, body).await
    }

    /// Sends a `DELETE` to `path`; carries the CSRF token.
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, None).await
    }

    /// `GET` and decode, treating any non-2xx status as an error.
    pub async fn get_json<D: DeserializeOwned>(&self, path: &str) -> Result<D> {
        self.get(path).await?.error_for_status(path)?.json()
    }

    /// `GET` a list endpoint, accepting either a plain or a paginated body.
    pub async fn get_list<D: DeserializeOwned>(&self, path: &str) -> Result<Vec<D>> {
        Ok(self.get_json::<Listing<D>>(path).await?.into_items())
    }

    /// `GET` a list endpoint as a page.
    pub async fn get_page<D: DeserializeOwned>(&self, path: &str) -> Result<Page<D>> {
        Ok(self.get_json::<Listing<D>>(path).await?.into_page())
    }

    /// Sends `body` as JSON and decodes the response.
    pub async fn send_json<B, D>(&self, method: Method, path: &str, body: &B) -> Result<D>
    where
        B: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.request(method, path, Some(body))
            .await?
            .error_for_status(path)?
            .json()
    }

    /// Sends a request whose response body is irrelevant (e.g. `204 No Content`).
    pub async fn send_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        self.request(method, path, body)
            .await?
            .error_for_status(path)?;
        Ok(())
    }
}
