//! Shared test utilities for the finance client.
//!
//! Provides an in-memory transport that records every request, a cookie store
//! and a navigator that record what they were asked to do, and helpers that
//! wire them into an [`ApiClient`] pointed at a local base URL.

#![allow(clippy::unwrap_used)]

use crate::{
    config::api::{ApiConfig, CSRF_HEADER},
    errors::Result,
    http::{
        client::ApiClient,
        cookies::CookieStore,
        navigator::Navigator,
        transport::{ApiRequest, ApiResponse, Transport},
    },
};
use chrono::NaiveDate;
use reqwest::{Method, StatusCode};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};
use tracing_subscriber::EnvFilter;

/// Routes tests through `tracing` output captured by the test harness.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// A request as the mock transport saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Method as sent
    pub method: Method,
    /// URL path, without the host
    pub path: String,
    /// Value of the CSRF header, if attached
    pub csrf_header: Option<String>,
    /// JSON payload, if any
    pub body: Option<serde_json::Value>,
}

type Handler = dyn Fn(&ApiRequest) -> Result<ApiResponse> + Send + Sync;

/// Transport answering from a closure, with optional simulated latency.
pub struct MockTransport {
    handler: Box<Handler>,
    latency: Duration,
    csrf_latency: Duration,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Answers every request with `handler`.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<ApiResponse> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
            latency: Duration::ZERO,
            csrf_latency: Duration::ZERO,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Delays every response, so concurrent callers overlap.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self.csrf_latency = latency;
        self
    }

    /// Delays only the CSRF token endpoint.
    #[must_use]
    pub fn with_csrf_latency(mut self, latency: Duration) -> Self {
        self.csrf_latency = latency;
        self
    }

    /// Every request seen so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests other than the token fetch.
    pub fn api_requests(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| !is_csrf_path(&r.path))
            .collect()
    }

    /// Number of outbound token fetches.
    pub fn csrf_fetches(&self) -> usize {
        self.requests()
            .iter()
            .filter(|r| is_csrf_path(&r.path))
            .count()
    }
}

fn is_csrf_path(path: &str) -> bool {
    path.ends_with("/auth/csrf/")
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let path = request.url.path().to_string();
        let delay = if is_csrf_path(&path) {
            self.csrf_latency
        } else {
            self.latency
        };
        self.requests.lock().unwrap().push(RecordedRequest {
            method: request.method.clone(),
            path,
            csrf_header: request.header(CSRF_HEADER).map(str::to_string),
            body: request.body.clone(),
        });

        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        (self.handler)(&request)
    }
}

/// Successful response with a JSON (or empty) body.
pub fn json_response(status: StatusCode, body: &str) -> Result<ApiResponse> {
    Ok(ApiResponse::new(status, body))
}

/// The token endpoint's success payload.
pub fn csrf_ok(token: &str) -> Result<ApiResponse> {
    json_response(StatusCode::OK, &format!(r#"{{"csrfToken": "{token}"}}"#))
}

/// Cookie store backed by a map.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryCookies {
    /// Sets a cookie value.
    pub fn set(&self, name: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.lock().unwrap().get(name).cloned()
    }
}

/// Navigator that remembers every route it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Routes navigated to, in order.
    pub fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}

/// Config pointing at a local backend.
pub fn test_config() -> ApiConfig {
    ApiConfig {
        base_url: "http://localhost:8000/api".to_string(),
        ..ApiConfig::default()
    }
}

/// Client over `transport` with fresh cookies and a recording navigator.
pub fn test_client(
    transport: MockTransport,
) -> (
    ApiClient<MockTransport>,
    Arc<MemoryCookies>,
    Arc<RecordingNavigator>,
) {
    let navigator = Arc::new(RecordingNavigator::default());
    let (client, cookies) = test_client_with(transport, Arc::clone(&navigator));
    (client, cookies, navigator)
}

/// Client over `transport` reporting redirects to `navigator`.
pub fn test_client_with(
    transport: MockTransport,
    navigator: Arc<RecordingNavigator>,
) -> (ApiClient<MockTransport>, Arc<MemoryCookies>) {
    let cookies = Arc::new(MemoryCookies::default());
    let client = ApiClient::new(
        transport,
        Box::new(Arc::clone(&cookies)),
        navigator,
        &test_config(),
    )
    .unwrap();
    (client, cookies)
}
