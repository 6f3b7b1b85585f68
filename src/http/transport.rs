//! Request/response types and the `Transport` seam.
//!
//! `ApiClient` only ever talks to the network through [`Transport`], so the
//! interceptors and the CSRF manager can be exercised against an in-memory
//! transport in tests. [`ReqwestTransport`] is the production implementation:
//! one shared `reqwest::Client` with JSON headers and a cookie jar.

use crate::errors::{Error, FieldErrors, Result};
use reqwest::{
    Method, StatusCode, Url,
    cookie::Jar,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::de::DeserializeOwned;
use std::{future::Future, sync::Arc};

/// An outbound request after interceptors have run.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL, already joined to the base
    pub url: Url,
    /// Headers added by interceptors; JSON headers are set by the transport
    pub headers: HeaderMap,
    /// JSON payload, if any
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    /// Creates a request with no headers and no body.
    #[must_use]
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Attaches a JSON payload.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets a header, ignoring values that are not valid header text.
    pub fn set_header(&mut self, name: HeaderName, value: &str) {
        match HeaderValue::from_str(value) {
            Ok(value) => {
                self.headers.insert(name, value);
            }
            Err(e) => tracing::warn!("Dropping invalid value for header {}: {}", name, e),
        }
    }

    /// Header value as text, if present and valid UTF-8.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A response as seen by callers: status plus raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    status: StatusCode,
    body: String,
}

impl ApiResponse {
    /// Wraps a status and its body text.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of the response.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw body text, possibly empty.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the body as JSON.
    pub fn json<D: DeserializeOwned>(&self) -> Result<D> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Converts non-success statuses into the error taxonomy.
    ///
    /// 400 becomes `Validation` with the field map, 401 `Unauthenticated`,
    /// 404 `NotFound`, and anything else non-2xx `Status`.
    pub fn error_for_status(self, path: &str) -> Result<Self> {
        match self.status {
            s if s.is_success() => Ok(self),
            StatusCode::BAD_REQUEST => Err(Error::Validation {
                fields: parse_field_errors(&self.body),
            }),
            StatusCode::UNAUTHORIZED => Err(Error::Unauthenticated),
            StatusCode::NOT_FOUND => Err(Error::NotFound {
                path: path.to_string(),
            }),
            status => Err(Error::Status {
                status: status.as_u16(),
                path: path.to_string(),
                body: self.body,
            }),
        }
    }
}

/// Extracts per-field messages from a DRF-style 400 body.
///
/// Each key maps to a string or a list of strings. A body that is not a
/// JSON object is reported under `non_field_errors`.
#[must_use]
pub fn parse_field_errors(body: &str) -> FieldErrors {
    let mut fields = FieldErrors::new();
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => {
            for (field, value) in map {
                let messages = match value {
                    serde_json::Value::String(s) => vec![s],
                    serde_json::Value::Array(items) => items
                        .into_iter()
                        .map(|item| match item {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect(),
                    other => vec![other.to_string()],
                };
                fields.insert(field, messages);
            }
        }
        _ if body.trim().is_empty() => {}
        _ => {
            fields.insert("non_field_errors".to_string(), vec![body.trim().to_string()]);
        }
    }
    fields
}

/// Sends requests to the backend.
pub trait Transport: Send + Sync {
    /// Performs one request. Never retries.
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse>> + Send;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Builds a client that sends JSON and stores cookies in `jar`.
    pub fn new(jar: Arc<Jar>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_provider(jar)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        let mut builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok(ApiResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_field_errors_lists_and_strings() {
        let fields = parse_field_errors(
            r#"{"monto": ["Asegúrese de que este valor sea mayor que 0."], "detail": "Datos inválidos"}"#,
        );
        assert_eq!(
            fields["monto"],
            vec!["Asegúrese de que este valor sea mayor que 0.".to_string()]
        );
        assert_eq!(fields["detail"], vec!["Datos inválidos".to_string()]);
    }

    #[test]
    fn test_parse_field_errors_plain_text() {
        let fields = parse_field_errors("Bad Request");
        assert_eq!(fields["non_field_errors"], vec!["Bad Request".to_string()]);
        assert!(parse_field_errors("").is_empty());
    }

    #[test]
    fn test_error_for_status_mapping() {
        let ok = ApiResponse::new(StatusCode::CREATED, "{}");
        assert!(ok.error_for_status("goals/").is_ok());

        let bad = ApiResponse::new(StatusCode::BAD_REQUEST, r#"{"nombre": ["Requerido."]}"#);
        match bad.error_for_status("goals/") {
            Err(Error::Validation { fields }) => {
                assert_eq!(fields["nombre"], vec!["Requerido.".to_string()]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }

        let missing = ApiResponse::new(StatusCode::NOT_FOUND, "");
        assert!(matches!(
            missing.error_for_status("budgets/monthly/current_month/"),
            Err(Error::NotFound { path }) if path == "budgets/monthly/current_month/"
        ));

        let boom = ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert!(matches!(
            boom.error_for_status("loans/"),
            Err(Error::Status { status: 500, .. })
        ));
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut request = ApiRequest::new(Method::POST, Url::parse("http://localhost/api/").unwrap());
        request.set_header(HeaderName::from_static("x-csrftoken"), "abc");
        assert_eq!(request.header("X-CSRFToken"), Some("abc"));
    }

    #[test]
    fn test_invalid_header_value_is_dropped() {
        let mut request = ApiRequest::new(Method::POST, Url::parse("http://localhost/api/").unwrap());
        request.set_header(HeaderName::from_static("x-csrftoken"), "bad\nvalue");
        assert!(request.header("x-csrftoken").is_none());
    }
}
