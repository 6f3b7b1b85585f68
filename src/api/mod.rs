//! Endpoint services - one thin async function per backend operation.
//!
//! Each function takes the shared [`ApiClient`](crate::http::ApiClient), so
//! every call goes through the same CSRF and session interceptors. Paths are
//! relative to the configured base URL.

pub mod auth;
pub mod budgets;
pub mod categories;
pub mod goals;
pub mod loans;
pub mod notifications;
pub mod transactions;
