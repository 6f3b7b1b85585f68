//! HTTP layer - the transport seam, CSRF token handling and the API client.
//!
//! [`client::ApiClient`] is the entry point. Everything else is a collaborator
//! it is assembled from, exposed so tests and embedders can swap them.

pub mod client;
pub mod cookies;
pub mod csrf;
pub mod listing;
pub mod navigator;
pub mod transport;

pub use client::ApiClient;
pub use csrf::{CsrfToken, CsrfTokenManager};
pub use listing::{Listing, Page};
pub use transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport};
