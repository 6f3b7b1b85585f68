//! Navigation side effect fired when a session turns out to be unauthenticated.

/// Performs a client-side navigation.
pub trait Navigator: Send + Sync {
    /// Navigates to `route`, abandoning the current view.
    fn navigate(&self, route: &str);
}

/// Navigator for headless use: records the redirect in the log only.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        tracing::warn!("Session is not authenticated; redirecting to {}", route);
    }
}
