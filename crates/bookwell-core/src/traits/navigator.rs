//! Navigation collaborator trait.

/// Trait for the routing layer the session lifecycle redirects through.
///
/// Calls are fire-and-forget: the core never awaits navigation completion
/// and never retries a redirect.
pub trait Navigator: Send + Sync + std::fmt::Debug + 'static {
    /// Replace the current route with `path`.
    fn replace(&self, path: &str);
}
