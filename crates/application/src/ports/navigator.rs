//! Navigation port

use std::time::Duration;

use url::Url;

/// Port for leaving the app, e.g. to the SSO login page.
pub trait Navigator: Send + Sync {
    /// Navigates to `target` once `delay` has elapsed. Must not block.
    fn schedule_redirect(&self, target: Url, delay: Duration);
}
