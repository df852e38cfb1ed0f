//! Navigator that performs redirects on a tokio timer.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use url::Url;
use wristo_application::ports::Navigator;

type RedirectHandler = Arc<dyn Fn(Url) + Send + Sync>;

/// Runs a handler with the target URL once the delay has passed.
///
/// At most one redirect is pending at a time; requests made while one is
/// pending are dropped, so a burst of rejected calls leads to a single
/// login page.
#[derive(Clone)]
pub struct DeferredNavigator {
    handler: RedirectHandler,
    pending: Arc<AtomicBool>,
    task: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl DeferredNavigator {
    /// Creates a navigator calling `handler` for each redirect.
    #[must_use]
    pub fn new(handler: impl Fn(Url) + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            pending: Arc::new(AtomicBool::new(false)),
            task: Arc::new(Mutex::new(None)),
        }
    }

    /// Creates a navigator that only logs the login URL.
    #[must_use]
    pub fn logging() -> Self {
        Self::new(|target| info!(%target, "Sign in again at"))
    }

    /// Returns true while a redirect is waiting for its delay.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Waits for the pending redirect, if any, to fire.
    pub async fn settle(&self) {
        let task = self.task.lock().ok().and_then(|mut slot| slot.take());
        if let Some(task) = task {
            if let Err(err) = task.await {
                warn!(error = %err, "Redirect task failed");
            }
        }
    }
}

impl Navigator for DeferredNavigator {
    fn schedule_redirect(&self, target: Url, delay: Duration) {
        if self.pending.swap(true, Ordering::AcqRel) {
            debug!(%target, "Redirect already pending");
            return;
        }

        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!(%target, "No runtime to schedule redirect on, navigating now");
            self.pending.store(false, Ordering::Release);
            (self.handler)(target);
            return;
        };

        let handler = self.handler.clone();
        let pending = self.pending.clone();
        let task = runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            pending.store(false, Ordering::Release);
            handler(target);
        });

        match self.task.lock() {
            Ok(mut slot) => *slot = Some(task),
            Err(_) => warn!("Redirect task slot poisoned"),
        }
    }
}

impl std::fmt::Debug for DeferredNavigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredNavigator")
            .field("pending", &self.is_pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recording() -> (DeferredNavigator, Arc<Mutex<Vec<Url>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let navigator = DeferredNavigator::new(move |url| sink.lock().unwrap().push(url));
        (navigator, seen)
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_fires_after_delay() {
        let (navigator, seen) = recording();
        let target = Url::parse("https://sso.example.com/login").unwrap();
        navigator.schedule_redirect(target.clone(), Duration::from_millis(1500));

        assert!(navigator.is_pending());
        assert!(seen.lock().unwrap().is_empty());

        navigator.settle().await;
        assert!(!navigator.is_pending());
        assert_eq!(*seen.lock().unwrap(), vec![target]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_duplicate_redirects_collapse() {
        let (navigator, seen) = recording();
        let target = Url::parse("https://sso.example.com/login").unwrap();
        navigator.schedule_redirect(target.clone(), Duration::from_millis(1500));
        navigator.schedule_redirect(target.clone(), Duration::from_millis(1500));
        navigator.settle().await;
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_without_runtime_navigates_immediately() {
        let (navigator, seen) = recording();
        navigator.schedule_redirect(Url::parse("https://sso.example.com/login").unwrap(), Duration::from_secs(1));
        assert_eq!(seen.lock().unwrap().len(), 1);
        assert!(!navigator.is_pending());
    }
}
