use std::future::Future;
use std::sync::Arc;

use tokio::sync::watch;

/// Result of a screen-bound operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Completed(T),
    /// The screen went away first. Not an error; callers render nothing.
    Aborted,
    /// The same load was already running; this call was dropped.
    Skipped,
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Aborted | Outcome::Skipped => None,
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, Outcome::Aborted)
    }
}

/// Abort signal tied to a screen.
///
/// Every screen-level request runs through [`ScreenLifetime::run`]. Ending the
/// lifetime, or dropping every clone of it, aborts whatever is still pending.
#[derive(Clone)]
pub struct ScreenLifetime {
    name: &'static str,
    ended_tx: Arc<watch::Sender<bool>>,
}

impl ScreenLifetime {
    pub fn new(name: &'static str) -> Self {
        let (ended_tx, _) = watch::channel(false);
        Self {
            name,
            ended_tx: Arc::new(ended_tx),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Screen unmounted
    pub fn end(&self) {
        if !self.ended_tx.send_replace(true) {
            log::debug!("Screen '{}' ended, aborting pending requests", self.name);
        }
    }

    pub fn is_ended(&self) -> bool {
        *self.ended_tx.borrow()
    }

    pub fn guard(&self) -> LifetimeGuard {
        LifetimeGuard {
            ended_rx: self.ended_tx.subscribe(),
        }
    }

    /// Drive `work` until it finishes or the screen ends, whichever comes first.
    pub async fn run<F>(&self, work: F) -> Outcome<F::Output>
    where
        F: Future,
    {
        let mut guard = self.guard();
        if guard.poll_ended() {
            return Outcome::Aborted;
        }

        tokio::select! {
            biased;
            _ = guard.wait() => {
                log::debug!("Request aborted: screen '{}' ended", self.name);
                Outcome::Aborted
            }
            value = work => Outcome::Completed(value),
        }
    }
}

/// Helper for observing the end of a screen from inside a task
pub struct LifetimeGuard {
    ended_rx: watch::Receiver<bool>,
}

impl LifetimeGuard {
    /// Resolves once the screen has ended or every [`ScreenLifetime`] clone is gone
    pub async fn wait(&mut self) {
        let _ = self.ended_rx.wait_for(|ended| *ended).await;
    }

    pub fn poll_ended(&self) -> bool {
        *self.ended_rx.borrow()
    }
}
