use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::error::SearchError;

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Clones share the same flag, so one clone can be handed to a search while
/// another is kept to cancel it from a different thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    done: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

/// Limits applied to a single search.
///
/// Limits are checked between expansions of the main loop, never in the
/// middle of one.
#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelToken>,
    pub max_expansions: Option<u64>,
}

impl SearchOptions {
    /// No limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort with [`SearchError::DeadlineExceeded`] once `deadline` passes.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Deadline `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Abort with [`SearchError::Cancelled`] once `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Abort with [`SearchError::ExpansionLimit`] before expanding more than
    /// `limit` cells.
    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    /// Cancellation and deadline, checked at the top of every iteration.
    pub(crate) fn check_interrupt(&self) -> Result<(), SearchError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(SearchError::Cancelled);
        }
        if self.deadline.is_some_and(|d| Instant::now() >= d) {
            return Err(SearchError::DeadlineExceeded);
        }
        Ok(())
    }

    /// Expansion budget, checked before a cell is closed.
    pub(crate) fn check_budget(&self, expanded: u64) -> Result<(), SearchError> {
        match self.max_expansions {
            Some(limit) if expanded >= limit => Err(SearchError::ExpansionLimit { limit }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_clones_share_state() {
        let a = CancelToken::new();
        let b = a.clone();
        assert!(!b.is_cancelled());
        a.cancel();
        assert!(b.is_cancelled());
    }

    #[test]
    fn interrupts() {
        assert_eq!(SearchOptions::new().check_interrupt(), Ok(()));

        let token = CancelToken::new();
        let opts = SearchOptions::new().with_cancel(token.clone());
        assert_eq!(opts.check_interrupt(), Ok(()));
        token.cancel();
        assert_eq!(opts.check_interrupt(), Err(SearchError::Cancelled));

        let past = SearchOptions::new().with_deadline(Instant::now());
        assert_eq!(past.check_interrupt(), Err(SearchError::DeadlineExceeded));

        let later = SearchOptions::new().with_timeout(Duration::from_secs(3600));
        assert_eq!(later.check_interrupt(), Ok(()));
    }

    #[test]
    fn budget() {
        assert_eq!(SearchOptions::new().check_budget(usize::MAX as u64), Ok(()));
        let opts = SearchOptions::new().with_max_expansions(3);
        assert_eq!(opts.check_budget(2), Ok(()));
        assert_eq!(
            opts.check_budget(3),
            Err(SearchError::ExpansionLimit { limit: 3 })
        );
    }
}
