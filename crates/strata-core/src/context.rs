//! Per-request cancellation and deadline propagation.
//!
//! Every layer takes a `&RequestContext` and hands it down unchanged. The
//! data-access layer wraps its storage round trip in [`RequestContext::run`],
//! which drops the in-flight future as soon as the context is cancelled or
//! its deadline passes.

use crate::{StrataError, StrataResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation signal plus optional deadline for one request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context with no deadline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Creates a context that expires at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Derives a context that is cancelled whenever `self` is.
    ///
    /// Cancelling the child does not cancel the parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Self {
            token: self.token.child_token(),
            deadline: self.deadline,
        }
    }

    /// Derives a child whose deadline is the earlier of the parent's and
    /// `timeout` from now.
    #[must_use]
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) if parent < candidate => parent,
            _ => candidate,
        };
        Self {
            token: self.token.child_token(),
            deadline: Some(deadline),
        }
    }

    /// Cancels this context and every child derived from it.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns true once [`cancel`](Self::cancel) has been called here or on a parent.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns the time left before the deadline, if any.
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Returns a handle that cancels this context from another task.
    #[must_use]
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Drives `fut` to completion unless the context ends first.
    ///
    /// An already-ended context returns without polling `fut`.
    ///
    /// # Errors
    ///
    /// Returns [`StrataError::Cancelled`] or [`StrataError::DeadlineExceeded`]
    /// when the context ends first, otherwise whatever `fut` returns.
    pub async fn run<F, T>(&self, fut: F) -> StrataResult<T>
    where
        F: Future<Output = StrataResult<T>>,
    {
        if self.token.is_cancelled() {
            return Err(StrataError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Err(StrataError::DeadlineExceeded);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(StrataError::Cancelled),
            () = expired => Err(StrataError::DeadlineExceeded),
            result = fut => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_run_returns_future_output() {
        let ctx = RequestContext::new();
        let value = ctx.run(async { Ok(7) }).await.unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_run_passes_errors_through() {
        let ctx = RequestContext::new();
        let err = ctx
            .run(async { Err::<(), _>(StrataError::not_found("User", 3)) })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_already_cancelled_does_not_poll() {
        let ctx = RequestContext::new();
        ctx.cancel();

        let polled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&polled);
        let err = ctx
            .run(async move {
                flag.store(true, Ordering::SeqCst);
                Ok(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StrataError::Cancelled));
        assert!(!polled.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_cancel_during_run_returns_promptly() {
        let ctx = RequestContext::new();
        let token = ctx.cancellation_token();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            token.cancel();
        });

        let started = std::time::Instant::now();
        let err = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            })
            .await
            .unwrap_err();

        assert!(matches!(err, StrataError::Cancelled));
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_deadline_exceeded() {
        let ctx = RequestContext::with_timeout(Duration::from_millis(20));
        let err = ctx
            .run(async {
                tokio::time::sleep(Duration::from_secs(30)).await;
                Ok(())
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StrataError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_elapsed_deadline_fails_fast() {
        let ctx = RequestContext::with_deadline(Instant::now());
        tokio::time::sleep(Duration::from_millis(1)).await;
        let err = ctx.run(async { Ok(()) }).await.unwrap_err();
        assert!(matches!(err, StrataError::DeadlineExceeded));
    }

    #[tokio::test]
    async fn test_parent_cancel_reaches_child() {
        let parent = RequestContext::new();
        let child = parent.child();
        parent.cancel();
        assert!(child.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_cancel_does_not_reach_parent() {
        let parent = RequestContext::new();
        let child = parent.child();
        child.cancel();
        assert!(!parent.is_cancelled());
    }

    #[tokio::test]
    async fn test_child_with_timeout_keeps_earlier_deadline() {
        let parent = RequestContext::with_timeout(Duration::from_millis(10));
        let child = parent.child_with_timeout(Duration::from_secs(60));
        assert_eq!(child.deadline(), parent.deadline());

        let relaxed = RequestContext::new().child_with_timeout(Duration::from_secs(60));
        assert!(relaxed.remaining().unwrap() > Duration::from_secs(50));
    }
}
