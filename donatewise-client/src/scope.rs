//! View-scoped cancellation and loading flags
//!
//! A view owns a [`ViewScope`]; requests run through it resolve to
//! [`ClientError::Cancelled`] once the view is gone, so stale results are
//! never applied.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio_util::sync::{CancellationToken, DropGuard};

use crate::{ClientError, ClientResult};

/// Cancellation scope tied to a view's lifetime; cancels on drop
#[derive(Debug)]
pub struct ViewScope {
    token: CancellationToken,
    _guard: DropGuard,
}

impl ViewScope {
    pub fn new() -> Self {
        let token = CancellationToken::new();
        let guard = token.clone().drop_guard();
        Self { token, _guard: guard }
    }

    /// Child scope, cancelled with its parent
    pub fn child(&self) -> Self {
        let token = self.token.child_token();
        let guard = token.clone().drop_guard();
        Self { token, _guard: guard }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token that outlives the scope handle, for spawned tasks
    pub fn handle(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Run `fut` unless the scope is cancelled first.
    ///
    /// A result that arrives after cancellation is discarded.
    pub async fn run<F, T>(&self, fut: F) -> ClientResult<T>
    where
        F: Future<Output = ClientResult<T>>,
    {
        run_scoped(&self.token, fut).await
    }
}

impl Default for ViewScope {
    fn default() -> Self {
        Self::new()
    }
}

/// [`ViewScope::run`] over a bare token
pub async fn run_scoped<F, T>(token: &CancellationToken, fut: F) -> ClientResult<T>
where
    F: Future<Output = ClientResult<T>>,
{
    if token.is_cancelled() {
        return Err(ClientError::Cancelled);
    }
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(ClientError::Cancelled),
        result = fut => {
            if token.is_cancelled() {
                Err(ClientError::Cancelled)
            } else {
                result
            }
        }
    }
}

/// Loading indicator shared between a view and its requests
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Arc<AtomicBool>);

impl LoadingFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Raise the flag until the returned guard drops
    pub fn start(&self) -> LoadingGuard {
        self.0.store(true, Ordering::Release);
        LoadingGuard(self.0.clone())
    }
}

/// Clears its [`LoadingFlag`] on drop: success, error and cancellation alike
#[derive(Debug)]
pub struct LoadingGuard(Arc<AtomicBool>);

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
