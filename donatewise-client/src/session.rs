//! Session state
//!
//! One [`Session`] per running client. It is written only by login, signup,
//! restore and logout and read by every request.

use std::sync::Arc;

use shared::authz::Actor;
use shared::models::User;
use shared::token;
use tokio::sync::RwLock;

use crate::{ClientResult, TokenStore};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub token: Option<String>,
    pub user: Option<User>,
    /// Driver profile id, cached after the first lookup
    pub driver_id: Option<i64>,
    /// Center run by the staff user, cached after the first lookup
    pub center_id: Option<i64>,
}

/// Shared handle to the session; clones see the same state
#[derive(Debug, Clone, Default)]
pub struct Session {
    inner: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    pub async fn user(&self) -> Option<User> {
        self.inner.read().await.user.clone()
    }

    pub async fn is_logged_in(&self) -> bool {
        self.inner.read().await.token.is_some()
    }

    pub async fn snapshot(&self) -> SessionState {
        self.inner.read().await.clone()
    }

    /// Install a token and the user decoded from it.
    ///
    /// Cached profile ids are dropped, they belong to the previous user.
    pub async fn set_token(&self, token: impl Into<String>) -> ClientResult<User> {
        let token = token.into();
        let user = token::decode_user(&token)?;
        let mut state = self.inner.write().await;
        *state = SessionState {
            token: Some(token),
            user: Some(user.clone()),
            driver_id: None,
            center_id: None,
        };
        tracing::info!(username = %user.username, role = %user.role, "session started");
        Ok(user)
    }

    pub async fn clear(&self) {
        let mut state = self.inner.write().await;
        if let Some(user) = state.user.take() {
            tracing::info!(username = %user.username, "session ended");
        }
        *state = SessionState::default();
    }

    pub async fn set_driver_id(&self, driver_id: i64) {
        self.inner.write().await.driver_id = Some(driver_id);
    }

    pub async fn set_center_id(&self, center_id: i64) {
        self.inner.write().await.center_id = Some(center_id);
    }

    /// Actor for the authorization predicate, `None` when logged out
    pub async fn actor(&self) -> Option<Actor> {
        let state = self.inner.read().await;
        let user = state.user.as_ref()?;
        let mut actor = Actor::from(user);
        actor.driver_id = state.driver_id;
        actor.center_id = state.center_id;
        Some(actor)
    }

    /// Resume from a stored token.
    ///
    /// An undecodable stored token is deleted; returns the restored user.
    pub async fn restore(&self, store: &TokenStore) -> ClientResult<Option<User>> {
        let Some(stored) = store.load()? else {
            return Ok(None);
        };
        match self.set_token(stored).await {
            Ok(user) => Ok(Some(user)),
            Err(e) => {
                tracing::warn!(path = %store.path().display(), error = %e, "discarding unreadable stored token");
                store.delete()?;
                Ok(None)
            }
        }
    }
}
