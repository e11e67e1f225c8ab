//! Session Store
//!
//! The one place the current session lives. Views observe it through
//! [`SessionStore::subscribe`] (or the reactive
//! [`SessionHandle`](super::handle::SessionHandle)) and never mutate it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

use super::client::{AuthClient, SignInRequest, SignUpRequest, SocialProvider, SocialSignInRequest};
use super::error::AuthError;
use crate::config::CALLBACK_URL;

/// Signed-in user as the auth service reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: User,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// `Pending` and `Anonymous` both mean the session is absent
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Pending,
    Authenticated(Session),
    Anonymous,
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated(session) => Some(&session.user),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Pending)
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, SessionState::Anonymous)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&SessionState)>;

struct Inner {
    state: SessionState,
    next_id: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
}

/// Shared handle to the session state and the client that feeds it
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<RefCell<Inner>>,
    client: Rc<dyn AuthClient>,
}

impl SessionStore {
    pub fn new(client: Rc<dyn AuthClient>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                state: SessionState::Pending,
                next_id: 0,
                listeners: Vec::new(),
            })),
            client,
        }
    }

    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().state.clone()
    }

    /// Register `listener`; it is called right away with the current state
    /// and again after every change.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> SubscriptionId {
        let listener: Listener = Rc::new(listener);
        let (id, current) = {
            let mut inner = self.inner.borrow_mut();
            let id = SubscriptionId(inner.next_id);
            inner.next_id += 1;
            inner.listeners.push((id, listener.clone()));
            (id, inner.state.clone())
        };
        listener(&current);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
    }

    fn set_state(&self, state: SessionState) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.state == state {
                return;
            }
            inner.state = state.clone();
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            listener(&state);
        }
    }

    /// Re-read the session from the auth service.
    ///
    /// A failure while the state is still `Pending` resolves it to
    /// `Anonymous`; otherwise the current state is kept.
    pub async fn refresh(&self) -> Result<SessionState, AuthError> {
        match self.client.get_session().await {
            Ok(Some(session)) => {
                log::debug!("Session found for user {}", session.user.id);
                self.set_state(SessionState::Authenticated(session));
            }
            Ok(None) => {
                log::debug!("No active session");
                self.set_state(SessionState::Anonymous);
            }
            Err(e) => {
                log::warn!("Session lookup failed: {}", e);
                if self.snapshot().is_pending() {
                    self.set_state(SessionState::Anonymous);
                }
                return Err(e);
            }
        }
        Ok(self.snapshot())
    }

    pub async fn sign_up_email(&self, email: &str, name: &str, password: &str) -> Result<User, AuthError> {
        log::info!("Signing up {}", email);
        let request = SignUpRequest {
            email: email.to_string(),
            name: name.to_string(),
            password: password.to_string(),
        };
        let user = self.client.sign_up_email(&request).await.map_err(|e| {
            log::warn!("Sign-up rejected: {}", e);
            e
        })?;
        self.refresh().await?;
        Ok(user)
    }

    pub async fn sign_in_email(&self, email: &str, password: &str) -> Result<User, AuthError> {
        log::info!("Signing in {}", email);
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
            callback_url: CALLBACK_URL.to_string(),
        };
        let user = self.client.sign_in_email(&request).await.map_err(|e| {
            log::warn!("Sign-in rejected: {}", e);
            e
        })?;
        self.refresh().await?;
        Ok(user)
    }

    /// Start a provider sign-in; the caller sends the browser to the
    /// returned URL.
    pub async fn sign_in_social(&self, provider: SocialProvider) -> Result<String, AuthError> {
        log::info!("Starting {} sign-in", provider.id());
        let request = SocialSignInRequest {
            provider,
            callback_url: CALLBACK_URL.to_string(),
        };
        let redirect = self.client.sign_in_social(&request).await?;
        Ok(redirect.url)
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.client.sign_out().await?;
        log::info!("Signed out");
        self.set_state(SessionState::Anonymous);
        Ok(())
    }

    /// Drop the session once `expires_at` has passed. Returns whether it did.
    pub fn expire_if_due(&self, now: DateTime<Utc>) -> bool {
        let expired = match &self.inner.borrow().state {
            SessionState::Authenticated(session) => session.is_expired(now),
            _ => false,
        };
        if expired {
            log::info!("Session expired");
            self.set_state(SessionState::Anonymous);
        }
        expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::mock::{sample_session, MockAuthClient};
    use chrono::Duration;
    use futures::executor::block_on;

    fn store_with(mock: &Rc<MockAuthClient>) -> SessionStore {
        SessionStore::new(mock.clone())
    }

    #[test]
    fn test_starts_pending() {
        let mock = Rc::new(MockAuthClient::default());
        let store = store_with(&mock);
        assert!(store.snapshot().is_pending());
    }

    #[test]
    fn test_subscribe_delivers_current_then_changes() {
        let mock = Rc::new(MockAuthClient::default());
        mock.set_session(Some(sample_session("Ada")));
        let store = store_with(&mock);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = store.subscribe(move |s| sink.borrow_mut().push(s.clone()));

        block_on(store.refresh()).unwrap();
        store.unsubscribe(id);
        block_on(store.sign_out()).unwrap();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].is_pending());
        assert_eq!(seen[1].user().map(|u| u.name.as_str()), Some("Ada"));
    }

    #[test]
    fn test_refresh_without_session_is_anonymous() {
        let mock = Rc::new(MockAuthClient::default());
        let store = store_with(&mock);
        let state = block_on(store.refresh()).unwrap();
        assert!(state.is_anonymous());
    }

    #[test]
    fn test_refresh_failure_resolves_pending() {
        let mock = Rc::new(MockAuthClient::default());
        mock.fail_session_with(AuthError::Network("offline".into()));
        let store = store_with(&mock);
        assert!(block_on(store.refresh()).is_err());
        assert!(store.snapshot().is_anonymous());
    }

    #[test]
    fn test_sign_in_refreshes_session() {
        let mock = Rc::new(MockAuthClient::default());
        mock.set_session(Some(sample_session("Ada")));
        let store = store_with(&mock);

        let user = block_on(store.sign_in_email("ada@example.com", "secret")).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(mock.sign_in_calls(), 1);
        assert_eq!(mock.last_callback_url().as_deref(), Some("/"));
        assert!(store.snapshot().user().is_some());
    }

    #[test]
    fn test_sign_in_rejection_keeps_state() {
        let mock = Rc::new(MockAuthClient::default());
        mock.reject_sign_in("Invalid credentials");
        let store = store_with(&mock);

        let err = block_on(store.sign_in_email("ada@example.com", "wrong")).unwrap_err();
        assert_eq!(err.message(), "Invalid credentials");
        assert!(store.snapshot().is_pending());
    }

    #[test]
    fn test_sign_out_becomes_anonymous() {
        let mock = Rc::new(MockAuthClient::default());
        mock.set_session(Some(sample_session("Ada")));
        let store = store_with(&mock);
        block_on(store.refresh()).unwrap();

        block_on(store.sign_out()).unwrap();
        assert!(store.snapshot().is_anonymous());
    }

    #[test]
    fn test_social_sign_in_returns_redirect() {
        let mock = Rc::new(MockAuthClient::default());
        let store = store_with(&mock);
        let url = block_on(store.sign_in_social(SocialProvider::Google)).unwrap();
        assert_eq!(url, "https://accounts.example.com/google");
    }

    #[test]
    fn test_expire_if_due() {
        let mock = Rc::new(MockAuthClient::default());
        let session = sample_session("Ada");
        let expires_at = session.expires_at;
        mock.set_session(Some(session));
        let store = store_with(&mock);
        block_on(store.refresh()).unwrap();

        assert!(!store.expire_if_due(expires_at - Duration::seconds(1)));
        assert!(store.snapshot().user().is_some());

        assert!(store.expire_if_due(expires_at));
        assert!(store.snapshot().is_anonymous());
    }
}
