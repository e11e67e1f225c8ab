//! Scripted [`AuthClient`] for native tests

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::cell::{Cell, RefCell};

use super::client::{AuthClient, SignInRequest, SignUpRequest, SocialRedirect, SocialSignInRequest};
use super::error::AuthError;
use super::session::{Session, User};

pub fn sample_session(name: &str) -> Session {
    Session {
        user: User {
            id: "user-1".to_string(),
            name: name.to_string(),
            email: "ada@example.com".to_string(),
            image: None,
            email_verified: false,
        },
        expires_at: Utc::now() + Duration::days(7),
    }
}

#[derive(Default)]
pub struct MockAuthClient {
    session: RefCell<Option<Session>>,
    session_error: RefCell<Option<AuthError>>,
    sign_in_error: RefCell<Option<AuthError>>,
    sign_up_error: RefCell<Option<AuthError>>,
    sign_in_calls: Cell<usize>,
    sign_up_calls: Cell<usize>,
    social_calls: Cell<usize>,
    last_callback_url: RefCell<Option<String>>,
}

impl MockAuthClient {
    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    pub fn fail_session_with(&self, error: AuthError) {
        *self.session_error.borrow_mut() = Some(error);
    }

    pub fn reject_sign_in(&self, message: &str) {
        *self.sign_in_error.borrow_mut() = Some(AuthError::Rejected {
            status: 401,
            message: message.to_string(),
        });
    }

    pub fn reject_sign_up(&self, message: &str) {
        *self.sign_up_error.borrow_mut() = Some(AuthError::Rejected {
            status: 422,
            message: message.to_string(),
        });
    }

    pub fn sign_in_calls(&self) -> usize {
        self.sign_in_calls.get()
    }

    pub fn sign_up_calls(&self) -> usize {
        self.sign_up_calls.get()
    }

    pub fn social_calls(&self) -> usize {
        self.social_calls.get()
    }

    pub fn last_callback_url(&self) -> Option<String> {
        self.last_callback_url.borrow().clone()
    }

    fn user_for(&self, name: &str, email: &str) -> User {
        self.session
            .borrow()
            .as_ref()
            .map(|s| s.user.clone())
            .unwrap_or_else(|| User {
                id: "user-1".to_string(),
                name: name.to_string(),
                email: email.to_string(),
                image: None,
                email_verified: false,
            })
    }
}

#[async_trait(?Send)]
impl AuthClient for MockAuthClient {
    async fn sign_up_email(&self, request: &SignUpRequest) -> Result<User, AuthError> {
        self.sign_up_calls.set(self.sign_up_calls.get() + 1);
        if let Some(err) = self.sign_up_error.borrow().clone() {
            return Err(err);
        }
        let user = self.user_for(&request.name, &request.email);
        if self.session.borrow().is_none() {
            *self.session.borrow_mut() = Some(Session {
                user: user.clone(),
                expires_at: Utc::now() + Duration::days(7),
            });
        }
        Ok(user)
    }

    async fn sign_in_email(&self, request: &SignInRequest) -> Result<User, AuthError> {
        self.sign_in_calls.set(self.sign_in_calls.get() + 1);
        *self.last_callback_url.borrow_mut() = Some(request.callback_url.clone());
        if let Some(err) = self.sign_in_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.user_for("Ada", &request.email))
    }

    async fn sign_in_social(&self, request: &SocialSignInRequest) -> Result<SocialRedirect, AuthError> {
        self.social_calls.set(self.social_calls.get() + 1);
        *self.last_callback_url.borrow_mut() = Some(request.callback_url.clone());
        Ok(SocialRedirect {
            url: format!("https://accounts.example.com/{}", request.provider.id()),
            redirect: true,
        })
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.session.borrow_mut() = None;
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        if let Some(err) = self.session_error.borrow().clone() {
            return Err(err);
        }
        Ok(self.session.borrow().clone())
    }
}
