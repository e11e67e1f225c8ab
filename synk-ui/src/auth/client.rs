//! Auth Service Client
//!
//! The [`AuthClient`] seam plus its HTTP implementation over the auth
//! service's REST routes (`/sign-up/email`, `/sign-in/email`,
//! `/sign-in/social`, `/sign-out`, `/get-session`).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use web_sys::RequestCredentials;

use super::error::{rejection_message, AuthError};
use super::session::{Session, User};
use crate::config;

/// OAuth providers offered on the auth views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Github,
}

impl SocialProvider {
    pub const ALL: [SocialProvider; 2] = [SocialProvider::Google, SocialProvider::Github];

    pub fn id(self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Github => "github",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Github => "Github",
        }
    }
}

// ============ Requests ============

#[derive(Debug, Clone, Serialize)]
pub struct SignUpRequest {
    pub email: String,
    pub name: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SocialSignInRequest {
    pub provider: SocialProvider,
    #[serde(rename = "callbackURL")]
    pub callback_url: String,
}

// ============ Responses ============

/// Where the browser must go to continue a provider sign-in
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SocialRedirect {
    pub url: String,
    #[serde(default)]
    pub redirect: bool,
}

#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: User,
}

#[derive(Debug, Deserialize)]
struct SignOutResponse {
    #[serde(default)]
    success: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    expires_at: DateTime<Utc>,
}

/// `GET /get-session` body when a session exists
#[derive(Debug, Deserialize)]
pub(crate) struct SessionEnvelope {
    session: SessionRecord,
    user: User,
}

impl From<SessionEnvelope> for Session {
    fn from(envelope: SessionEnvelope) -> Self {
        Session {
            user: envelope.user,
            expires_at: envelope.session.expires_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Operations the dashboard consumes from the authentication service
#[async_trait(?Send)]
pub trait AuthClient {
    async fn sign_up_email(&self, request: &SignUpRequest) -> Result<User, AuthError>;

    async fn sign_in_email(&self, request: &SignInRequest) -> Result<User, AuthError>;

    async fn sign_in_social(&self, request: &SocialSignInRequest) -> Result<SocialRedirect, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    /// `None` when no session cookie is valid
    async fn get_session(&self) -> Result<Option<Session>, AuthError>;
}

/// [`AuthClient`] speaking HTTP to the auth routes, cookies included
#[derive(Debug, Clone)]
pub struct HttpAuthClient {
    base_url: String,
}

impl HttpAuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: config::normalize_base(&base_url.into()),
        }
    }

    /// Client for the configured auth base URL
    pub fn from_config() -> Self {
        Self::new(config::auth_base_url())
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AuthError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.url(path))
            .credentials(RequestCredentials::Include)
            .json(body)
            .map_err(|e| AuthError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    if !response.ok() {
        let status = response.status();
        let status_text = response.status_text();
        let body = response.json::<ErrorBody>().await.ok().and_then(|b| b.message);
        return Err(AuthError::Rejected {
            status,
            message: rejection_message(body, &status_text),
        });
    }

    response
        .json()
        .await
        .map_err(|e| AuthError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl AuthClient for HttpAuthClient {
    async fn sign_up_email(&self, request: &SignUpRequest) -> Result<User, AuthError> {
        let envelope: UserEnvelope = self.post_json("sign-up/email", request).await?;
        Ok(envelope.user)
    }

    async fn sign_in_email(&self, request: &SignInRequest) -> Result<User, AuthError> {
        let envelope: UserEnvelope = self.post_json("sign-in/email", request).await?;
        Ok(envelope.user)
    }

    async fn sign_in_social(&self, request: &SocialSignInRequest) -> Result<SocialRedirect, AuthError> {
        self.post_json("sign-in/social", request).await
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        let response: SignOutResponse = self.post_json("sign-out", &serde_json::json!({})).await?;
        if !response.success {
            log::warn!("Sign-out answered without success flag");
        }
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        let response = Request::get(&self.url("get-session"))
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;

        let envelope: Option<SessionEnvelope> = decode(response).await?;
        Ok(envelope.map(Session::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_request_uses_callback_url_key() {
        let request = SignInRequest {
            email: "ada@example.com".into(),
            password: "secret".into(),
            callback_url: "/".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["callbackURL"], "/");
        assert!(json.get("callback_url").is_none());
    }

    #[test]
    fn test_social_provider_serializes_lowercase() {
        let request = SocialSignInRequest {
            provider: SocialProvider::Github,
            callback_url: "/".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["provider"], "github");
    }

    #[test]
    fn test_session_envelope_decodes() {
        let body = r#"{
            "session": {"id": "s1", "userId": "u1", "expiresAt": "2030-01-01T00:00:00.000Z", "token": "t"},
            "user": {"id": "u1", "name": "Ada", "email": "ada@example.com", "emailVerified": false, "image": null}
        }"#;
        let envelope: Option<SessionEnvelope> = serde_json::from_str(body).unwrap();
        let session = Session::from(envelope.unwrap());
        assert_eq!(session.user.name, "Ada");
        assert_eq!(session.expires_at.to_rfc3339(), "2030-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_absent_session_decodes_to_none() {
        let envelope: Option<SessionEnvelope> = serde_json::from_str("null").unwrap();
        assert!(envelope.is_none());
    }

    #[test]
    fn test_social_redirect_decodes() {
        let redirect: SocialRedirect =
            serde_json::from_str(r#"{"url":"https://accounts.google.com/o/oauth2","redirect":true}"#).unwrap();
        assert!(redirect.redirect);
        assert!(redirect.url.starts_with("https://accounts.google.com"));
    }
}
