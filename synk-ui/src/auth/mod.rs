//! Session provider adapter over the external authentication service.

pub mod client;
pub mod error;
pub mod handle;
#[cfg(test)]
pub(crate) mod mock;
pub mod session;

pub use client::{AuthClient, HttpAuthClient, SocialProvider};
pub use error::AuthError;
pub use handle::{use_sign_out, SessionHandle};
pub use session::{Session, SessionState, SessionStore, SubscriptionId, User};
