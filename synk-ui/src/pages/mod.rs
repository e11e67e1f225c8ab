//! Page Components
//!
//! Top-level views mounted by the router.

mod auth_card;
pub mod home;
pub mod landing;
pub mod sections;
pub mod sign_in;
pub mod sign_up;

pub use home::HomeView;
pub use landing::LandingView;
pub use sections::{AgentsView, MeetingsView, UpgradeView};
pub use sign_in::SignInView;
pub use sign_up::SignUpView;
