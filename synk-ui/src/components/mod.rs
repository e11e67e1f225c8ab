//! UI Components
//!
//! Reusable Leptos components for the dashboard and auth views.

pub mod alert;
pub mod icons;
pub mod loading;
pub mod sidebar;
pub mod toast;
pub mod user_button;

pub use alert::ErrorAlert;
pub use icons::{Icon, IconView};
pub use loading::{InlineLoading, LoadingPlaceholder};
pub use sidebar::Sidebar;
pub use toast::Toast;
pub use user_button::DashboardUserButton;
