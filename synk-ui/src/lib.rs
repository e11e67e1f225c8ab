//! synk.ai Dashboard
//!
//! Client-side rendered Leptos application: sign-in and sign-up flows over
//! the external authentication service, the dashboard shell with its
//! sidebar, and a chart adapter around a canvas line chart.
//!
//! All authentication is delegated to the auth service (reached through
//! the host's `/api/auth` relay by default); this crate validates input
//! locally, keeps a read-only mirror of the session and renders.

pub mod app;
pub mod auth;
pub mod chart;
pub mod components;
pub mod config;
pub mod forms;
pub mod layouts;
pub mod nav;
pub mod pages;
pub mod state;

pub use app::App;
