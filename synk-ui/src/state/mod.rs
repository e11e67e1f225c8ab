//! Application state shared through context.

pub mod notify;

pub use notify::{provide_notifications, Notifications};
