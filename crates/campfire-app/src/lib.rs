//! # campfire-app
//!
//! Application layer of the Campfire dashboard: configuration, shared
//! workspace state, user-facing commands and transient notifications.
//!
//! The presentation layer is a pure consumer: it renders the view models
//! produced here and holds no business logic of its own.

pub mod commands;
pub mod config;
pub mod notify;
pub mod state;

pub use config::AppConfig;
pub use notify::{Notice, NoticeLevel, Notifier};
pub use state::{DashboardState, Workspace};
