//! Toolhub - headless controller for the hacker tools directory
//!
//! Loads the signed-in user's profile, browses and searches the tool catalog
//! by platform, category and subcategory, renders it into a page model and
//! keeps follow state in sync with the server.

pub mod api;
pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod ui;

pub use api::{ApiError, HttpToolsApi, ToolsApi};
pub use controller::{FollowOutcome, SessionState, ToolsClient};
pub use error::{Result, ToolhubError};
