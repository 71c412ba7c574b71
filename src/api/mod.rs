//! API Client Layer - tools directory REST API
//!
//! This module provides:
//! - ToolsApi trait for API abstraction
//! - HttpToolsApi implementation over reqwest
//! - MockToolsApi for tests and offline runs

pub mod client;
pub mod http;
pub mod mock;

pub use client::{ApiError, FollowAction, ToolsApi};
pub use http::HttpToolsApi;
pub use mock::{ApiCall, MockToolsApi};
