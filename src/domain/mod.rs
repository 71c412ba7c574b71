//! Domain types for the tools directory
//!
//! This module provides:
//! - `UserProfile`: the session user and their followed tools
//! - `Tool` and the auxiliary payloads (featured tools, health, username check)
//! - `Catalog` / `PlatformTree`: the nested shapes of the `/tools` endpoint
//! - `Ordered`: order-preserving map used to decode those shapes

pub mod catalog;
pub mod ordered;
pub mod profile;
pub mod tool;

pub use catalog::{Catalog, CatalogEntry, PlatformTree};
pub use ordered::Ordered;
pub use profile::UserProfile;
pub use tool::{Difficulty, FeaturedTool, HealthStatus, Tool, UsernameAvailability};
