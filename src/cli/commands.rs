//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - profile/catalog/platform/subcategory/search: render a page fragment
//! - follow: toggle follow state for a tool
//! - featured/health/check-username: auxiliary endpoints

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Toolhub - browse, search and follow tools in the hacker tools directory
#[derive(Parser, Debug)]
#[command(name = "toolhub")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the server base URL (e.g. http://localhost:5000)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the signed-in user's profile
    Profile,

    /// Render the full tool catalog
    Catalog,

    /// Show the category tree of a platform
    Platform {
        /// Platform name (e.g. Linux)
        name: String,
    },

    /// Render the tools in one subcategory
    Subcategory {
        platform: String,
        category: String,
        subcategory: String,
    },

    /// Search tools by name or description
    Search {
        /// Search text (at least two characters after trimming)
        query: String,
    },

    /// Follow a tool, or unfollow it if already followed
    Follow {
        /// Tool name
        tool: String,
    },

    /// Show random featured tools
    Featured,

    /// Check server health
    Health,

    /// Check whether a username is available
    CheckUsername {
        username: String,
    },
}
