//! News search via the Tavily API
//!
//! One configurable client behind the `get_articles` tool: a fixed-shape
//! search payload, a single authenticated POST with a 30 second timeout,
//! and structured classification of transport vs. protocol failures. The
//! tool collapses both failure classes to a JSON `null` payload; only the
//! log carries the detail.

pub mod client;
pub mod config;
pub mod error;
pub mod tool;

pub use client::{NewsClient, SearchRequest};
pub use config::NewsConfig;
pub use error::NewsError;
pub use tool::GetArticlesTool;
