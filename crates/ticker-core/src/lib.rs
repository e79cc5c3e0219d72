//! Core abstractions for the ticker MCP server
//!
//! This crate defines the error type shared across the workspace and the
//! tool framework: the [`Tool`] trait that every callable operation
//! implements, and the [`ToolRegistry`] the server dispatches through.

pub mod error;
pub mod registry;
pub mod tool;

pub use error::{Error, Result};
pub use registry::ToolRegistry;
pub use tool::Tool;
