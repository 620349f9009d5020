//! MCP server exposing the App Store Connect API as tools.
//!
//! Each tool is an [`tools::Endpoint`] descriptor evaluated by one generic
//! handler against an [`asc_sdk::ApiExecutor`]. [`server::McpServer`] speaks
//! newline-delimited JSON-RPC over stdio.

pub mod config;
pub mod protocol;
pub mod server;
pub mod tools;

pub use config::{Args, ServerConfig};
pub use server::McpServer;
pub use tools::build_registry;
