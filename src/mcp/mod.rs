//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes extraction to AI coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{ExtscanMcpServer, run_server};
