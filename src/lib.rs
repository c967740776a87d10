//! Extscan - static extraction of Ext JS component usages from React modules
//!
//! Extscan reads JavaScript/JSX modules, finds every place an Ext JS component
//! is instantiated (through `reactify`, `React.createElement` or JSX) and
//! emits matching `Ext.create(...)` statements so a Sencha Cmd build can
//! include exactly the classes the application uses.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine and project scanning
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
