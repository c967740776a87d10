//! Utility functions and helpers for core analysis.
//!
//! ## Module Structure
//!
//! - `patterns`: Fixed module-name patterns for the Ext JS React packages

pub mod patterns;

pub use patterns::*;
