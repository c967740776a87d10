//! Symbol tables built while scanning a module.
//!
//! ## Module Structure
//!
//! - `aliases`: Local names of the factory function and of required component packages
//! - `registry`: Local identifiers mapped to component type descriptors
//! - `helpers`: Pure functions for AST node extraction
//!
//! All tables live for a single extraction call and are updated in traversal
//! order, so a binding is only visible to uses that come after it in the source.

pub mod aliases;
pub mod helpers;
pub mod registry;

pub use aliases::{FactoryAliases, PackageBindings};
pub use registry::{TypeDescriptor, TypeRegistry};
