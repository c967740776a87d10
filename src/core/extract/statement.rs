//! Synthesis of creation statements.
//!
//! A statement is a synthetic `Ext.create({...})` call that a dependency
//! resolver pattern-matches on; it is never executed. The config object is
//! built as an ordered list of entries and printed by a single serializer.

use std::fmt;

use serde_json::Value;

use crate::core::collect::{TypeDescriptor, TypeRegistry};

/// Callee of every synthesized statement.
pub const CREATE_CALLEE: &str = "Ext.create";

/// One property of a synthesized object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectEntry {
    /// A string-valued pair; both sides are printed as JSON strings.
    Pair { key: String, value: String },
    /// A property copied from source, e.g. `flex: 1` or `...rest`.
    Verbatim(String),
}

impl fmt::Display for ObjectEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectEntry::Pair { key, value } => write!(
                f,
                "{}: {}",
                Value::String(key.clone()),
                Value::String(value.clone())
            ),
            ObjectEntry::Verbatim(text) => f.write_str(text),
        }
    }
}

/// Ordered object literal.
///
/// With only `Pair` entries the printed form is valid JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectLiteral {
    entries: Vec<ObjectEntry>,
}

impl ObjectLiteral {
    /// Literal holding the descriptor's marker pair.
    pub fn from_descriptor(descriptor: &TypeDescriptor) -> Self {
        Self {
            entries: vec![ObjectEntry::Pair {
                key: descriptor.key().to_string(),
                value: descriptor.value().to_string(),
            }],
        }
    }

    pub fn push(&mut self, entry: ObjectEntry) {
        self.entries.push(entry);
    }
}

impl fmt::Display for ObjectLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", entry)?;
        }
        f.write_str("}")
    }
}

/// Build one statement: the descriptor marker first, then the original props.
pub fn synthesize(descriptor: &TypeDescriptor, props: Vec<String>) -> String {
    let mut config = ObjectLiteral::from_descriptor(descriptor);
    for prop in props {
        config.push(ObjectEntry::Verbatim(prop));
    }
    format!("{}({})", CREATE_CALLEE, config)
}

/// One props-free statement per registry entry, in registry order.
///
/// Registered types are build dependencies even when no element uses them.
pub fn finalize(registry: &TypeRegistry) -> impl Iterator<Item = String> + '_ {
    registry
        .iter()
        .map(|(_, descriptor)| synthesize(descriptor, Vec::new()))
}
