//! Identifier Module
//!
//! Composite identifiers carried by the external term format: process ids,
//! ports, references and exported function captures. All of them name their
//! owning node (or module) with an [`Atom`].

use crate::atom::Atom;
use std::fmt;

/// Process identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pid {
    /// Node name
    pub node: Atom,
    /// Process number
    pub id: u32,
    /// Serial number
    pub serial: u32,
    /// Creation epoch of the node
    pub creation: u8,
}

impl Pid {
    pub fn new(node: impl Into<Atom>, id: u32, serial: u32, creation: u8) -> Self {
        Self {
            node: node.into(),
            id,
            serial,
            creation,
        }
    }
}

/// Port identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Port {
    /// Node name
    pub node: Atom,
    /// Port number
    pub id: u32,
    /// Creation epoch of the node
    pub creation: u8,
}

impl Port {
    pub fn new(node: impl Into<Atom>, id: u32, creation: u8) -> Self {
        Self {
            node: node.into(),
            id,
            creation,
        }
    }
}

/// Reference
///
/// Both the legacy single-word and the modern multi-word wire shapes decode
/// into this type. The encoder always writes the multi-word shape, which
/// carries at most 65535 id words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    /// Node name
    pub node: Atom,
    /// Id words, most significant first as they appear on the wire
    pub id: Vec<u32>,
    /// Creation epoch of the node
    pub creation: u8,
}

impl Reference {
    /// Create a reference
    ///
    /// Returns `None` when `id` is empty; a reference always has at least one
    /// id word.
    pub fn new(node: impl Into<Atom>, id: Vec<u32>, creation: u8) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        Some(Self {
            node: node.into(),
            id,
            creation,
        })
    }
}

/// Exported function capture (`fun module:function/arity`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Export {
    /// Module name
    pub module: Atom,
    /// Function name
    pub function: Atom,
    /// Function arity
    pub arity: u8,
}

impl Export {
    pub fn new(module: impl Into<Atom>, function: impl Into<Atom>, arity: u8) -> Self {
        Self {
            module: module.into(),
            function: function.into(),
            arity,
        }
    }
}

impl fmt::Display for Pid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}.{}.{}.{}>", self.node, self.id, self.serial, self.creation)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#Port<{}.{}.{}>", self.node, self.id, self.creation)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#Ref<{}", self.node)?;
        for word in &self.id {
            write!(f, ".{}", word)?;
        }
        write!(f, ".{}>", self.creation)
    }
}

impl fmt::Display for Export {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun {}:{}/{}", self.module, self.function, self.arity)
    }
}
