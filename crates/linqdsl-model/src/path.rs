//! Path references: a root alias followed by a chain of property accesses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Whether a path names a root alias or a property off a parent path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKind {
    /// Top-most path in a chain; identifies a source entity alias.
    Root,
    /// Member access off a parent path.
    Property,
}

/// A property or root reference.
///
/// A `Property` always owns its parent and a `Root` never has one, so the
/// parent chain of any path ends in exactly one root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Path {
    /// A root alias such as `person`.
    Root {
        /// Alias name.
        name: String,
    },
    /// A property such as `person.firstname`.
    Property {
        /// The path this property is read from.
        parent: Box<Path>,
        /// Property name as declared by the builder (not case-transformed).
        name: String,
    },
}

impl Path {
    /// Create a root path.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self::Root { name: name.into() }
    }

    /// Create a property path off `parent`.
    #[must_use]
    pub fn property(parent: Self, name: impl Into<String>) -> Self {
        Self::Property {
            parent: Box::new(parent),
            name: name.into(),
        }
    }

    /// Create a property path off this path.
    #[must_use]
    pub fn get(&self, name: impl Into<String>) -> Self {
        Self::property(self.clone(), name)
    }

    /// The kind of this path segment.
    #[must_use]
    pub fn kind(&self) -> PathKind {
        match self {
            Self::Root { .. } => PathKind::Root,
            Self::Property { .. } => PathKind::Property,
        }
    }

    /// The name of this segment.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Root { name } | Self::Property { name, .. } => name,
        }
    }

    /// The parent path, `None` for a root.
    #[must_use]
    pub fn parent(&self) -> Option<&Path> {
        match self {
            Self::Root { .. } => None,
            Self::Property { parent, .. } => Some(parent),
        }
    }

    /// Walk the parent chain and return the root alias name.
    #[must_use]
    pub fn root_name(&self) -> &str {
        let mut current = self;
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current.name()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root { name } => write!(f, "{name}"),
            Self::Property { parent, name } => write!(f, "{parent}.{name}"),
        }
    }
}
