//! Anonymous-object projections (`new { alias = selector, ... }`).

use serde::{Deserialize, Serialize};

use crate::{Constant, Expr};

/// One output column of a projection.
///
/// A well-formed entry holds either `[alias, selector]`, where the alias is a
/// string constant, or `[selector]`. Other shapes are kept as built and
/// rejected when the projection is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionEntry {
    /// Entry arguments in order.
    pub args: Vec<Expr>,
}

impl ProjectionEntry {
    /// An entry rendered as `alias = selector`.
    #[must_use]
    pub fn aliased(alias: impl Into<String>, selector: impl Into<Expr>) -> Self {
        Self {
            args: vec![
                Expr::Constant(Constant::String(alias.into())),
                selector.into(),
            ],
        }
    }

    /// An entry rendered as the bare selector.
    #[must_use]
    pub fn positional(selector: impl Into<Expr>) -> Self {
        Self {
            args: vec![selector.into()],
        }
    }
}

/// Ordered list of projection entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Entries in output order.
    pub entries: Vec<ProjectionEntry>,
}

impl Projection {
    /// An empty projection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an `alias = selector` entry.
    #[must_use]
    pub fn with(mut self, alias: impl Into<String>, selector: impl Into<Expr>) -> Self {
        self.entries.push(ProjectionEntry::aliased(alias, selector));
        self
    }

    /// Append a bare selector entry.
    #[must_use]
    pub fn with_positional(mut self, selector: impl Into<Expr>) -> Self {
        self.entries.push(ProjectionEntry::positional(selector));
        self
    }

    /// Append an entry as built, without checking its shape.
    #[must_use]
    pub fn with_entry(mut self, entry: ProjectionEntry) -> Self {
        self.entries.push(entry);
        self
    }
}
