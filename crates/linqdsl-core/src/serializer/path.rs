//! Path rendering.

use std::borrow::Cow;

use linqdsl_model::Path;

use super::LinqSerializer;
use crate::config::IdentifierCase;
use crate::error::SerializeResult;

/// Upper-case the first character of `name`, leaving the rest unchanged.
#[must_use]
pub fn capitalize(name: &str) -> Cow<'_, str> {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut cased: String = first.to_uppercase().collect();
            cased.push_str(chars.as_str());
            Cow::Owned(cased)
        }
        _ => Cow::Borrowed(name),
    }
}

impl IdentifierCase {
    fn apply(self, name: &str) -> Cow<'_, str> {
        match self {
            Self::Pascal => capitalize(name),
            Self::Preserve => Cow::Borrowed(name),
        }
    }
}

impl LinqSerializer {
    /// Render a path as a dotted chain, casing every property segment.
    pub(super) fn visit_path(&mut self, path: &Path) -> SerializeResult<()> {
        match path {
            Path::Root { name } => self.out.push_str(name),
            Path::Property { parent, name } => {
                self.visit_path(parent)?;
                self.out.push('.');
                self.out.push_str(&self.config.identifier_case.apply(name));
            }
        }
        Ok(())
    }
}
