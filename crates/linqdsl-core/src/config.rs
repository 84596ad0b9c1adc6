//! Serializer configuration.
//!
//! Configuration is driven by environment variables with sensible defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How property names are cased in LINQ output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IdentifierCase {
    /// Upper-case the first character only (`firstname` -> `Firstname`).
    #[default]
    Pascal,
    /// Emit names as declared.
    Preserve,
}

impl FromStr for IdentifierCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pascal") {
            Ok(Self::Pascal)
        } else if s.eq_ignore_ascii_case("preserve") {
            Ok(Self::Preserve)
        } else {
            Err(ConfigError::InvalidIdentifierCase(s.to_owned()))
        }
    }
}

impl fmt::Display for IdentifierCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pascal => f.write_str("pascal"),
            Self::Preserve => f.write_str("preserve"),
        }
    }
}

/// LINQ serializer configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinqConfig {
    /// Casing applied to property path segments.
    pub identifier_case: IdentifierCase,
    /// Prefix of labels for bound parameters (`p` gives `$p1`, `$p2`, ...).
    pub parameter_prefix: String,
}

impl Default for LinqConfig {
    fn default() -> Self {
        Self {
            identifier_case: IdentifierCase::default(),
            parameter_prefix: "p".to_owned(),
        }
    }
}

impl LinqConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `LINQ_IDENTIFIER_CASE` | `pascal` |
    /// | `LINQ_PARAMETER_PREFIX` | `p` |
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup("LINQ_IDENTIFIER_CASE") {
            config.identifier_case = v.parse()?;
        }
        if let Some(v) = lookup("LINQ_PARAMETER_PREFIX") {
            config.parameter_prefix = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that the parameter prefix yields valid identifiers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameterPrefix` otherwise.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.parameter_prefix.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
        if valid {
            Ok(())
        } else {
            Err(ConfigError::InvalidParameterPrefix(
                self.parameter_prefix.clone(),
            ))
        }
    }
}
