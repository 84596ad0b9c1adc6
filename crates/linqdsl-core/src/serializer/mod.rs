//! Expression tree to LINQ text serialization.
//!
//! Nodes are dispatched by kind:
//!
//! 1. **Path**: property segments are cased per [`IdentifierCase`](crate::IdentifierCase)
//!    and rendered as a dotted chain; roots render as is.
//! 2. **Projection**: `new {alias = selector, selector, ...}`.
//! 3. **SubQuery**: always rejected.
//! 4. **Constant**: strings in double quotes (no escaping), numbers and
//!    booleans in canonical form, everything else through the default
//!    literal rule, which binds a named parameter.
//! 5. **Operation / Template**: the generic operator rule (template
//!    expansion with precedence-based parentheses); templates verbatim.

mod literal;
mod operation;
mod path;
mod projection;

use std::collections::{BTreeMap, HashMap};

use linqdsl_model::Expr;
use serde_json::Value;
use tracing::debug;

use crate::config::LinqConfig;
use crate::error::{SerializeError, SerializeResult};

pub use path::capitalize;

/// Output of a serialization call.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct RenderedQuery {
    /// The LINQ text.
    pub text: String,
    /// Values bound by the default literal rule, keyed by label (without `$`).
    pub params: BTreeMap<String, Value>,
}

/// Single-use LINQ serializer.
///
/// [`serialize`](Self::serialize) consumes the serializer, so each traversal
/// gets its own output buffer.
#[derive(Debug, Default)]
pub struct LinqSerializer {
    config: LinqConfig,
    out: String,
    params: BTreeMap<String, Value>,
    /// Bound value JSON text to label.
    labels: HashMap<String, String>,
}

impl LinqSerializer {
    /// Create a serializer with the given configuration.
    #[must_use]
    pub fn new(config: LinqConfig) -> Self {
        Self {
            config,
            out: String::with_capacity(128),
            params: BTreeMap::new(),
            labels: HashMap::new(),
        }
    }

    /// Serialize `expr` to LINQ.
    ///
    /// # Errors
    ///
    /// Returns `SerializeError::UnsupportedConstruct` if the tree contains a
    /// subquery, `SerializeError::MalformedProjection` for a projection entry
    /// that is not `[alias, selector]` or `[selector]`, and
    /// `SerializeError::OperatorArity` for an operation whose argument count
    /// does not match its operator.
    pub fn serialize(mut self, expr: &Expr) -> SerializeResult<RenderedQuery> {
        match self.handle(expr) {
            Ok(()) => {
                debug!(
                    text_len = self.out.len(),
                    params = self.params.len(),
                    "serialized expression to LINQ"
                );
                Ok(RenderedQuery {
                    text: self.out,
                    params: self.params,
                })
            }
            Err(e) => {
                debug!(error = %e, "LINQ serialization aborted");
                Err(e)
            }
        }
    }

    /// Dispatch a node to the rule for its kind.
    fn handle(&mut self, expr: &Expr) -> SerializeResult<()> {
        match expr {
            Expr::Path(path) => self.visit_path(path),
            Expr::Projection(projection) => self.visit_projection(projection),
            Expr::SubQuery(_) => Err(SerializeError::UnsupportedConstruct("subquery")),
            Expr::Constant(constant) => self.visit_constant(constant),
            Expr::Operation(operation) => self.visit_operation(operation),
            Expr::Template(template) => {
                self.out.push_str(&template.text);
                Ok(())
            }
        }
    }
}

/// Serialize `expr` with the default configuration and return the text.
///
/// Constants of kinds without a literal form come out as `$p1`-style
/// parameter references; use [`LinqSerializer`] to get their values.
///
/// # Errors
///
/// See [`LinqSerializer::serialize`].
pub fn to_linq(expr: &Expr) -> SerializeResult<String> {
    LinqSerializer::default()
        .serialize(expr)
        .map(|rendered| rendered.text)
}
