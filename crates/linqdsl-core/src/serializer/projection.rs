//! Anonymous-object projection rendering.

use linqdsl_model::{Constant, Expr, Projection};

use super::LinqSerializer;
use crate::error::{SerializeError, SerializeResult};

impl LinqSerializer {
    /// Render `new {alias = selector, selector, ...}` in entry order.
    ///
    /// Aliases are emitted verbatim; only selectors go through the casing
    /// and literal rules.
    pub(super) fn visit_projection(&mut self, projection: &Projection) -> SerializeResult<()> {
        self.out.push_str("new {");
        for (index, entry) in projection.entries.iter().enumerate() {
            if index > 0 {
                self.out.push_str(", ");
            }
            match entry.args.as_slice() {
                [Expr::Constant(Constant::String(alias)), selector] => {
                    self.out.push_str(alias);
                    self.out.push_str(" = ");
                    self.handle(selector)?;
                }
                [alias, _] => {
                    return Err(SerializeError::MalformedProjection {
                        index,
                        message: format!(
                            "alias must be a string constant, found {}",
                            kind_of(alias)
                        ),
                    });
                }
                [selector] => self.handle(selector)?,
                args => {
                    return Err(SerializeError::MalformedProjection {
                        index,
                        message: format!("expected 1 or 2 arguments, found {}", args.len()),
                    });
                }
            }
        }
        self.out.push('}');
        Ok(())
    }
}

fn kind_of(expr: &Expr) -> &'static str {
    match expr {
        Expr::Path(_) => "path",
        Expr::Operation(_) => "operation",
        Expr::Constant(c) => c.kind_name(),
        Expr::Projection(_) => "projection",
        Expr::SubQuery(_) => "subquery",
        Expr::Template(_) => "template",
    }
}
