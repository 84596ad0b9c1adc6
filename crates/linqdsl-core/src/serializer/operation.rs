//! Generic operator rendering.
//!
//! Each operator carries a template such as `{0} == {1}` or
//! `{0}.StartsWith({1})`. Arguments are substituted in placeholder order and
//! wrapped in parentheses when they would otherwise bind to the wrong
//! operator.

use linqdsl_model::{Expr, Operation, Operator, Precedence};

use super::LinqSerializer;
use crate::error::{SerializeError, SerializeResult};

impl LinqSerializer {
    /// Render an operation by expanding its operator template.
    pub(super) fn visit_operation(&mut self, operation: &Operation) -> SerializeResult<()> {
        let operator = operation.operator;
        let arity_error = || SerializeError::OperatorArity {
            operator,
            expected: operator.arity(),
            found: operation.args.len(),
        };
        if operation.args.len() != operator.arity() {
            return Err(arity_error());
        }

        let mut pieces = operator.template().split('{');
        if let Some(head) = pieces.next() {
            self.out.push_str(head);
        }
        for piece in pieces {
            let Some((position, text)) = piece
                .split_once('}')
                .and_then(|(n, text)| Some((n.parse::<usize>().ok()?, text)))
            else {
                self.out.push('{');
                self.out.push_str(piece);
                continue;
            };
            let arg = operation.args.get(position).ok_or_else(arity_error)?;
            self.visit_argument(operator, position, arg)?;
            self.out.push_str(text);
        }
        Ok(())
    }

    fn visit_argument(
        &mut self,
        outer: Operator,
        position: usize,
        arg: &Expr,
    ) -> SerializeResult<()> {
        let start = self.out.len();
        self.handle(arg)?;

        let wrap = match arg {
            Expr::Operation(inner) => needs_parens(outer, inner.operator, position),
            _ => false,
        };
        // `--x` lexes as a decrement and `-1.Length` applies the minus last.
        let leading_minus =
            guards_leading_minus(outer, position) && self.out[start..].starts_with('-');
        if wrap || leading_minus {
            self.out.insert(start, '(');
            self.out.push(')');
        }
        Ok(())
    }
}

/// Whether an argument rendered with a leading `-` must be parenthesized.
fn guards_leading_minus(outer: Operator, position: usize) -> bool {
    outer == Operator::Negate || (outer.precedence() == Precedence::Primary && position == 0)
}

/// Whether `inner` at argument `position` of `outer` must be parenthesized.
fn needs_parens(outer: Operator, inner: Operator, position: usize) -> bool {
    // Method-call arguments are already delimited.
    if outer.precedence() == Precedence::Primary && position > 0 {
        return false;
    }
    match inner.precedence().cmp(&outer.precedence()) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => {
            position > 0 && !(outer == inner && outer.is_associative())
        }
    }
}
