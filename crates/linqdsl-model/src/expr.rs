//! The expression tree.

use serde::{Deserialize, Serialize};

use crate::{Constant, Operator, Path, Projection};

/// A node of a query expression tree.
///
/// Trees are built upstream, finite and acyclic, and only read here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node", rename_all = "camelCase")]
pub enum Expr {
    /// A root or property reference.
    Path(Path),
    /// An operator applied to arguments.
    Operation(Operation),
    /// A literal value.
    Constant(Constant),
    /// An anonymous-object projection.
    Projection(Projection),
    /// A nested query.
    SubQuery(SubQuery),
    /// Pre-rendered text, never decomposed.
    Template(Template),
}

/// `operator(args...)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// The operator.
    pub operator: Operator,
    /// Arguments in template order.
    pub args: Vec<Expr>,
}

/// A nested query expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubQuery {
    /// The inner query.
    pub body: Box<Expr>,
}

/// An opaque text fragment such as `c => c.Firstname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// The fragment, emitted as is.
    pub text: String,
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    /// A constant node.
    #[must_use]
    pub fn constant(value: impl Into<Constant>) -> Self {
        Self::Constant(value.into())
    }

    /// A template node.
    #[must_use]
    pub fn template(text: impl Into<String>) -> Self {
        Self::Template(Template { text: text.into() })
    }

    /// A subquery node wrapping `body`.
    #[must_use]
    pub fn sub_query(body: impl Into<Expr>) -> Self {
        Self::SubQuery(SubQuery {
            body: Box::new(body.into()),
        })
    }

    /// An operation node.
    #[must_use]
    pub fn operation(operator: Operator, args: Vec<Expr>) -> Self {
        Self::Operation(Operation { operator, args })
    }

    /// `self <op> rhs` for a binary operator.
    #[must_use]
    pub fn binary(self, operator: Operator, rhs: impl Into<Expr>) -> Self {
        Self::operation(operator, vec![self, rhs.into()])
    }

    /// `self == rhs`
    #[must_use]
    pub fn eq(self, rhs: impl Into<Expr>) -> Self {
        self.binary(Operator::Eq, rhs)
    }

    /// `self != rhs`
    #[must_use]
    pub fn ne(self, rhs: impl Into<Expr>) -> Self {
        self.binary(Operator::Ne, rhs)
    }

    /// `self && rhs`
    #[must_use]
    pub fn and(self, rhs: impl Into<Expr>) -> Self {
        self.binary(Operator::And, rhs)
    }

    /// `self || rhs`
    #[must_use]
    pub fn or(self, rhs: impl Into<Expr>) -> Self {
        self.binary(Operator::Or, rhs)
    }

    /// `!self`
    #[must_use]
    pub fn not(self) -> Self {
        Self::operation(Operator::Not, vec![self])
    }
}

impl From<Path> for Expr {
    fn from(path: Path) -> Self {
        Self::Path(path)
    }
}

impl From<Constant> for Expr {
    fn from(constant: Constant) -> Self {
        Self::Constant(constant)
    }
}

impl From<Projection> for Expr {
    fn from(projection: Projection) -> Self {
        Self::Projection(projection)
    }
}

impl From<Operation> for Expr {
    fn from(operation: Operation) -> Self {
        Self::Operation(operation)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Constant(Constant::from(value))
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Constant(Constant::from(value))
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Constant(Constant::from(value))
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Constant(Constant::from(value))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::Constant(Constant::from(value))
    }
}
