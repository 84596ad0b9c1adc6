//! LINQ operators with their rendering templates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Binding strength of an operator, tightest first.
///
/// Ordering follows C# operator precedence, so `a < b` means `a` binds
/// tighter than `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Member access and method calls (`x.Length`, `x.StartsWith(y)`).
    Primary,
    /// Prefix `!` and `-`.
    Unary,
    /// `*`, `/`, `%`.
    Multiplicative,
    /// `+`, `-`.
    Additive,
    /// `<`, `<=`, `>`, `>=`.
    Relational,
    /// `==`, `!=`.
    Equality,
    /// `&&`.
    And,
    /// `||`.
    Or,
}

/// An operator applied by an [`Operation`](crate::Operation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    /// `a == b`
    Eq,
    /// `a != b`
    Ne,
    /// `a < b`
    Lt,
    /// `a <= b`
    Le,
    /// `a > b`
    Gt,
    /// `a >= b`
    Ge,
    /// `a == null`
    IsNull,
    /// `a != null`
    IsNotNull,
    /// `a && b`
    And,
    /// `a || b`
    Or,
    /// `!a`
    Not,
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a % b`
    Mod,
    /// `-a`
    Negate,
    /// `a.StartsWith(b)`
    StartsWith,
    /// `a.EndsWith(b)`
    EndsWith,
    /// `a.Contains(b)`, on strings and collections.
    Contains,
    /// `a.ToUpper()`
    ToUpper,
    /// `a.ToLower()`
    ToLower,
    /// `a.Trim()`
    Trim,
    /// `a.Length`
    Length,
    /// `a.Any()`
    Any,
    /// `a.Count()`
    Count,
}

impl Operator {
    /// Rendering template; `{n}` is replaced by the n-th argument.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Eq => "{0} == {1}",
            Self::Ne => "{0} != {1}",
            Self::Lt => "{0} < {1}",
            Self::Le => "{0} <= {1}",
            Self::Gt => "{0} > {1}",
            Self::Ge => "{0} >= {1}",
            Self::IsNull => "{0} == null",
            Self::IsNotNull => "{0} != null",
            Self::And => "{0} && {1}",
            Self::Or => "{0} || {1}",
            Self::Not => "!{0}",
            Self::Add => "{0} + {1}",
            Self::Sub => "{0} - {1}",
            Self::Mul => "{0} * {1}",
            Self::Div => "{0} / {1}",
            Self::Mod => "{0} % {1}",
            Self::Negate => "-{0}",
            Self::StartsWith => "{0}.StartsWith({1})",
            Self::EndsWith => "{0}.EndsWith({1})",
            Self::Contains => "{0}.Contains({1})",
            Self::ToUpper => "{0}.ToUpper()",
            Self::ToLower => "{0}.ToLower()",
            Self::Trim => "{0}.Trim()",
            Self::Length => "{0}.Length",
            Self::Any => "{0}.Any()",
            Self::Count => "{0}.Count()",
        }
    }

    /// Number of arguments the template consumes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::IsNull
            | Self::IsNotNull
            | Self::Not
            | Self::Negate
            | Self::ToUpper
            | Self::ToLower
            | Self::Trim
            | Self::Length
            | Self::Any
            | Self::Count => 1,
            _ => 2,
        }
    }

    /// Binding strength used to decide parenthesization.
    #[must_use]
    pub fn precedence(self) -> Precedence {
        match self {
            Self::StartsWith
            | Self::EndsWith
            | Self::Contains
            | Self::ToUpper
            | Self::ToLower
            | Self::Trim
            | Self::Length
            | Self::Any
            | Self::Count => Precedence::Primary,
            Self::Not | Self::Negate => Precedence::Unary,
            Self::Mul | Self::Div | Self::Mod => Precedence::Multiplicative,
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Lt | Self::Le | Self::Gt | Self::Ge => Precedence::Relational,
            Self::Eq | Self::Ne | Self::IsNull | Self::IsNotNull => Precedence::Equality,
            Self::And => Precedence::And,
            Self::Or => Precedence::Or,
        }
    }

    /// Whether `a op (b op c)` means the same as `a op b op c`.
    #[must_use]
    pub fn is_associative(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Add | Self::Mul)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Eq => "eq",
            Self::Ne => "ne",
            Self::Lt => "lt",
            Self::Le => "le",
            Self::Gt => "gt",
            Self::Ge => "ge",
            Self::IsNull => "is_null",
            Self::IsNotNull => "is_not_null",
            Self::And => "and",
            Self::Or => "or",
            Self::Not => "not",
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "div",
            Self::Mod => "mod",
            Self::Negate => "negate",
            Self::StartsWith => "starts_with",
            Self::EndsWith => "ends_with",
            Self::Contains => "contains",
            Self::ToUpper => "to_upper",
            Self::ToLower => "to_lower",
            Self::Trim => "trim",
            Self::Length => "length",
            Self::Any => "any",
            Self::Count => "count",
        };
        f.write_str(name)
    }
}
