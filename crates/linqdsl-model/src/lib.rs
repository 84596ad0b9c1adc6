//! Expression tree model for the LINQ query DSL.
//!
//! An upstream query builder produces an [`Expr`] tree; the core crate reads
//! it to render LINQ text and to compute the set of root aliases it touches.
//! Nothing in this crate mutates a tree after construction.

mod constant;
mod expr;
mod operator;
mod path;
mod projection;

pub use constant::Constant;
pub use expr::{Expr, Operation, SubQuery, Template};
pub use operator::{Operator, Precedence};
pub use path::{Path, PathKind};
pub use projection::{Projection, ProjectionEntry};
