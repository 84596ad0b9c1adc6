//! LINQ serialization and root extraction for query expression trees.
//!
//! Two independent, pure traversals over a [`linqdsl_model::Expr`]:
//!
//! - [`serializer`] renders the tree as LINQ text, rejecting subqueries and
//!   malformed projections.
//! - [`roots`] collects the distinct root aliases the tree references.
//!
//! Each call owns its output buffer or accumulator; nothing is shared
//! between traversals.

mod config;
mod error;
pub mod roots;
pub mod serializer;

pub use config::{IdentifierCase, LinqConfig};
pub use error::{ConfigError, SerializeError, SerializeResult};
pub use roots::{collect_roots, extract_roots};
pub use serializer::{LinqSerializer, RenderedQuery, to_linq};
