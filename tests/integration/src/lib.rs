//! Integration tests for the LINQ query DSL.
//!
//! Trees are decoded from the JSON an upstream query builder would emit,
//! then serialized and root-extracted end to end.
//!
//! Run them with:
//! ```text
//! cargo test -p linqdsl-integration
//! ```

use std::sync::Once;

use anyhow::{Context, Result};
use linqdsl_model::{Expr, Path};

static INIT: Once = Once::new();

/// Initialize tracing (once).
pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Decode an expression tree from JSON.
///
/// # Errors
///
/// Returns an error if the JSON does not describe a valid tree.
pub fn tree_from_json(json: &str) -> Result<Expr> {
    init_tracing();
    serde_json::from_str(json).context("failed to decode expression tree")
}

/// The `person` root used across tests.
#[must_use]
pub fn person() -> Path {
    Path::root("person")
}

mod test_json;
mod test_roots;
mod test_serialize;
