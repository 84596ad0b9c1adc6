//! Root alias extraction.
//!
//! Walks an expression tree and collects the distinct root aliases reached
//! through path chains, e.g. `{"p1", "p2"}` for `p1.Firstname == p2.Lastname`.
//! Templates and subqueries are opaque to this walk, and projection aliases
//! are literals rather than references.

use std::collections::HashSet;

use linqdsl_model::Expr;
use tracing::debug;

/// Collect the root aliases referenced by `expr` into `roots`.
///
/// Already-present names are left as is, so one accumulator can be threaded
/// through several subtrees.
#[allow(clippy::implicit_hasher)]
pub fn collect_roots(expr: &Expr, roots: &mut HashSet<String>) {
    match expr {
        Expr::Path(path) => {
            let root = path.root_name();
            if !roots.contains(root) {
                roots.insert(root.to_owned());
            }
        }
        Expr::Operation(operation) => {
            for arg in &operation.args {
                collect_roots(arg, roots);
            }
        }
        Expr::Projection(projection) => {
            for entry in &projection.entries {
                let selectors = match entry.args.as_slice() {
                    [_alias, selector] => std::slice::from_ref(selector),
                    args => args,
                };
                for selector in selectors {
                    collect_roots(selector, roots);
                }
            }
        }
        Expr::Constant(_) | Expr::SubQuery(_) | Expr::Template(_) => {}
    }
}

/// Return the set of root aliases referenced by `expr`.
#[must_use]
pub fn extract_roots(expr: &Expr) -> HashSet<String> {
    let mut roots = HashSet::new();
    collect_roots(expr, &mut roots);
    debug!(roots = roots.len(), "extracted expression roots");
    roots
}
