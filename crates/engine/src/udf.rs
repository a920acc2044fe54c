//! Extraction of user-defined function references from DataFusion expressions.

use datafusion::common::tree_node::{TreeNode, TreeNodeRecursion};
use datafusion::error::Result as DataFusionResult;
use datafusion::logical_expr::Expr;
use std::collections::BTreeSet;

/// Collects the names of all scalar, aggregate and window functions called
/// anywhere inside `exprs`, including nested arguments.
pub fn collect_udfs<'a>(exprs: impl IntoIterator<Item = &'a Expr>) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for expr in exprs {
        if let Err(e) = collect_into(expr, &mut names) {
            tracing::warn!(error = %e, expr = %expr, "failed to walk expression for udfs");
        }
    }
    names
}

fn collect_into(expr: &Expr, names: &mut BTreeSet<String>) -> DataFusionResult<()> {
    expr.apply(|e| {
        match e {
            Expr::ScalarFunction(f) => {
                names.insert(f.func.name().to_string());
            }
            Expr::AggregateFunction(f) => {
                names.insert(f.func.name().to_string());
            }
            Expr::WindowFunction(w) => {
                names.insert(w.fun.name().to_string());
            }
            _ => {}
        }
        Ok(TreeNodeRecursion::Continue)
    })?;
    Ok(())
}
