//! Projection physical operator

use crate::physical_plan::PhysicalOperator;
use crate::udf::collect_udfs;
use datafusion::logical_expr::Expr;
use floe_common::OperatorKey;
use std::collections::BTreeSet;

/// Physical operator for projections
#[derive(Debug, Clone)]
pub struct ProjectionExec {
    key: OperatorKey,
    expressions: Vec<(Expr, String)>,
}

impl ProjectionExec {
    pub fn new(key: OperatorKey, expressions: Vec<(Expr, String)>) -> Self {
        Self { key, expressions }
    }

    pub fn expressions(&self) -> &[(Expr, String)] {
        &self.expressions
    }
}

impl PhysicalOperator for ProjectionExec {
    fn key(&self) -> &OperatorKey {
        &self.key
    }

    fn name(&self) -> &str {
        "Projection"
    }

    fn udfs(&self) -> BTreeSet<String> {
        collect_udfs(self.expressions.iter().map(|(expr, _)| expr))
    }
}
