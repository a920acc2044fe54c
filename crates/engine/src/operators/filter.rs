//! Filter physical operator

use crate::physical_plan::PhysicalOperator;
use crate::udf::collect_udfs;
use datafusion::logical_expr::Expr;
use floe_common::OperatorKey;
use std::collections::BTreeSet;

/// Physical operator for filtering
#[derive(Debug, Clone)]
pub struct FilterExec {
    key: OperatorKey,
    predicate: Expr,
}

impl FilterExec {
    pub fn new(key: OperatorKey, predicate: Expr) -> Self {
        Self { key, predicate }
    }

    pub fn predicate(&self) -> &Expr {
        &self.predicate
    }
}

impl PhysicalOperator for FilterExec {
    fn key(&self) -> &OperatorKey {
        &self.key
    }

    fn name(&self) -> &str {
        "Filter"
    }

    fn udfs(&self) -> BTreeSet<String> {
        collect_udfs([&self.predicate])
    }
}
