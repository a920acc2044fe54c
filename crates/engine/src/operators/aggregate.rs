//! Grouped aggregation physical operator

use crate::physical_plan::PhysicalOperator;
use crate::udf::collect_udfs;
use datafusion::logical_expr::Expr;
use floe_common::OperatorKey;
use std::collections::BTreeSet;

/// Physical operator for a (possibly grouped) aggregation
#[derive(Debug, Clone)]
pub struct AggregateExec {
    key: OperatorKey,
    group_exprs: Vec<Expr>,
    aggr_exprs: Vec<Expr>,
}

impl AggregateExec {
    pub fn new(key: OperatorKey, group_exprs: Vec<Expr>, aggr_exprs: Vec<Expr>) -> Self {
        Self {
            key,
            group_exprs,
            aggr_exprs,
        }
    }

    pub fn group_exprs(&self) -> &[Expr] {
        &self.group_exprs
    }

    pub fn aggr_exprs(&self) -> &[Expr] {
        &self.aggr_exprs
    }
}

impl PhysicalOperator for AggregateExec {
    fn key(&self) -> &OperatorKey {
        &self.key
    }

    fn name(&self) -> &str {
        "Aggregate"
    }

    fn udfs(&self) -> BTreeSet<String> {
        collect_udfs(self.group_exprs.iter().chain(self.aggr_exprs.iter()))
    }
}
