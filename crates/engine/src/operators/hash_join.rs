//! Hash join physical operator

use crate::physical_plan::PhysicalOperator;
use crate::udf::collect_udfs;
use datafusion::logical_expr::Expr;
use floe_common::OperatorKey;
use std::collections::BTreeSet;

/// Join type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// Physical operator for hash joins
#[derive(Debug, Clone)]
pub struct HashJoinExec {
    key: OperatorKey,
    on: Vec<(Expr, Expr)>,
    filter: Option<Expr>,
    join_type: JoinType,
}

impl HashJoinExec {
    pub fn new(key: OperatorKey, on: Vec<(Expr, Expr)>, join_type: JoinType) -> Self {
        Self {
            key,
            on,
            filter: None,
            join_type,
        }
    }

    /// Residual predicate evaluated on matched rows.
    pub fn with_filter(mut self, filter: Expr) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn on(&self) -> &[(Expr, Expr)] {
        &self.on
    }

    pub fn filter(&self) -> Option<&Expr> {
        self.filter.as_ref()
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }
}

impl PhysicalOperator for HashJoinExec {
    fn key(&self) -> &OperatorKey {
        &self.key
    }

    fn name(&self) -> &str {
        "HashJoin"
    }

    fn udfs(&self) -> BTreeSet<String> {
        let keys = self.on.iter().flat_map(|(left, right)| [left, right]);
        collect_udfs(keys.chain(self.filter.iter()))
    }
}
