use floe_common::{Error, OperatorKey, Result};
use std::collections::BTreeSet;
use std::fmt::Debug;

/// A physical operator that can be hosted inside a stage's sub-plan.
pub trait PhysicalOperator: Debug + Send + Sync {
    fn key(&self) -> &OperatorKey;

    /// Short operator name used in explain output.
    fn name(&self) -> &str;

    /// Fully-qualified names of every user-defined function this operator calls.
    fn udfs(&self) -> BTreeSet<String> {
        BTreeSet::new()
    }
}

/// An owned DAG of physical operators.
///
/// Operators are kept in the order they were added, which is the data-flow
/// order within the stage. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct PhysicalPlan {
    operators: Vec<Box<dyn PhysicalOperator>>,
    edges: Vec<(OperatorKey, OperatorKey)>,
}

impl PhysicalPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, op: Box<dyn PhysicalOperator>) {
        tracing::trace!(key = %op.key(), name = op.name(), "adding physical operator");
        self.operators.push(op);
    }

    /// Adds a data-flow edge between two operators already in the plan.
    pub fn connect(&mut self, from: &OperatorKey, to: &OperatorKey) -> Result<()> {
        for key in [from, to] {
            if self.get(key).is_none() {
                return Err(Error::plan(format!(
                    "operator {} is not part of this plan",
                    key
                )));
            }
        }
        let edge = (from.clone(), to.clone());
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }

    pub fn operators(&self) -> impl Iterator<Item = &dyn PhysicalOperator> {
        self.operators.iter().map(|op| op.as_ref())
    }

    pub fn get(&self, key: &OperatorKey) -> Option<&dyn PhysicalOperator> {
        self.operators().find(|op| op.key() == key)
    }

    pub fn successors(&self, key: &OperatorKey) -> Vec<&dyn PhysicalOperator> {
        self.edges
            .iter()
            .filter(|(from, _)| from == key)
            .filter_map(|(_, to)| self.get(to))
            .collect()
    }

    pub fn predecessors(&self, key: &OperatorKey) -> Vec<&dyn PhysicalOperator> {
        self.edges
            .iter()
            .filter(|(_, to)| to == key)
            .filter_map(|(from, _)| self.get(from))
            .collect()
    }

    /// Union of the UDFs referenced by every operator in the plan.
    pub fn udfs(&self) -> BTreeSet<String> {
        self.operators.iter().flat_map(|op| op.udfs()).collect()
    }
}
