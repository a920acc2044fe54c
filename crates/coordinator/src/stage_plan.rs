//! A minimal container wiring stages into a DAG.
//!
//! It owns the stages and their edges and walks them in insertion order.
//! Ordering and cycle analysis belong to the optimizer, not here.

use crate::error::{CoordinatorError, Result};
use crate::stage::StageNode;
use crate::visitor::StageVisitor;
use floe_common::OperatorKey;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct StagePlan {
    stages: Vec<StageNode>,
    index: HashMap<OperatorKey, usize>,
    edges: Vec<(usize, usize)>,
}

impl StagePlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stage: StageNode) -> Result<()> {
        if self.index.contains_key(stage.key()) {
            return Err(CoordinatorError::DuplicateStage(stage.key().clone()));
        }
        self.index.insert(stage.key().clone(), self.stages.len());
        self.stages.push(stage);
        Ok(())
    }

    /// Adds an edge `from -> to`, checking that both ends accept another edge.
    pub fn connect(&mut self, from: &OperatorKey, to: &OperatorKey) -> Result<()> {
        let from_idx = self.position(from)?;
        let to_idx = self.position(to)?;
        if self.edges.contains(&(from_idx, to_idx)) {
            return Ok(());
        }

        let has_output = self.edges.iter().any(|(f, _)| *f == from_idx);
        if has_output && !self.stages[from_idx].supports_multiple_outputs() {
            return Err(CoordinatorError::IllegalEdge(format!(
                "{} does not support multiple outputs",
                from
            )));
        }
        let has_input = self.edges.iter().any(|(_, t)| *t == to_idx);
        if has_input && !self.stages[to_idx].supports_multiple_inputs() {
            return Err(CoordinatorError::IllegalEdge(format!(
                "{} does not support multiple inputs",
                to
            )));
        }

        tracing::debug!(from = %from, to = %to, "connecting stages");
        self.edges.push((from_idx, to_idx));
        Ok(())
    }

    fn position(&self, key: &OperatorKey) -> Result<usize> {
        self.index
            .get(key)
            .copied()
            .ok_or_else(|| CoordinatorError::StageNotFound(key.clone()))
    }

    pub fn get(&self, key: &OperatorKey) -> Option<&StageNode> {
        self.index.get(key).map(|&idx| &self.stages[idx])
    }

    pub fn get_mut(&mut self, key: &OperatorKey) -> Option<&mut StageNode> {
        match self.index.get(key) {
            Some(&idx) => Some(&mut self.stages[idx]),
            None => None,
        }
    }

    pub fn predecessors(&self, key: &OperatorKey) -> Vec<&StageNode> {
        let Some(&idx) = self.index.get(key) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|(_, to)| *to == idx)
            .map(|(from, _)| &self.stages[*from])
            .collect()
    }

    pub fn successors(&self, key: &OperatorKey) -> Vec<&StageNode> {
        let Some(&idx) = self.index.get(key) else {
            return Vec::new();
        };
        self.edges
            .iter()
            .filter(|(from, _)| *from == idx)
            .map(|(_, to)| &self.stages[*to])
            .collect()
    }

    pub fn stages(&self) -> impl Iterator<Item = &StageNode> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Visits every stage in insertion order, stopping at the first failure.
    pub fn walk<V>(&mut self, visitor: &mut V) -> std::result::Result<(), V::Error>
    where
        V: StageVisitor + ?Sized,
    {
        for stage in &mut self.stages {
            stage.accept(&mut *visitor)?;
        }
        Ok(())
    }
}
