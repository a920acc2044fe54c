//! Execution stages: the job-sized units a physical plan is cut into before
//! it is handed to the distributed engine.
//!
//! A [`StageNode`] is built up by the planner during a single compilation
//! pass (operators appended, strategy and flags set) and is treated as frozen
//! once the job builder starts reading it. Nothing here enforces the freeze.

use crate::error::Result;
use crate::strategy::StrategyTag;
use crate::visitor::StageVisitor;
use floe_common::OperatorKey;
use floe_engine::{PhysicalOperator, PhysicalPlan};
use std::collections::BTreeSet;
use std::fmt;

/// Engine name shown in stage names.
pub const ENGINE_NAME: &str = "Spark";

/// Sentinel for "no parallelism requested, use the engine default".
pub const UNSET_PARALLELISM: i32 = -1;

/// One execution stage and the sub-plan it hosts.
#[derive(Debug)]
pub struct StageNode {
    key: OperatorKey,
    plan: PhysicalPlan,
    udfs: BTreeSet<String>,
    scalars: BTreeSet<OperatorKey>,
    strategy: StrategyTag,
    custom_partitioner: Option<String>,
    requested_parallelism: i32,
    splitter: bool,
    uses_custom_comparator: bool,
    uses_typed_comparator: bool,
    combine_small_splits: bool,
    skewed_join_partition_file: Option<String>,
}

impl StageNode {
    pub fn new(key: OperatorKey) -> Self {
        Self {
            key,
            plan: PhysicalPlan::new(),
            udfs: BTreeSet::new(),
            scalars: BTreeSet::new(),
            strategy: StrategyTag::None,
            custom_partitioner: None,
            requested_parallelism: UNSET_PARALLELISM,
            splitter: false,
            uses_custom_comparator: false,
            uses_typed_comparator: false,
            combine_small_splits: true,
            skewed_join_partition_file: None,
        }
    }

    pub fn key(&self) -> &OperatorKey {
        &self.key
    }

    pub fn plan(&self) -> &PhysicalPlan {
        &self.plan
    }

    /// Appends an operator to the hosted sub-plan and records the UDFs it calls.
    pub fn add(&mut self, op: Box<dyn PhysicalOperator>) {
        let udfs = op.udfs();
        tracing::debug!(
            stage = %self.key,
            operator = %op.key(),
            udfs = udfs.len(),
            "appending operator to stage"
        );
        self.udfs.extend(udfs);
        self.plan.add(op);
    }

    /// Wires a data-flow edge between two operators already appended to this stage.
    pub fn connect(&mut self, from: &OperatorKey, to: &OperatorKey) -> Result<()> {
        self.plan.connect(from, to)?;
        tracing::debug!(stage = %self.key, from = %from, to = %to, "connecting operators");
        Ok(())
    }

    /// Fully-qualified names of every UDF used anywhere in the sub-plan.
    pub fn udfs(&self) -> &BTreeSet<String> {
        &self.udfs
    }

    /// Records an operator in a sibling plan whose single-row output this
    /// stage reads as a broadcast scalar. The stage does not own it.
    pub fn add_scalar(&mut self, key: OperatorKey) {
        self.scalars.insert(key);
    }

    pub fn scalars(&self) -> &BTreeSet<OperatorKey> {
        &self.scalars
    }

    pub fn supports_multiple_inputs(&self) -> bool {
        true
    }

    pub fn supports_multiple_outputs(&self) -> bool {
        true
    }

    /// Human-readable identity, e.g. `Spark(8,Foo) - scope-3`.
    pub fn name(&self) -> String {
        let udfs = self.short_udf_names();
        let separator = if udfs.is_empty() { "" } else { "," };
        format!(
            "{}({}{}{}) - {}",
            ENGINE_NAME, self.requested_parallelism, separator, udfs, self.key
        )
    }

    fn short_udf_names(&self) -> String {
        self.udfs
            .iter()
            .map(|name| match name.rfind('.') {
                Some(idx) => &name[idx + 1..],
                None => name.as_str(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn accept<V>(&mut self, visitor: &mut V) -> std::result::Result<(), V::Error>
    where
        V: StageVisitor + ?Sized,
    {
        visitor.visit_stage(self)
    }

    pub fn strategy(&self) -> StrategyTag {
        self.strategy
    }

    fn mark(&mut self, strategy: StrategyTag) {
        if self.strategy != StrategyTag::None && self.strategy != strategy {
            tracing::debug!(
                stage = %self.key,
                from = %self.strategy,
                to = %strategy,
                "re-tagging stage strategy"
            );
        }
        self.strategy = strategy;
    }

    pub fn is_sampler(&self) -> bool {
        self.strategy == StrategyTag::Sampler
    }

    pub fn mark_sampler(&mut self) {
        self.mark(StrategyTag::Sampler);
    }

    pub fn is_indexer(&self) -> bool {
        self.strategy == StrategyTag::Indexer
    }

    pub fn mark_indexer(&mut self) {
        self.mark(StrategyTag::Indexer);
    }

    pub fn is_group_by(&self) -> bool {
        self.strategy == StrategyTag::GroupBy
    }

    pub fn mark_group_by(&mut self) {
        self.mark(StrategyTag::GroupBy);
    }

    pub fn is_cogroup(&self) -> bool {
        self.strategy == StrategyTag::CoGroup
    }

    pub fn mark_cogroup(&mut self) {
        self.mark(StrategyTag::CoGroup);
    }

    pub fn is_regular_join(&self) -> bool {
        self.strategy == StrategyTag::HashJoin
    }

    pub fn mark_regular_join(&mut self) {
        self.mark(StrategyTag::HashJoin);
    }

    pub fn requested_parallelism(&self) -> i32 {
        self.requested_parallelism
    }

    /// `-1` means unset. Callers must not pass any other negative value; the
    /// job builder rejects stages that carry one.
    pub fn set_requested_parallelism(&mut self, parallelism: i32) {
        self.requested_parallelism = parallelism;
    }

    pub fn custom_partitioner(&self) -> Option<&str> {
        self.custom_partitioner.as_deref()
    }

    pub fn set_custom_partitioner(&mut self, partitioner: Option<String>) {
        self.custom_partitioner = partitioner;
    }

    pub fn is_splitter(&self) -> bool {
        self.splitter
    }

    pub fn set_splitter(&mut self, splitter: bool) {
        self.splitter = splitter;
    }

    /// Side file with the sampled key distribution used by a skew-aware join.
    pub fn skewed_join_partition_file(&self) -> Option<&str> {
        self.skewed_join_partition_file.as_deref()
    }

    pub fn set_skewed_join_partition_file(&mut self, file: impl Into<String>) {
        self.skewed_join_partition_file = Some(file.into());
    }

    pub(crate) fn uses_custom_comparator(&self) -> bool {
        self.uses_custom_comparator
    }

    pub(crate) fn set_uses_custom_comparator(&mut self, uses: bool) {
        self.uses_custom_comparator = uses;
    }

    pub(crate) fn uses_typed_comparator(&self) -> bool {
        self.uses_typed_comparator
    }

    pub(crate) fn set_uses_typed_comparator(&mut self, uses: bool) {
        self.uses_typed_comparator = uses;
    }

    /// Stops the runtime from coalescing small input splits for this stage.
    /// There is no way to turn coalescing back on.
    pub fn no_combine_small_splits(&mut self) {
        self.combine_small_splits = false;
    }

    pub fn combine_small_splits(&self) -> bool {
        self.combine_small_splits
    }
}

impl fmt::Display for StageNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}
