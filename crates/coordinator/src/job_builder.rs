//! Turns finished stages into job descriptions for the distributed engine.

use crate::config::Settings;
use crate::error::CoordinatorError;
use crate::stage::{StageNode, UNSET_PARALLELISM};
use crate::strategy::StrategyTag;
use crate::visitor::StageVisitor;
use floe_common::OperatorKey;
use serde::Serialize;

/// Ordering used when sorting or shuffling a stage's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparatorKind {
    Natural,
    /// User-supplied comparison function
    Udf,
    /// Raw comparator specialised for the key type
    Typed,
}

/// Everything the engine needs to launch one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageJob {
    pub key: OperatorKey,
    pub name: String,
    pub strategy: StrategyTag,
    pub parallelism: Option<u32>,
    pub partitioner: String,
    pub comparator: ComparatorKind,
    pub combine_small_splits: bool,
    pub splitter: bool,
    pub skew_partition_file: Option<String>,
    /// UDFs whose implementations must be shipped with the job
    pub udfs: Vec<String>,
    pub scalars: Vec<OperatorKey>,
}

/// Collects one [`StageJob`] per visited stage, in visiting order.
#[derive(Debug)]
pub struct JobBuilder {
    settings: Settings,
    jobs: Vec<StageJob>,
}

impl JobBuilder {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            jobs: Vec::new(),
        }
    }

    pub fn jobs(&self) -> &[StageJob] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<StageJob> {
        self.jobs
    }

    fn build(&self, stage: &StageNode) -> Result<StageJob, CoordinatorError> {
        let parallelism = match stage.requested_parallelism() {
            UNSET_PARALLELISM => None,
            p if p < 0 => {
                return Err(CoordinatorError::InvalidStage {
                    key: stage.key().clone(),
                    reason: format!("requested parallelism {} is negative", p),
                })
            }
            p => Some(p as u32),
        };

        // A splitter only fans out; it never shuffles, so it has nothing to partition.
        if stage.is_splitter() {
            if let Some(partitioner) = stage.custom_partitioner() {
                return Err(CoordinatorError::InvalidStage {
                    key: stage.key().clone(),
                    reason: format!("splitter stage cannot use partitioner {}", partitioner),
                });
            }
        }

        let comparator = if stage.uses_custom_comparator() {
            ComparatorKind::Udf
        } else if stage.uses_typed_comparator() {
            ComparatorKind::Typed
        } else {
            ComparatorKind::Natural
        };

        Ok(StageJob {
            key: stage.key().clone(),
            name: stage.name(),
            strategy: stage.strategy(),
            parallelism,
            partitioner: stage
                .custom_partitioner()
                .unwrap_or(self.settings.default_partitioner.as_str())
                .to_string(),
            comparator,
            combine_small_splits: stage.combine_small_splits() && self.settings.combine_small_splits,
            splitter: stage.is_splitter(),
            skew_partition_file: stage.skewed_join_partition_file().map(str::to_string),
            udfs: stage.udfs().iter().cloned().collect(),
            scalars: stage.scalars().iter().cloned().collect(),
        })
    }
}

impl StageVisitor for JobBuilder {
    type Error = CoordinatorError;

    fn visit_stage(&mut self, stage: &mut StageNode) -> Result<(), Self::Error> {
        let job = self.build(stage)?;
        tracing::info!(
            stage = %job.key,
            name = %job.name,
            strategy = %job.strategy,
            "built stage job"
        );
        self.jobs.push(job);
        Ok(())
    }
}
