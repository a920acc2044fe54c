//! Coordinator crate
//!
//! Execution stages of a physical plan and the compiler passes that read
//! them: a stage hosts a physical sub-plan, carries its strategy and tuning
//! flags, and is handed to [`StageVisitor`]s through [`StageNode::accept`].

pub mod comparator;
pub mod config;
pub mod error;
pub mod job_builder;
pub mod parallelism;
pub mod printer;
pub mod stage;
pub mod stage_plan;
pub mod strategy;
pub mod visitor;

pub use comparator::ComparatorAssigner;
pub use config::Settings;
pub use error::{CoordinatorError, Result};
pub use job_builder::{ComparatorKind, JobBuilder, StageJob};
pub use parallelism::ParallelismAssigner;
pub use printer::StagePrinter;
pub use stage::{StageNode, ENGINE_NAME, UNSET_PARALLELISM};
pub use stage_plan::StagePlan;
pub use strategy::StrategyTag;
pub use visitor::StageVisitor;
