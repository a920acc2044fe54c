//! Engine crate
//!
//! Physical sub-plans hosted by execution stages. A stage owns one
//! [`PhysicalPlan`]; every operator in it reports the user-defined functions
//! it calls so the stage can ship them with the job.
//!
//! # Example
//! ```rust
//! use floe_common::KeyAllocator;
//! use floe_engine::{operators::ParquetScanExec, PhysicalPlan};
//!
//! let mut keys = KeyAllocator::new("scope").unwrap();
//! let mut plan = PhysicalPlan::new();
//! plan.add(Box::new(ParquetScanExec::new(keys.next_key(), "data/t.parquet".into(), None)));
//! assert_eq!(plan.len(), 1);
//! assert!(plan.udfs().is_empty());
//! ```

pub mod operators;
pub mod physical_plan;
pub mod udf;

pub use physical_plan::{PhysicalOperator, PhysicalPlan};
