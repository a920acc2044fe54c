//! Physical operators that can be hosted inside a stage

pub mod aggregate;
pub mod filter;
pub mod hash_join;
pub mod parquet_scan;
pub mod projection;

pub use aggregate::AggregateExec;
pub use filter::FilterExec;
pub use hash_join::{HashJoinExec, JoinType};
pub use parquet_scan::ParquetScanExec;
pub use projection::ProjectionExec;
