//! Parquet scan physical operator

use crate::physical_plan::PhysicalOperator;
use floe_common::OperatorKey;

/// Physical operator for scanning Parquet files
#[derive(Debug, Clone)]
pub struct ParquetScanExec {
    key: OperatorKey,
    file_path: String,
    projection: Option<Vec<usize>>,
}

impl ParquetScanExec {
    pub fn new(key: OperatorKey, file_path: String, projection: Option<Vec<usize>>) -> Self {
        Self {
            key,
            file_path,
            projection,
        }
    }

    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn projection(&self) -> Option<&[usize]> {
        self.projection.as_deref()
    }
}

impl PhysicalOperator for ParquetScanExec {
    fn key(&self) -> &OperatorKey {
        &self.key
    }

    fn name(&self) -> &str {
        "ParquetScan"
    }
}
