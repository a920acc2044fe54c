use crate::stage::StageNode;
use crate::strategy::StrategyTag;
use crate::visitor::StageVisitor;
use std::fmt::{self, Write};

/// Renders stages as human-readable multiline text for EXPLAIN output.
#[derive(Debug, Default)]
pub struct StagePrinter {
    out: String,
}

impl StagePrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    pub fn into_output(self) -> String {
        self.out
    }
}

impl StageVisitor for StagePrinter {
    type Error = fmt::Error;

    fn visit_stage(&mut self, stage: &mut StageNode) -> Result<(), Self::Error> {
        let out = &mut self.out;
        write!(out, "{}", stage.name())?;
        if stage.strategy() != StrategyTag::None {
            write!(out, " strategy={}", stage.strategy())?;
        }
        writeln!(out)?;

        if stage.is_splitter() {
            writeln!(out, "  splitter")?;
        }
        if let Some(partitioner) = stage.custom_partitioner() {
            writeln!(out, "  partitioner={}", partitioner)?;
        }
        if let Some(file) = stage.skewed_join_partition_file() {
            writeln!(out, "  skew_partition_file={}", file)?;
        }
        if !stage.combine_small_splits() {
            writeln!(out, "  combine_small_splits=false")?;
        }
        if !stage.scalars().is_empty() {
            let scalars: Vec<String> = stage.scalars().iter().map(|k| k.to_string()).collect();
            writeln!(out, "  scalars=[{}]", scalars.join(", "))?;
        }
        for op in stage.plan().operators() {
            writeln!(out, "  {} - {}", op.name(), op.key())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_common::KeyAllocator;
    use floe_engine::operators::ParquetScanExec;

    #[test]
    fn test_prints_header_flags_and_operators() {
        let mut keys = KeyAllocator::new("s").unwrap();
        let mut stage = StageNode::new(keys.next_key());
        let scan_key = keys.next_key();
        stage.add(Box::new(ParquetScanExec::new(scan_key, "t".into(), None)));
        stage.mark_group_by();
        stage.set_requested_parallelism(2);
        stage.set_splitter(true);
        stage.no_combine_small_splits();

        let mut printer = StagePrinter::new();
        stage.accept(&mut printer).unwrap();

        assert_eq!(
            printer.into_output(),
            "Spark(2) - s-0 strategy=GROUPBY\n  splitter\n  combine_small_splits=false\n  ParquetScan - s-1\n"
        );
    }

    #[test]
    fn test_plain_stage_prints_single_line() {
        let mut stage = StageNode::new(KeyAllocator::new("s").unwrap().next_key());
        let mut printer = StagePrinter::new();
        stage.accept(&mut printer).unwrap();
        assert_eq!(printer.output(), "Spark(-1) - s-0\n");
    }
}
