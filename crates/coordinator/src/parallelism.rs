use crate::config::Settings;
use crate::stage::{StageNode, UNSET_PARALLELISM};
use crate::visitor::StageVisitor;
use std::convert::Infallible;

/// Fills in the configured default parallelism on stages that did not ask
/// for one. Explicit requests are never overridden.
#[derive(Debug, Clone)]
pub struct ParallelismAssigner {
    default_parallelism: Option<u32>,
    assigned: usize,
}

impl ParallelismAssigner {
    pub fn new(settings: &Settings) -> Self {
        Self {
            default_parallelism: settings.default_parallelism,
            assigned: 0,
        }
    }

    /// Number of stages this pass has changed so far.
    pub fn assigned(&self) -> usize {
        self.assigned
    }
}

impl StageVisitor for ParallelismAssigner {
    type Error = Infallible;

    fn visit_stage(&mut self, stage: &mut StageNode) -> Result<(), Self::Error> {
        let Some(default) = self.default_parallelism else {
            return Ok(());
        };
        if stage.requested_parallelism() != UNSET_PARALLELISM {
            return Ok(());
        }
        let parallelism = i32::try_from(default).unwrap_or(i32::MAX);
        tracing::debug!(stage = %stage.key(), parallelism, "assigning default parallelism");
        stage.set_requested_parallelism(parallelism);
        self.assigned += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floe_common::KeyAllocator;

    #[test]
    fn test_only_unset_stages_are_assigned() {
        let mut keys = KeyAllocator::new("p").unwrap();
        let mut unset = StageNode::new(keys.next_key());
        let mut explicit = StageNode::new(keys.next_key());
        explicit.set_requested_parallelism(3);

        let settings = Settings {
            default_parallelism: Some(12),
            ..Settings::default()
        };
        let mut pass = ParallelismAssigner::new(&settings);
        unset.accept(&mut pass).unwrap();
        explicit.accept(&mut pass).unwrap();

        assert_eq!(unset.requested_parallelism(), 12);
        assert_eq!(explicit.requested_parallelism(), 3);
        assert_eq!(pass.assigned(), 1);
    }

    #[test]
    fn test_no_default_leaves_stage_unset() {
        let mut stage = StageNode::new(KeyAllocator::new("p").unwrap().next_key());
        let mut pass = ParallelismAssigner::new(&Settings::default());
        stage.accept(&mut pass).unwrap();
        assert_eq!(stage.requested_parallelism(), UNSET_PARALLELISM);
        assert_eq!(pass.assigned(), 0);
    }
}
