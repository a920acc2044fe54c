use crate::stage::StageNode;
use crate::strategy::StrategyTag;
use crate::visitor::StageVisitor;
use floe_common::OperatorKey;
use std::collections::BTreeSet;
use std::convert::Infallible;

/// Chooses how each stage orders its keys.
///
/// Stages the planner lists as sorting with a user comparator get one; other
/// keyed stages get the typed raw comparator when it is enabled. The
/// comparator flags can only be written through this pass.
#[derive(Debug, Clone)]
pub struct ComparatorAssigner {
    udf_comparator_stages: BTreeSet<OperatorKey>,
    typed_comparators: bool,
}

impl ComparatorAssigner {
    pub fn new(
        udf_comparator_stages: impl IntoIterator<Item = OperatorKey>,
        typed_comparators: bool,
    ) -> Self {
        Self {
            udf_comparator_stages: udf_comparator_stages.into_iter().collect(),
            typed_comparators,
        }
    }
}

fn is_keyed(strategy: StrategyTag) -> bool {
    matches!(
        strategy,
        StrategyTag::GroupBy | StrategyTag::CoGroup | StrategyTag::HashJoin
    )
}

impl StageVisitor for ComparatorAssigner {
    type Error = Infallible;

    fn visit_stage(&mut self, stage: &mut StageNode) -> Result<(), Self::Error> {
        let udf = self.udf_comparator_stages.contains(stage.key());
        let typed = !udf && self.typed_comparators && is_keyed(stage.strategy());
        stage.set_uses_custom_comparator(udf);
        stage.set_uses_typed_comparator(typed);
        Ok(())
    }
}
