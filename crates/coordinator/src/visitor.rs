//! Traversal hook for compiler passes over execution stages.

use crate::stage::StageNode;

/// A compiler pass that runs stage-specific logic.
///
/// Stages call back into the visitor through [`StageNode::accept`], so a pass
/// never has to inspect node kinds itself. Failures are the visitor's own
/// error type and reach the caller untouched.
pub trait StageVisitor {
    type Error;

    fn visit_stage(&mut self, stage: &mut StageNode) -> Result<(), Self::Error>;
}
