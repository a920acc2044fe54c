use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of relational work a stage primarily performs.
///
/// A stage carries exactly one tag; marking a new one replaces the old.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrategyTag {
    #[default]
    None,
    /// Samples key distribution for a later skew-aware or ordered stage
    Sampler,
    /// Builds a merge-join index
    Indexer,
    GroupBy,
    CoGroup,
    /// Regular (non-skewed) hash join
    HashJoin,
}

impl fmt::Display for StrategyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyTag::None => "NONE",
            StrategyTag::Sampler => "SAMPLER",
            StrategyTag::Indexer => "INDEXER",
            StrategyTag::GroupBy => "GROUPBY",
            StrategyTag::CoGroup => "COGROUP",
            StrategyTag::HashJoin => "HASHJOIN",
        };
        f.write_str(s)
    }
}
