use crate::error::{CoordinatorError, Result};
use serde::Deserialize;

/// Compiler-wide defaults applied when stages are turned into jobs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// Parallelism given to stages that did not request one. `None` leaves
    /// the choice to the engine.
    #[serde(default)]
    pub default_parallelism: Option<u32>,
    #[serde(default = "default_partitioner")]
    pub default_partitioner: String,
    /// Global switch; a stage coalesces small splits only if both this and
    /// the stage's own flag allow it.
    #[serde(default = "default_combine_small_splits")]
    pub combine_small_splits: bool,
}

fn default_partitioner() -> String {
    "HashPartitioner".to_string()
}

fn default_combine_small_splits() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_parallelism: None,
            default_partitioner: default_partitioner(),
            combine_small_splits: default_combine_small_splits(),
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self> {
        let config_file_path = std::env::var("FLOE_COORDINATOR_CONFIG_PATH")
            .unwrap_or_else(|_| "crates/coordinator/config/default.toml".to_string());
        Self::from_file(&config_file_path)
    }

    pub fn from_file(path: &str) -> Result<Self> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(config::Environment::with_prefix("FLOE_COORDINATOR").separator("__"))
            .build()?;
        let settings: Settings = s.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.default_parallelism == Some(0) {
            return Err(CoordinatorError::InvalidConfig(
                "default_parallelism must be at least 1".to_string(),
            ));
        }
        if self.default_partitioner.trim().is_empty() {
            return Err(CoordinatorError::InvalidConfig(
                "default_partitioner must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
