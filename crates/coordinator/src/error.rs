use floe_common::OperatorKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoordinatorError {
    #[error("Failed to load configuration")]
    Config(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Common(#[from] floe_common::Error),

    #[error("Stage {0} is already part of the plan")]
    DuplicateStage(OperatorKey),

    #[error("Stage not found: {0}")]
    StageNotFound(OperatorKey),

    #[error("Illegal edge: {0}")]
    IllegalEdge(String),

    #[error("Stage {key} cannot be turned into a job: {reason}")]
    InvalidStage { key: OperatorKey, reason: String },
}

pub type Result<T> = std::result::Result<T, CoordinatorError>;
