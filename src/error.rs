use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    #[error("counter target {0:?} is not a non-negative integer")]
    InvalidCounterTarget(String),

    #[error("invalid effects config: {0}")]
    InvalidConfig(String),
}
