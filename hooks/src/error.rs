use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("loss collection has no entry at index {index} (len {len})")]
    MissingLoss { index: usize, len: usize },

    #[error("requested loss at index {index} was not delivered to after_run")]
    MissingValue { index: usize },

    #[error(transparent)]
    Tensor(#[from] candle_core::Error),
}
