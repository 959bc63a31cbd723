use crate::{HookError, LossCollection};

/// Position of the monitored loss in the step's loss collection.
///
/// Index 1 is the loss the training graphs register second (the validation
/// loss in the usual `[train, validation]` layout). Looking it up by name has
/// not been reliable across hosts, so the lookup stays positional.
pub const DEFAULT_LOSS_INDEX: usize = 1;

/// Which loss a hook wants resolved once the step has run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricRequest {
    index: usize,
}

impl MetricRequest {
    pub const fn loss_index(index: usize) -> Self {
        Self { index }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn resolve(&self, losses: &LossCollection) -> Result<f32, HookError> {
        losses.scalar(self.index)
    }
}

impl Default for MetricRequest {
    fn default() -> Self {
        Self::loss_index(DEFAULT_LOSS_INDEX)
    }
}

/// Returned from `before_run` to ask the session for a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionRunArgs {
    pub fetches: MetricRequest,
}

impl SessionRunArgs {
    pub fn new(fetches: MetricRequest) -> Self {
        Self { fetches }
    }
}

/// Handed to `after_run`. `results` is `None` when the hook requested nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionRunValues {
    pub results: Option<f32>,
}

#[derive(Debug, Default)]
pub struct RunContext {
    step: u64,
    stop_requested: bool,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero-based index of the step currently running.
    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn request_stop(&mut self) {
        self.stop_requested = true;
    }

    pub fn stop_requested(&self) -> bool {
        self.stop_requested
    }

    pub(crate) fn advance(&mut self) {
        self.step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_context_counts_steps() {
        let mut ctx = RunContext::new();
        assert_eq!(ctx.step(), 0);

        ctx.advance();
        ctx.advance();
        assert_eq!(ctx.step(), 2);
        assert!(!ctx.stop_requested());
    }

    #[test]
    fn test_request_stop_sticks() {
        let mut ctx = RunContext::new();
        ctx.request_stop();
        ctx.advance();
        assert!(ctx.stop_requested());
    }

    #[test]
    fn test_default_request_is_second_loss() {
        assert_eq!(MetricRequest::default().index(), DEFAULT_LOSS_INDEX);
        assert_eq!(DEFAULT_LOSS_INDEX, 1);
    }
}
