use crate::{HookError, RunContext, SessionRunArgs, SessionRunValues};

/// Extension point invoked by [`MonitoredSession`](crate::MonitoredSession)
/// around every training step.
pub trait SessionRunHook {
    /// Called before the step runs. The returned request is resolved against
    /// the step's losses and delivered to `after_run`.
    fn before_run(&mut self, run_context: &RunContext)
        -> Result<Option<SessionRunArgs>, HookError>;

    fn after_run(
        &mut self,
        run_context: &mut RunContext,
        run_values: &SessionRunValues,
    ) -> Result<(), HookError>;
}
