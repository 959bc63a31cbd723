use crate::{HookError, LossCollection, RunContext, SessionRunHook, SessionRunValues};

/// Runs training steps one at a time and drives every registered hook.
///
/// For each step: all `before_run` calls, then the step itself, then the
/// requested losses are resolved and every `after_run` is called in
/// registration order. Any hook or lookup failure aborts the step and is
/// returned to the caller untouched.
#[derive(Default)]
pub struct MonitoredSession {
    hooks: Vec<Box<dyn SessionRunHook>>,
    context: RunContext,
}

impl MonitoredSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_hook<H>(&mut self, hook: H)
    where
        H: SessionRunHook + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    pub fn should_stop(&self) -> bool {
        self.context.stop_requested()
    }

    pub fn request_stop(&mut self) {
        self.context.request_stop();
    }

    /// Number of steps completed so far.
    pub fn steps(&self) -> u64 {
        self.context.step()
    }

    pub fn run<F>(&mut self, step: F) -> Result<LossCollection, HookError>
    where
        F: FnOnce(u64) -> candle_core::Result<LossCollection>,
    {
        let mut requests = Vec::with_capacity(self.hooks.len());
        for hook in self.hooks.iter_mut() {
            requests.push(hook.before_run(&self.context)?);
        }

        let losses = step(self.context.step())?;

        for (hook, request) in self.hooks.iter_mut().zip(requests) {
            let results = match request {
                Some(args) => Some(args.fetches.resolve(&losses)?),
                None => None,
            };
            hook.after_run(&mut self.context, &SessionRunValues { results })?;
        }

        self.context.advance();
        Ok(losses)
    }
}
