use log::info;

use crate::{
    HookError, MetricRequest, RunContext, SessionRunArgs, SessionRunHook, SessionRunValues,
};

/// Outcome of feeding one loss into [`EarlyStopping`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Observation {
    /// First loss of the run; becomes the best loss.
    Seeded,
    /// Lower than or equal to the best loss; the counter was reset.
    Improved,
    /// Strictly worse than the best loss.
    Worse { counter: u64 },
    /// Strictly worse, and the counter just reached the threshold.
    Exhausted { counter: u64 },
}

/// Counts consecutive rounds in which the loss got strictly worse than the
/// best seen so far. Lower is better; ties count as improvement.
#[derive(Clone, Debug)]
pub struct EarlyStopping {
    best_loss: Option<f32>,
    counter: u64,
    threshold: u64,
}

impl EarlyStopping {
    /// Panics if `threshold` is zero; such a monitor could never stop.
    pub fn new(threshold: u64) -> Self {
        assert!(threshold > 0, "early stopping threshold must be positive");
        Self {
            best_loss: None,
            counter: 0,
            threshold,
        }
    }

    pub fn observe(&mut self, last_loss: f32) -> Observation {
        let Some(best_loss) = self.best_loss else {
            self.best_loss = Some(last_loss);
            return Observation::Seeded;
        };

        if last_loss > best_loss {
            self.counter += 1;
            if self.counter == self.threshold {
                Observation::Exhausted {
                    counter: self.counter,
                }
            } else {
                Observation::Worse {
                    counter: self.counter,
                }
            }
        } else {
            self.best_loss = Some(last_loss);
            self.counter = 0;
            Observation::Improved
        }
    }

    pub fn best_loss(&self) -> Option<f32> {
        self.best_loss
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }
}

impl Default for EarlyStopping {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Requests a stop once the monitored loss has failed to improve for
/// `early_stopping_rounds` consecutive steps.
pub struct EarlyStoppingHook {
    state: EarlyStopping,
    request: MetricRequest,
}

impl EarlyStoppingHook {
    pub fn new(early_stopping_rounds: u64) -> Self {
        Self::with_request(early_stopping_rounds, MetricRequest::default())
    }

    pub fn with_request(early_stopping_rounds: u64, request: MetricRequest) -> Self {
        info!("Early Stopping Hook: Created");
        info!(
            "Early Stopping Hook: Early Stopping Rounds: {}",
            early_stopping_rounds
        );

        Self {
            state: EarlyStopping::new(early_stopping_rounds),
            request,
        }
    }

    pub fn state(&self) -> &EarlyStopping {
        &self.state
    }
}

impl Default for EarlyStoppingHook {
    fn default() -> Self {
        Self::new(1)
    }
}

impl SessionRunHook for EarlyStoppingHook {
    fn before_run(
        &mut self,
        _run_context: &RunContext,
    ) -> Result<Option<SessionRunArgs>, HookError> {
        Ok(Some(SessionRunArgs::new(self.request)))
    }

    fn after_run(
        &mut self,
        run_context: &mut RunContext,
        run_values: &SessionRunValues,
    ) -> Result<(), HookError> {
        let last_loss = run_values.results.ok_or(HookError::MissingValue {
            index: self.request.index(),
        })?;

        match self.state.observe(last_loss) {
            Observation::Seeded | Observation::Improved => {}
            Observation::Worse { counter } => {
                info!("Early Stopping Hook: No improvement! Counter: {}", counter);
            }
            Observation::Exhausted { counter } => {
                info!("Early Stopping Hook: No improvement! Counter: {}", counter);

                run_context.request_stop();
                info!(
                    "Early Stopping Hook: Stop Requested: {}",
                    run_context.stop_requested()
                );
            }
        }

        info!("************************");
        Ok(())
    }
}
