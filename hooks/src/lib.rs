pub mod collection;
pub mod context;
pub mod early_stopping;
mod error;
pub mod hook;
pub mod session;

pub use collection::LossCollection;
pub use context::{MetricRequest, RunContext, SessionRunArgs, SessionRunValues};
pub use early_stopping::{EarlyStopping, EarlyStoppingHook, Observation};
pub use error::HookError;
pub use hook::SessionRunHook;
pub use session::MonitoredSession;
