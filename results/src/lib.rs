mod execute_time;
pub mod record;
pub mod recorder;

pub use execute_time::{execute_time_now, EXECUTE_TIME_FORMAT};
pub use record::RunRecord;
pub use recorder::{export_result, ResultRecorder, DEFAULT_LOG_DIR};
