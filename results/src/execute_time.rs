use chrono::Local;

/// Layout of run keys, e.g. `20240101_120000`.
pub const EXECUTE_TIME_FORMAT: &str = "%Y%m%d_%H%M%S";

pub fn execute_time_now() -> String {
    Local::now().format(EXECUTE_TIME_FORMAT).to_string()
}
