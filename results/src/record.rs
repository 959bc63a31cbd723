use std::path::PathBuf;

/// Summary of one finished training run.
///
/// Fields are written to the result log unescaped, so `model_name` and
/// `execute_time` must not contain commas or newlines.
#[derive(Clone, Debug, PartialEq)]
pub struct RunRecord {
    pub model_name: String,
    pub auc: f64,
    pub accuracy: f64,
    pub config_file_path: PathBuf,
    pub execute_time: String,
}

impl RunRecord {
    pub fn new(
        model_name: impl Into<String>,
        auc: f64,
        accuracy: f64,
        config_file_path: impl Into<PathBuf>,
        execute_time: impl Into<String>,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            auc,
            accuracy,
            config_file_path: config_file_path.into(),
            execute_time: execute_time.into(),
        }
    }

    /// `model_name,auc,accuracy,execute_time`, without the line terminator.
    pub fn csv_line(&self) -> String {
        format!(
            "{},{},{},{}",
            self.model_name,
            format_score(self.auc),
            format_score(self.accuracy),
            self.execute_time
        )
    }

    pub fn archived_config_name(&self) -> String {
        archived_config_name(&self.execute_time)
    }
}

pub(crate) fn archived_config_name(execute_time: &str) -> String {
    format!("{}_config.ini", execute_time)
}

// Shortest round-trip form, keeping ".0" on integral values. Exponents carry
// no sign padding (`1e-5`, `1e20`) and non-finite values are `NaN`, `inf`,
// `-inf`, unlike the `1e-05` / `nan` spelling some older logs used.
fn format_score(score: f64) -> String {
    format!("{:?}", score)
}
