use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::record::{archived_config_name, RunRecord};

/// Where notebooks keep their run log, relative to the notebook directory.
pub const DEFAULT_LOG_DIR: &str = "../log";

const RESULT_FILE: &str = "result.csv";
const CONFIG_ARCHIVE_DIR: &str = "config_files";

/// Appends finished runs to `<log_dir>/result.csv` and archives their config
/// under `<log_dir>/config_files/`.
#[derive(Clone, Debug)]
pub struct ResultRecorder {
    log_dir: PathBuf,
}

impl ResultRecorder {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
        }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    pub fn result_path(&self) -> PathBuf {
        self.log_dir.join(RESULT_FILE)
    }

    pub fn archive_dir(&self) -> PathBuf {
        self.log_dir.join(CONFIG_ARCHIVE_DIR)
    }

    pub fn archived_config_path(&self, execute_time: &str) -> PathBuf {
        self.archive_dir().join(archived_config_name(execute_time))
    }

    /// Creates the log and archive directories. `export` never does this on
    /// its own.
    pub fn ensure_layout(&self) -> io::Result<()> {
        fs::create_dir_all(self.archive_dir())
    }

    /// Archives the config, then appends the result line. Nothing is appended
    /// if the copy fails.
    pub fn export(&self, record: &RunRecord) -> io::Result<()> {
        let archived = self.archived_config_path(&record.execute_time);
        fs::copy(&record.config_file_path, &archived)?;
        log::debug!(
            "Archived {} to {}",
            record.config_file_path.display(),
            archived.display()
        );

        let result_path = self.result_path();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&result_path)?;

        let mut line = record.csv_line();
        line.push('\n');
        file.write_all(line.as_bytes())?;

        log::info!("Appended result to {}", result_path.display());
        Ok(())
    }
}

impl Default for ResultRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_DIR)
    }
}

/// Records a run in the default log directory.
pub fn export_result(
    model_name: &str,
    auc: f64,
    accuracy: f64,
    config_file_path: impl AsRef<Path>,
    execute_time: &str,
) -> io::Result<()> {
    let record = RunRecord::new(
        model_name,
        auc,
        accuracy,
        config_file_path.as_ref(),
        execute_time,
    );
    ResultRecorder::default().export(&record)
}
