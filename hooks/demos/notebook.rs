//! Replays a scripted run the way a training notebook uses these crates:
//! validation losses go through a monitored session with early stopping, and
//! the final scores are recorded with the run's config file.
//!
//! cargo run -p hooks --example notebook -- --config config.ini \
//!     --losses 0.70,0.62,0.58,0.60,0.61 --auc 0.91 --accuracy 0.88

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;

use candle_core::{Device, Tensor};
use clap::Parser;
use hooks::{EarlyStoppingHook, LossCollection, MonitoredSession};
use log::LevelFilter;
use results::{execute_time_now, ResultRecorder, RunRecord, DEFAULT_LOG_DIR};
use simplelog::{Config, SimpleLogger, WriteLogger};

#[derive(Parser, Debug)]
#[command(name = "Notebook")]
#[command(author = "Jørgen Hanssen <jorgen@hanssen.io>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Config file used for this run. Archived next to the result log.
    #[arg(long)]
    config: PathBuf,

    /// Directory holding result.csv and config_files/.
    #[arg(long, default_value = DEFAULT_LOG_DIR)]
    log_dir: PathBuf,

    /// Name written to the result log.
    #[arg(long, default_value = "FM")]
    model_name: String,

    /// Validation loss reported after each step.
    #[arg(long, value_delimiter = ',', required = true)]
    losses: Vec<f32>,

    /// Steps without improvement before stopping.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    early_stopping_rounds: u64,

    #[arg(long, default_value_t = 0.5)]
    auc: f64,

    #[arg(long, default_value_t = 0.5)]
    accuracy: f64,

    /// Write logs to a file instead of stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    let mut session = MonitoredSession::new();
    session.add_hook(EarlyStoppingHook::new(args.early_stopping_rounds));

    for &val_loss in &args.losses {
        if session.should_stop() {
            break;
        }

        // The training loss slot is not tracked here; the hook watches slot 1.
        session.run(|_| {
            Ok(LossCollection::from(vec![
                Tensor::new(0f32, &Device::Cpu)?,
                Tensor::new(val_loss, &Device::Cpu)?,
            ]))
        })?;
    }
    log::info!("Ran {} of {} steps", session.steps(), args.losses.len());

    let recorder = ResultRecorder::new(&args.log_dir);
    recorder.ensure_layout()?;

    let record = RunRecord::new(
        args.model_name.as_str(),
        args.auc,
        args.accuracy,
        &args.config,
        execute_time_now(),
    );
    recorder.export(&record)?;

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();

    match &args.log_file {
        Some(log_file) => {
            WriteLogger::init(LevelFilter::Info, Config::default(), File::create(log_file)?)?
        }
        None => SimpleLogger::init(LevelFilter::Info, Config::default())?,
    }

    Ok(args)
}
