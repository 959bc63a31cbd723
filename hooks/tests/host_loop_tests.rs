use std::fs;

use candle_core::{Device, Tensor};
use hooks::{EarlyStoppingHook, LossCollection, MonitoredSession};
use results::{ResultRecorder, RunRecord};

fn epoch_losses(train: f32, val: f32) -> candle_core::Result<LossCollection> {
    Ok(LossCollection::from(vec![
        Tensor::new(train, &Device::Cpu)?,
        Tensor::new(val, &Device::Cpu)?,
    ]))
}

/// Drives the session the way a notebook loop does and returns the number of
/// epochs that ran before the session stopped.
fn run_epochs(session: &mut MonitoredSession, schedule: &[(f32, f32)]) -> u64 {
    for &(train, val) in schedule {
        if session.should_stop() {
            break;
        }
        session.run(|_| epoch_losses(train, val)).unwrap();
    }
    session.steps()
}

#[test]
fn test_loop_stops_on_validation_plateau_and_records_run() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = ResultRecorder::new(dir.path().join("log"));
    recorder.ensure_layout().unwrap();

    let config = dir.path().join("config.ini");
    fs::write(&config, "[train]\nearly_stopping_rounds = 2\n").unwrap();

    let mut session = MonitoredSession::new();
    session.add_hook(EarlyStoppingHook::new(2));

    let schedule = [
        (0.90, 0.80),
        (0.70, 0.60),
        (0.50, 0.65),
        (0.40, 0.55),
        (0.30, 0.58),
        (0.20, 0.59),
        (0.10, 0.40),
    ];
    let epochs = run_epochs(&mut session, &schedule);

    // 0.55 resets the counter; 0.58 and 0.59 exhaust it.
    assert_eq!(epochs, 6);
    assert!(session.should_stop());

    let record = RunRecord::new("NeuralFM", 0.83, 0.79, &config, "20240101_1200");
    recorder.export(&record).unwrap();

    assert_eq!(
        fs::read_to_string(recorder.result_path()).unwrap(),
        "NeuralFM,0.83,0.79,20240101_1200\n"
    );
    assert_eq!(
        fs::read(recorder.archived_config_path("20240101_1200")).unwrap(),
        fs::read(&config).unwrap()
    );
}

#[test]
fn test_loop_runs_to_completion_while_improving() {
    let mut session = MonitoredSession::new();
    session.add_hook(EarlyStoppingHook::default());

    let schedule: Vec<(f32, f32)> = (1..=8).map(|i| (1.0 / i as f32, 2.0 / i as f32)).collect();

    assert_eq!(run_epochs(&mut session, &schedule), 8);
    assert!(!session.should_stop());
}
