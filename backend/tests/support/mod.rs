#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use spacex_dash::db::Dataset;
use spacex_dash::models::{LaunchRecord, OutcomeClass};

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub const CSV_HEADER: &str =
    ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n";

/// The launch CSV shipped with the crate.
pub fn sample_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv")
}

pub fn record(site: &str, payload: f64, class: i64) -> LaunchRecord {
    LaunchRecord::new(site, payload, OutcomeClass::from_class(class).expect("0 or 1"))
}

/// (CCAFS LC-40, 500, 1), (CCAFS LC-40, 2000, 0), (KSC LC-39A, 3000, 1)
pub fn three_row_dataset() -> Dataset {
    Dataset::from_records(vec![
        record("CCAFS LC-40", 500.0, 1),
        record("CCAFS LC-40", 2000.0, 0),
        record("KSC LC-39A", 3000.0, 1),
    ])
}

/// Write `contents` to a temporary `.csv` file that lives as long as the handle.
pub fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("temp file");
    file.write_all(contents.as_bytes()).expect("write csv");
    file.flush().expect("flush csv");
    file
}

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}
