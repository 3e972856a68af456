//! JSON output formatting

use std::io;

use serde::Serialize;

use crate::scan::{ScanReport, TimedScan};

/// JSON shape for one timed scan.
#[derive(Serialize)]
struct JsonRun {
    strategy: String,
    elapsed_ms: u64,
    #[serde(flatten)]
    report: ScanReport,
}

/// Print all scan runs as a pretty-printed JSON array to stdout.
pub fn print_json(runs: &[TimedScan]) -> io::Result<()> {
    let rows: Vec<JsonRun> = runs
        .iter()
        .map(|run| JsonRun {
            strategy: run.strategy.to_string(),
            elapsed_ms: run.elapsed.as_millis() as u64,
            report: run.report,
        })
        .collect();

    let json =
        serde_json::to_string_pretty(&rows).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Strategy;
    use std::time::Duration;

    #[test]
    fn test_json_run_shape() {
        let run = JsonRun {
            strategy: Strategy::Parallel.to_string(),
            elapsed_ms: 42,
            report: ScanReport {
                total_bytes: 175,
                image_bytes: 50,
                file_count: 3,
                folder_count: 1,
                image_count: 1,
                skipped: 0,
            },
        };
        let value = serde_json::to_value(&run).unwrap();
        assert_eq!(value["strategy"], "parallel");
        assert_eq!(value["elapsed_ms"], 42);
        // Report fields are flattened to the top level
        assert_eq!(value["total_bytes"], 175);
        assert_eq!(value["image_count"], 1);
    }

    #[test]
    fn test_elapsed_is_millis() {
        let elapsed = Duration::from_micros(1500);
        assert_eq!(elapsed.as_millis() as u64, 1);
    }
}
