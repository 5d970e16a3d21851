use std::path::{Path, PathBuf};

use eyre::{Context, Result};

use crate::{coincidence::CoincidenceRecord, Event};

pub fn load_events(filepath: &Path) -> Result<Vec<Event>> {
    let json = std::fs::read(filepath).wrap_err_with(|| format!("reading {filepath:?}"))?;
    serde_json::from_slice(&json).wrap_err_with(|| format!("decoding events from {filepath:?}"))
}

pub fn save_events(filepath: &Path, events: &[Event]) -> Result<()> {
    let json = serde_json::to_vec(events)?;
    std::fs::write(filepath, json).wrap_err_with(|| format!("writing {filepath:?}"))?;
    Ok(())
}

pub fn save_records(filepath: &Path, records: &[CoincidenceRecord]) -> Result<()> {
    std::fs::write(filepath, records_to_tsv(records))
        .wrap_err_with(|| format!("writing {filepath:?}"))?;
    Ok(())
}

pub fn records_to_tsv(records: &[CoincidenceRecord]) -> String {
    let mut table =
        "channel\tenergy_main\tcount_main\tenergy_coinc\tcount_coinc\ttime_diff\n".to_string();
    for record in records {
        table.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            record.channel,
            record.energy_main,
            record.count_main,
            record.energy_coinc,
            record.count_coinc,
            record.time_diff
        ));
    }
    table
}

/// Path for a derived output next to its input, e.g.
/// `events.json` -> `coinc_events.tsv`.
pub fn derived_path(filepath: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = filepath
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();
    filepath.with_file_name(format!("{prefix}{stem}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_path_prefixes_stem() {
        let path = derived_path(Path::new("/data/run_1/events.json"), "coinc_", "tsv");
        assert_eq!(path, PathBuf::from("/data/run_1/coinc_events.tsv"));
    }

    #[test]
    fn tsv_layout() {
        let records = [CoincidenceRecord {
            channel: 1,
            energy_main: 500,
            count_main: 2,
            energy_coinc: 480,
            count_coinc: 1,
            time_diff: -150,
        }];
        let tsv = records_to_tsv(&records);
        let mut lines = tsv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "channel\tenergy_main\tcount_main\tenergy_coinc\tcount_coinc\ttime_diff"
        );
        assert_eq!(lines.next().unwrap(), "1\t500\t2\t480\t1\t-150");
    }

    #[test]
    fn events_roundtrip() {
        let dir = std::env::temp_dir().join("coincidences-storage-test");
        std::fs::create_dir_all(&dir).unwrap();
        let filepath = dir.join("events.json");

        let events = vec![
            Event {
                time_stamp: 10,
                channel: 0,
                energy_ch: 100,
            },
            Event {
                time_stamp: 20,
                channel: 1,
                energy_ch: 200,
            },
        ];
        save_events(&filepath, &events).unwrap();
        assert_eq!(load_events(&filepath).unwrap(), events);
    }
}
