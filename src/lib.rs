use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod coincidence;
pub mod sort;
pub mod storage;

/// Single detector hit: readout timestamp (ps), measurement channel
/// and uncalibrated energy. Field names follow the acquisition schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub time_stamp: u64,
    pub channel: u16,
    pub energy_ch: u16,
}

pub fn get_files_by_pattern(db_root: &str, pattern: &str, exclude: &[String]) -> Vec<PathBuf> {
    let mut files = vec![];

    let paths = glob::glob(&format!("{db_root}/{pattern}")).unwrap();

    paths.for_each(|path| {
        if let Ok(filepath) = path {
            let path_str: String = filepath.to_str().unwrap().to_string();
            if exclude.iter().any(|ex| path_str.contains(ex)) {
                return;
            }
            files.push(filepath);
        }
    });

    files
}
