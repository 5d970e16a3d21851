//! # batch-coincidence
//! Runs the coincidence pipeline over every event file matching a glob
//! pattern, one task per file. Job parameters come from a yaml config.

use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use indicatif::ProgressStyle;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use coincidences::{
    coincidence::{compute_coincidences, CoincidenceParams},
    get_files_by_pattern,
    sort::sort_by_timestamp,
    storage,
};

#[cfg(target_family = "unix")]
use tikv_jemallocator::Jemalloc;

#[cfg(target_family = "unix")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Opts {
    db_root: PathBuf,
    pattern: String,
    exclude: Option<Vec<String>>,
    #[serde(default)]
    already_sorted: bool,
    #[serde(default)]
    params: CoincidenceParams,
}

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Arg {
    /// Path to the config file in yaml format
    pub config_file: PathBuf,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = Arg::parse();
    let opts: Opts = serde_yaml::from_reader(std::fs::File::open(&args.config_file)?)?;

    let exclude = opts.exclude.clone().unwrap_or_default();
    let files = get_files_by_pattern(
        opts.db_root.to_str().unwrap(),
        &opts.pattern,
        &exclude,
    );

    let pb = indicatif::ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("[{elapsed_precise}] {bar} {pos:>7}/{len:7} {msg}").unwrap(),
    );
    let pb: Arc<Mutex<indicatif::ProgressBar>> = Arc::new(Mutex::new(pb));

    let handles = files
        .into_iter()
        .map(|filepath| {
            let pb = Arc::clone(&pb);
            let already_sorted = opts.already_sorted;
            let params = opts.params;

            tokio::spawn(async move {
                let events = storage::load_events(&filepath)?;
                let events = if already_sorted {
                    events
                } else {
                    sort_by_timestamp(events)
                };

                let records = compute_coincidences(&events, &params)?;
                storage::save_records(&storage::derived_path(&filepath, "coinc_", "tsv"), &records)?;

                pb.lock().await.inc(1);
                Ok::<(), eyre::Report>(())
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.await??;
    }

    pb.lock().await.finish();

    Ok(())
}
