//! # sort-events
//! Stable-sorts an event file by the selected key and saves the result
//! as `sorted_<name>.json` next to the input.

use std::path::PathBuf;

use clap::Parser;
use eyre::bail;

use coincidences::{
    sort::{sort_events, SortKey},
    storage,
};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the event list in json format
    input: PathBuf,

    /// Key to order by: time_stamp, energy_ch or channel
    #[clap(long, default_value = "time_stamp")]
    key: String,

    /// Sort in descending order
    #[clap(long)]
    descending: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let key = match args.key.as_str() {
        "time_stamp" => SortKey::TimeStamp,
        "energy_ch" => SortKey::EnergyCh,
        "channel" => SortKey::Channel,
        other => bail!("unknown sort key: {other}"),
    };

    let events = storage::load_events(&args.input)?;
    let sorted = sort_events(events, key, args.descending);

    let out = storage::derived_path(&args.input, "sorted_", "json");
    storage::save_events(&out, &sorted)?;
    println!("saved {} events to {}", sorted.len(), out.display());

    Ok(())
}
