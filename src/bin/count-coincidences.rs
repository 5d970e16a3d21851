//! # count-coincidences
//! Prints per-channel counts of coincidence events passing a
//! |time_diff| cut.

use std::{collections::BTreeMap, path::PathBuf};

use clap::Parser;

use coincidences::{
    coincidence::{compute_coincidences, CoincidenceParams},
    sort::sort_by_timestamp,
    storage,
};

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the event list in json format
    input: PathBuf,

    /// |time_diff| cut below which two events count as coincident, ps
    #[clap(long, default_value_t = 16_000)]
    time_diff: u64,

    /// Multiplicity proximity window, ps
    #[clap(long, default_value_t = 20_000)]
    window: u64,

    /// Skip the time sort (input is already time-ordered)
    #[clap(long)]
    already_sorted: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let events = storage::load_events(&args.input)?;
    let events = if args.already_sorted {
        events
    } else {
        sort_by_timestamp(events)
    };

    let params = CoincidenceParams {
        multiplicity_window: args.window,
    };
    let records = compute_coincidences(&events, &params)?;

    let mut counts: BTreeMap<u16, u64> = BTreeMap::new();
    for record in &records {
        if record.time_diff.unsigned_abs() < args.time_diff {
            *counts.entry(record.channel).or_default() += 1;
        }
    }

    println!("coincident events (|time_diff| < {})", args.time_diff);
    println!("channel\tcounts");
    for (channel, counts) in &counts {
        println!("{channel}\t{counts}");
    }

    Ok(())
}
