//! # coincidence
//! Computes coincidence information for a single event file:
//! load -> time-sort -> nearest-neighbor matching -> tsv table
//! next to the input.

use std::path::PathBuf;

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

    /// Skip the time sort (input is already time-ordered)
    #[clap(long)]
    already_sorted: bool,

    /// Save the time-sorted event list next to the input
    #[clap(long)]
    save_sorted: bool,

    /// Multiplicity proximity window, ps
    #[clap(long, default_value_t = 20_000)]
    window: u64,

    #[clap(short, long)]
    verbose: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();

    let events = storage::load_events(&args.input)?;
    let events = if args.already_sorted {
        events
    } else {
        sort_by_timestamp(events)
    };
    if args.verbose {
        println!("obtained time-sorted events ({})", events.len());
    }

    if args.save_sorted {
        storage::save_events(&storage::derived_path(&args.input, "sorted_", "json"), &events)?;
    }

    let params = CoincidenceParams {
        multiplicity_window: args.window,
    };
    let records = compute_coincidences(&events, &params)?;
    if args.verbose {
        println!("computed coincidences info ({} records)", records.len());
    }

    storage::save_records(&storage::derived_path(&args.input, "coinc_", "tsv"), &records)?;

    Ok(())
}
