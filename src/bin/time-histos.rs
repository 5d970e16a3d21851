//! # time-histos
//! Prints the binned time_diff distribution for one channel as a tsv
//! table (bin center, counts).

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

    /// Channel to analyse
    channel: u16,

    #[clap(long, default_value_t = 100)]
    bins: usize,

    /// Left edge of the time_diff range, ps
    #[clap(long, default_value_t = -100_000.0, allow_hyphen_values = true)]
    min: f64,

    /// Right edge of the time_diff range, ps
    #[clap(long, default_value_t = 100_000.0, allow_hyphen_values = true)]
    max: f64,

    /// Multiplicity proximity window, ps
    #[clap(long, default_value_t = 20_000)]
    window: u64,

    /// Skip the time sort (input is already time-ordered)
    #[clap(long)]
    already_sorted: bool,
}

fn main() -> eyre::Result<()> {
    let args = Args::parse();
    eyre::ensure!(args.bins != 0, "bin number must be positive");
    eyre::ensure!(args.min < args.max, "empty time_diff range");

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

    let bin_width = (args.max - args.min) / args.bins as f64;
    let mut counts = vec![0u64; args.bins];

    for record in &records {
        if record.channel != args.channel {
            continue;
        }
        let x = record.time_diff as f64;
        if x < args.min || x >= args.max {
            continue;
        }
        let bin = ((x - args.min) / bin_width) as usize;
        counts[bin.min(args.bins - 1)] += 1;
    }

    println!("time_diff\tcounts");
    for (idx, counts) in counts.iter().enumerate() {
        let center = args.min + (idx as f64 + 0.5) * bin_width;
        println!("{center}\t{counts}");
    }

    Ok(())
}
