use eyre::ensure;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::Event;

// starting value of the running minimum delta
const DT_SENTINEL: i64 = 1_000_000_000_000_000_000;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CoincidenceParams {
    /// |dt| below which a match contributes to the partner's
    /// multiplicity (strict `<`), in timestamp units (ps).
    pub multiplicity_window: u64,
}

impl Default for CoincidenceParams {
    fn default() -> Self {
        Self {
            multiplicity_window: 20_000,
        }
    }
}

/// One matched event: its own channel/energy, the energy of the nearest
/// event in the other channel, multiplicity counts for both and the
/// signed time difference (main - partner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoincidenceRecord {
    pub channel: u16,
    pub energy_main: u16,
    pub count_main: u32,
    pub energy_coinc: u16,
    pub count_coinc: u32,
    pub time_diff: i64,
}

/// For each event of a time-sorted list, finds the closest event
/// (either in the past or in the future) in the other channel and
/// builds the coincidence records. Events with no differing-channel
/// neighbor in either direction produce no record.
///
/// The input must already be sorted by `time_stamp` ascending; unsorted
/// input is rejected instead of silently producing garbage.
pub fn compute_coincidences(
    events: &[Event],
    params: &CoincidenceParams,
) -> eyre::Result<Vec<CoincidenceRecord>> {
    ensure!(
        events
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.time_stamp <= b.time_stamp),
        "input events are not sorted by time_stamp (ascending)"
    );

    let mut ev_coinc: Vec<Option<usize>> = vec![None; events.len()];
    let mut n_coinc: Vec<u32> = vec![0; events.len()];
    let mut dt_coinc: Vec<i64> = vec![0; events.len()];

    for i in 0..events.len() {
        if let Some((index, dt_min)) = find_min_dt(i, events) {
            ev_coinc[i] = Some(index);
            if dt_min.unsigned_abs() < params.multiplicity_window {
                n_coinc[index] += 1;
            }
            dt_coinc[i] = dt_min;
        }
    }

    Ok(events
        .iter()
        .enumerate()
        .filter_map(|(i, event)| {
            ev_coinc[i].map(|partner| CoincidenceRecord {
                channel: event.channel,
                energy_main: event.energy_ch,
                count_main: n_coinc[i],
                energy_coinc: events[partner].energy_ch,
                count_coinc: n_coinc[partner],
                time_diff: dt_coinc[i],
            })
        })
        .collect())
}

/// Index of the closest differing-channel event around `i` and its
/// signed delta. Each direction skips same-channel events and stops at
/// the first channel mismatch. The backward candidate is compared
/// signed (`dt < dt_min`) while the forward one is compared by absolute
/// value: on ties the backward (earlier) partner wins. The asymmetry is
/// kept on purpose, see DESIGN.md.
fn find_min_dt(i: usize, events: &[Event]) -> Option<(usize, i64)> {
    let mut dt_min = DT_SENTINEL;
    let mut index = None;

    // check prior events
    for j in (0..i).rev() {
        if events[i].channel != events[j].channel {
            let dt = events[i].time_stamp.wrapping_sub(events[j].time_stamp) as i64;
            if dt < dt_min {
                dt_min = dt;
                index = Some(j);
            }
            break;
        }
    }

    // check future events
    for k in i + 1..events.len() {
        if events[i].channel != events[k].channel {
            let dt = events[i].time_stamp.wrapping_sub(events[k].time_stamp) as i64;
            if dt.abs() < dt_min {
                dt_min = dt;
                index = Some(k);
            }
            break;
        }
    }

    index.map(|index| (index, dt_min))
}
