use serde::{Deserialize, Serialize};

use crate::Event;

/// Sort key selector, stands in for the branch-name argument of the
/// acquisition schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    TimeStamp,
    EnergyCh,
    Channel,
}

impl SortKey {
    fn get(&self, event: &Event) -> u64 {
        match self {
            SortKey::TimeStamp => event.time_stamp,
            SortKey::EnergyCh => event.energy_ch as u64,
            SortKey::Channel => event.channel as u64,
        }
    }
}

/// Stable sort of an event list by the selected key.
/// Events sharing a key keep their input order: downstream multiplicity
/// counting is index-sensitive.
pub fn sort_events(mut events: Vec<Event>, key: SortKey, descending: bool) -> Vec<Event> {
    if descending {
        events.sort_by(|a, b| key.get(b).cmp(&key.get(a)));
    } else {
        events.sort_by(|a, b| key.get(a).cmp(&key.get(b)));
    }
    events
}

pub fn sort_by_timestamp(events: Vec<Event>) -> Vec<Event> {
    sort_events(events, SortKey::TimeStamp, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(time_stamp: u64, channel: u16, energy_ch: u16) -> Event {
        Event {
            time_stamp,
            channel,
            energy_ch,
        }
    }

    #[test]
    fn sort_ascending() {
        let events = vec![ev(300, 0, 1), ev(100, 1, 2), ev(200, 0, 3)];
        let sorted = sort_by_timestamp(events);
        assert_eq!(
            sorted.iter().map(|e| e.time_stamp).collect::<Vec<_>>(),
            vec![100, 200, 300]
        );
    }

    #[test]
    fn sort_descending() {
        let events = vec![ev(300, 0, 1), ev(100, 1, 2), ev(200, 0, 3)];
        let sorted = sort_events(events, SortKey::TimeStamp, true);
        assert_eq!(
            sorted.iter().map(|e| e.time_stamp).collect::<Vec<_>>(),
            vec![300, 200, 100]
        );
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let events = vec![
            ev(100, 0, 1),
            ev(50, 1, 2),
            ev(50, 0, 3),
            ev(50, 1, 4),
            ev(10, 0, 5),
        ];
        let sorted = sort_by_timestamp(events);
        assert_eq!(
            sorted.iter().map(|e| e.energy_ch).collect::<Vec<_>>(),
            vec![5, 2, 3, 4, 1]
        );
    }

    #[test]
    fn sort_by_energy() {
        let events = vec![ev(1, 0, 30), ev(2, 0, 10), ev(3, 0, 20)];
        let sorted = sort_events(events, SortKey::EnergyCh, false);
        assert_eq!(
            sorted.iter().map(|e| e.energy_ch).collect::<Vec<_>>(),
            vec![10, 20, 30]
        );
    }
}
