use crate::domain::{OutreachRecord, OutreachStatus, Platform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry<T> {
    pub name: T,
    pub value: usize,
}

/// Counts per status, listing only statuses present, in order of first
/// appearance.
pub fn status_counts(records: &[OutreachRecord]) -> Vec<CountEntry<OutreachStatus>> {
    count_by(records, |record| record.status)
}

pub fn platform_counts(records: &[OutreachRecord]) -> Vec<CountEntry<Platform>> {
    count_by(records, |record| record.platform)
}

fn count_by<T, F>(records: &[OutreachRecord], key: F) -> Vec<CountEntry<T>>
where
    T: PartialEq + Copy,
    F: Fn(&OutreachRecord) -> T,
{
    let mut entries: Vec<CountEntry<T>> = Vec::new();
    for record in records {
        let name = key(record);
        match entries.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.value += 1,
            None => entries.push(CountEntry { name, value: 1 }),
        }
    }
    entries
}
