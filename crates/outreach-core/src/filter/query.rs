use crate::domain::{OutreachRecord, OutreachStatus, Platform};

/// Search text AND platform AND status. `None` selectors match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutreachFilter {
    pub search: Option<String>,
    pub platform: Option<Platform>,
    pub status: Option<OutreachStatus>,
}

impl OutreachFilter {
    pub fn matches(&self, record: &OutreachRecord) -> bool {
        if let Some(platform) = self.platform {
            if record.platform != platform {
                return false;
            }
        }
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        match self.search.as_deref() {
            Some(query) => matches_search(record, query),
            None => true,
        }
    }

    /// Matching records, newest first.
    pub fn apply<'a>(&self, records: &'a [OutreachRecord]) -> Vec<&'a OutreachRecord> {
        let mut matched: Vec<&OutreachRecord> =
            records.iter().filter(|record| self.matches(record)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}

/// Case-insensitive substring match against the client name or notes.
pub fn matches_search(record: &OutreachRecord, query: &str) -> bool {
    let needle = query.to_lowercase();
    if record.client_name.to_lowercase().contains(&needle) {
        return true;
    }
    record
        .notes
        .as_deref()
        .map(|notes| notes.to_lowercase().contains(&needle))
        .unwrap_or(false)
}
