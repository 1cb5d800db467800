use crate::domain::OutreachRecord;
use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreState {
    pub records: Vec<OutreachRecord>,
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SetRecords(Vec<OutreachRecord>),
    Add(OutreachRecord),
    Update(OutreachRecord),
    SetError(ErrorKind),
}

/// Applies one action. Pure: no I/O, no clock.
pub fn reduce(state: StoreState, action: Action) -> StoreState {
    let StoreState {
        mut records,
        loading,
        error,
    } = state;

    match action {
        Action::SetRecords(loaded) => StoreState {
            records: loaded,
            loading: false,
            error,
        },
        Action::Add(record) => {
            records.push(record);
            StoreState {
                records,
                loading,
                error,
            }
        }
        Action::Update(record) => {
            if let Some(slot) = records.iter_mut().find(|existing| existing.id == record.id) {
                *slot = record;
            }
            StoreState {
                records,
                loading,
                error,
            }
        }
        Action::SetError(kind) => StoreState {
            records,
            loading: false,
            error: Some(kind),
        },
    }
}
