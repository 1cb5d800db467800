use crate::error::{Result, StoreError};
use crate::notify::{Notice, Notifier};
use crate::slot::DurableSlot;
use chrono::{DateTime, Utc};
use outreach_core::{
    reduce, Action, ErrorKind, OutreachId, OutreachNew, OutreachRecord, StoreState,
};
use tracing::{debug, warn};

/// Read-only view of the store state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub records: &'a [OutreachRecord],
    pub loading: bool,
    pub error: Option<ErrorKind>,
}

/// Owns the outreach collection. Every accepted `add`/`update` rewrites the
/// full collection to the slot before returning.
pub struct OutreachStore<S: DurableSlot> {
    slot: S,
    state: StoreState,
    notifier: Box<dyn Notifier>,
}

impl<S: DurableSlot> OutreachStore<S> {
    pub fn new(slot: S, notifier: Box<dyn Notifier>) -> Self {
        Self {
            slot,
            state: StoreState::default(),
            notifier,
        }
    }

    pub fn open(slot: S, notifier: Box<dyn Notifier>) -> Self {
        let mut store = Self::new(slot, notifier);
        store.load();
        store
    }

    /// Reads the slot once. An unreadable slot leaves the collection empty,
    /// records `LoadFailure` and sends an error notice; it never fails the
    /// caller.
    pub fn load(&mut self) {
        if !self.state.loading {
            return;
        }

        match self.read_records() {
            Ok(records) => {
                debug!(count = records.len(), "outreaches loaded");
                self.dispatch(Action::SetRecords(records));
            }
            Err(err) => {
                warn!(error = %err, "failed to load outreaches");
                self.dispatch(Action::SetError(ErrorKind::LoadFailure));
                self.notifier.notify(&Notice::error(
                    "Failed to load outreaches",
                    Some(ErrorKind::LoadFailure),
                ));
            }
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            records: &self.state.records,
            loading: self.state.loading,
            error: self.state.error,
        }
    }

    pub fn get(&self, id: &OutreachId) -> Option<&OutreachRecord> {
        self.state.records.iter().find(|record| &record.id == id)
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn add(&mut self, now: DateTime<Utc>, input: OutreachNew) -> Result<OutreachRecord> {
        match self.add_inner(now, input) {
            Ok(record) => {
                self.notifier
                    .notify(&Notice::success("Outreach added successfully"));
                Ok(record)
            }
            Err(err) => {
                self.report_failure("Failed to add outreach", &err);
                Err(err)
            }
        }
    }

    /// Replaces the record with the same id, keeping its position and its
    /// original `created_at`. An id with no match leaves the collection as is.
    pub fn update(&mut self, record: OutreachRecord) -> Result<()> {
        match self.update_inner(record) {
            Ok(()) => {
                self.notifier
                    .notify(&Notice::success("Outreach updated successfully"));
                Ok(())
            }
            Err(err) => {
                self.report_failure("Failed to update outreach", &err);
                Err(err)
            }
        }
    }

    fn add_inner(&mut self, now: DateTime<Utc>, input: OutreachNew) -> Result<OutreachRecord> {
        self.ensure_loaded()?;
        input.validate()?;
        let record = input.into_record(self.unique_id(), now);
        self.dispatch(Action::Add(record.clone()));
        self.persist()?;
        debug!(id = %record.id, "outreach added");
        Ok(record)
    }

    fn update_inner(&mut self, record: OutreachRecord) -> Result<()> {
        self.ensure_loaded()?;
        let mut record = record.normalized();
        record.validate()?;
        match self.get(&record.id) {
            Some(existing) => record.created_at = existing.created_at,
            None => debug!(id = %record.id, "update for unknown outreach id ignored"),
        }
        self.dispatch(Action::Update(record));
        self.persist()
    }

    fn ensure_loaded(&self) -> Result<()> {
        if self.state.loading {
            return Err(StoreError::Loading);
        }
        Ok(())
    }

    fn unique_id(&self) -> OutreachId {
        loop {
            let id = OutreachId::generate();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn read_records(&self) -> Result<Vec<OutreachRecord>> {
        match self.slot.read()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }

    fn persist(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.state.records).map_err(StoreError::from);
        payload
            .and_then(|payload| self.slot.write(&payload))
            .map_err(StoreError::persistence)
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
    }

    fn report_failure(&self, description: &str, err: &StoreError) {
        warn!(error = %err, "{description}");
        self.notifier
            .notify(&Notice::error(description, err.error_kind()));
    }
}
