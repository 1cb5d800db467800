use crate::error::{Result, StoreError};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;

/// A single named location holding the serialized record collection.
///
/// `write` replaces the whole value; implementations must never leave a
/// partially written value behind.
pub trait DurableSlot {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, value: &str) -> Result<()>;
}

/// Slot backed by one row of the `slots` table.
pub struct SqliteSlot<'a> {
    conn: &'a Connection,
    key: String,
}

impl<'a> SqliteSlot<'a> {
    pub fn new(conn: &'a Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl DurableSlot for SqliteSlot<'_> {
    fn read(&self) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [&self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at;",
            params![self.key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default)]
struct MemorySlotState {
    value: Option<String>,
    writes: usize,
    fail_writes: bool,
}

/// In-memory slot. Clones share the same value, so a test can keep a handle
/// while the store owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    state: Rc<RefCell<MemorySlotState>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        let slot = Self::default();
        slot.state.borrow_mut().value = Some(value.into());
        slot
    }

    pub fn value(&self) -> Option<String> {
        self.state.borrow().value.clone()
    }

    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Makes every following write fail until switched off again.
    pub fn set_fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }
}

impl DurableSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.state.borrow().value.clone())
    }

    fn write(&self, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(StoreError::Io(io::Error::other("simulated write failure")));
        }
        state.value = Some(value.to_string());
        state.writes += 1;
        Ok(())
    }
}
