pub mod backup;
pub mod db;
pub mod error;
pub mod migrate;
pub mod notify;
pub mod paths;
pub mod records;
pub mod slot;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;

pub use notify::{LogNotifier, MemoryNotifier, Notice, NoticeLevel, Notifier, SilentNotifier};
pub use records::{OutreachStore, Snapshot};
pub use slot::{DurableSlot, MemorySlot, SqliteSlot};

/// The database hosting the durable slots.
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = db::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = db::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        migrate::run_migrations(&self.conn)
    }

    pub fn schema_version(&self) -> Result<i64> {
        migrate::schema_version(&self.conn)
    }

    pub fn backup_to(&self, path: &Path) -> Result<u64> {
        backup::backup_to(&self.conn, path)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn slot(&self, key: &str) -> SqliteSlot<'_> {
        SqliteSlot::new(&self.conn, key)
    }

    /// Opens the outreach collection kept under `key`.
    pub fn outreaches(&self, key: &str, notifier: Box<dyn Notifier>) -> OutreachStore<SqliteSlot<'_>> {
        OutreachStore::open(self.slot(key), notifier)
    }
}
