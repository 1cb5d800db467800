use outreach_core::{CoreError, ErrorKind};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("sqlite error: {0}")]
    Sql(#[from] rusqlite::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("failed to persist outreaches: {source}")]
    Persistence {
        #[source]
        source: Box<StoreError>,
    },
    #[error("outreaches are still loading")]
    Loading,
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("migration error: {0}")]
    Migration(String),
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("invalid backup path (matches database): {0}")]
    InvalidBackupPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Sql,
    Json,
    Core,
    Persistence,
    Loading,
    MissingHomeDir,
    Migration,
    InvalidDataPath,
    InvalidBackupPath,
}

impl StoreError {
    pub fn persistence(source: StoreError) -> Self {
        StoreError::Persistence {
            source: Box::new(source),
        }
    }

    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Sql(_) => StoreErrorKind::Sql,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::Persistence { .. } => StoreErrorKind::Persistence,
            StoreError::Loading => StoreErrorKind::Loading,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::Migration(_) => StoreErrorKind::Migration,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::InvalidBackupPath(_) => StoreErrorKind::InvalidBackupPath,
        }
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            StoreError::Persistence { .. } => Some(ErrorKind::PersistenceFailure),
            _ => None,
        }
    }
}
