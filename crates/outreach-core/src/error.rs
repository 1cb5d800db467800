use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("client name is required")]
    EmptyClientName,
    #[error("outreach id cannot be empty")]
    EmptyId,
    #[error("invalid platform: {0}")]
    InvalidPlatform(String),
    #[error("invalid outreach type: {0}")]
    InvalidOutreachType(String),
    #[error("invalid status: {0}")]
    InvalidStatus(String),
    #[error("invalid week start: {0}")]
    InvalidWeekStart(String),
}

/// Failure categories surfaced to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    LoadFailure,
    PersistenceFailure,
    AuthFailure,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::LoadFailure => "load_failure",
            ErrorKind::PersistenceFailure => "persistence_failure",
            ErrorKind::AuthFailure => "auth_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
