mod parser;
mod query;

use thiserror::Error;

pub use parser::parse_filter;
pub use query::{matches_search, OutreachFilter};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("invalid platform selector: {0}")]
    InvalidPlatform(String),
    #[error("invalid status selector: {0}")]
    InvalidStatus(String),
    #[error("platform selector given more than once")]
    DuplicatePlatform,
    #[error("status selector given more than once")]
    DuplicateStatus,
}
