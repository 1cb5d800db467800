pub mod analytics;
pub mod domain;
pub mod dto;
pub mod error;
pub mod export;
pub mod filter;
pub mod state;
pub mod time;

pub use analytics::*;
pub use domain::*;
pub use dto::*;
pub use error::{CoreError, ErrorKind};
pub use filter::{parse_filter, FilterParseError, OutreachFilter};
pub use state::{reduce, Action, StoreState};
