pub mod ids;
pub mod kinds;
pub mod record;

pub use ids::OutreachId;
pub use kinds::{normalize_label, OutreachStatus, OutreachType, Platform};
pub use record::{normalize_optional_text, OutreachNew, OutreachRecord};
