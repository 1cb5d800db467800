use outreach_core::ErrorKind;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A short, transient message naming the action that succeeded or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
    pub kind: Option<ErrorKind>,
}

impl Notice {
    pub fn success(description: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            title: "Success".to_string(),
            description: description.into(),
            kind: None,
        }
    }

    pub fn error(description: impl Into<String>, kind: Option<ErrorKind>) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "Error".to_string(),
            description: description.into(),
            kind,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => info!(description = %notice.description, "{}", notice.title),
            NoticeLevel::Error => warn!(
                description = %notice.description,
                kind = ?notice.kind,
                "{}",
                notice.title
            ),
        }
    }
}

/// Discards every notice.
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _notice: &Notice) {}
}

/// Collects notices in memory; clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    notices: Rc<RefCell<Vec<Notice>>>,
}

impl MemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }

    pub fn errors(&self) -> Vec<Notice> {
        self.notices
            .borrow()
            .iter()
            .filter(|notice| notice.level == NoticeLevel::Error)
            .cloned()
            .collect()
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}
