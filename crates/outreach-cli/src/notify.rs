use outreach_config::{AppConfig, NotificationBackend};
use outreach_store::{LogNotifier, Notice, Notifier, SilentNotifier};

/// Prints each notice as a single `Title: description` line on stderr, so
/// stdout stays clean for `--json` output.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        eprintln!("{}: {}", notice.title, notice.description);
    }
}

pub fn notifier_for(config: &AppConfig) -> Box<dyn Notifier> {
    if !config.notifications.enabled {
        return Box::new(SilentNotifier);
    }
    match config.notifications.backend {
        NotificationBackend::Stderr => Box::new(TerminalNotifier),
        NotificationBackend::Log => Box::new(LogNotifier),
    }
}
