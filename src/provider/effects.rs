//! Side effects the provider triggers: notifications and navigation

use log::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Default,
    Destructive,
}

/// A toast shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Default,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Destructive,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Receives user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Performs route changes
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: &str);
}

/// Writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Default => info!("{}: {}", notification.title, notification.description),
            NotificationKind::Destructive => warn!("{}: {}", notification.title, notification.description),
        }
    }
}

/// Writes route changes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!("Navigating to {}", route);
    }
}
