//! Notification center model: the user's server-side notifications, the
//! unread badge count, and arrival detection between polls.
//!
//! DESIGN
//! ======
//! The list is replaced wholesale on every poll. A notification counts as
//! newly arrived when it is unread and its id was not in the previous list,
//! which is what drives the "new notification" toast.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::{Notification, NotificationLevel};
use crate::state::notice::Severity;

/// Delay between two notification polls.
pub const POLL_INTERVAL_MS: u32 = 120_000;

#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    pub items: Vec<Notification>,
    pub open: bool,
    pub loading: bool,
}

impl NotificationCenter {
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read).count()
    }

    /// Swap in a freshly fetched list. Returns how many unread notifications
    /// were not present before.
    pub fn replace(&mut self, fresh: Vec<Notification>) -> usize {
        let arrived = fresh
            .iter()
            .filter(|n| !n.is_read && !self.items.iter().any(|known| known.id == n.id))
            .count();
        self.items = fresh;
        self.loading = false;
        arrived
    }

    pub fn mark_read(&mut self, id: u64) {
        if let Some(n) = self.items.iter_mut().find(|n| n.id == id) {
            n.is_read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.is_read = true;
        }
    }

    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }
}

/// Toast severity for a notification level.
#[must_use]
pub fn severity(level: NotificationLevel) -> Severity {
    match level {
        NotificationLevel::Success => Severity::Success,
        NotificationLevel::Warning => Severity::Warning,
        NotificationLevel::Error => Severity::Error,
        NotificationLevel::Info | NotificationLevel::Other => Severity::Info,
    }
}

/// Page a notification about `entity_type` leads to, if any.
#[must_use]
pub fn entity_path(entity_type: Option<&str>) -> Option<&'static str> {
    match entity_type?.to_ascii_uppercase().as_str() {
        "CASE" => Some("/cases"),
        "DOCUMENT" => Some("/documents"),
        "DEADLINE" => Some("/agenda"),
        "CLIENT" => Some("/clients"),
        _ => None,
    }
}

/// Short age label for something created `elapsed_secs` ago. `None` past one
/// day, where callers show the date itself.
#[must_use]
pub fn age_label(elapsed_secs: i64) -> Option<String> {
    let minutes = elapsed_secs.max(0) / 60;
    match minutes {
        0 => Some("just now".to_owned()),
        1..=59 => Some(format!("{minutes} min ago")),
        60..=1439 => Some(format!("{} h ago", minutes / 60)),
        _ => None,
    }
}

/// Display form of `created_at`: an age label when the browser can parse the
/// timestamp, otherwise its date part.
#[must_use]
pub fn created_label(created_at: Option<&str>) -> String {
    let Some(raw) = created_at else {
        return String::new();
    };
    #[cfg(feature = "hydrate")]
    {
        let millis = js_sys::Date::parse(raw);
        if millis.is_finite() {
            #[allow(clippy::cast_possible_truncation)]
            let created = (millis / 1000.0) as i64;
            if let Some(label) = age_label(crate::session::claims::now_epoch_secs() - created) {
                return label;
            }
        }
    }
    raw.split('T').next().unwrap_or(raw).to_owned()
}
