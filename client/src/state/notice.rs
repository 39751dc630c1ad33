//! Transient toast notices ("signed in", "invalid credentials", ...).
//!
//! DESIGN
//! ======
//! Only the latest notice is shown. Each carries an id so an auto-dismiss
//! timer started for an older notice cannot close a newer one.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a notice stays visible.
pub const NOTICE_TIMEOUT_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    /// CSS modifier for the toast element.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "notice--info",
            Self::Success => "notice--success",
            Self::Warning => "notice--warning",
            Self::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Replace the visible notice, returning the new notice's id.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notice { id, message: message.into(), severity });
        id
    }

    /// Close notice `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}
