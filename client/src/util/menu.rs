//! Navigation drawer entries and role-based visibility.
//!
//! The filter only decides which links render. Every route stays reachable
//! by URL; the API enforces access.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::session::Role;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
    /// Shown to `ADMIN` only.
    pub admin_only: bool,
    /// Hidden from `CLIENT`.
    pub exclude_client: bool,
}

const fn item(label: &'static str, path: &'static str, icon: &'static str) -> MenuItem {
    MenuItem { label, path, icon, admin_only: false, exclude_client: false }
}

pub const MENU_ITEMS: [MenuItem; 10] = [
    item("Dashboard", "/dashboard", "▦"),
    item("Agenda", "/agenda", "◷"),
    item("Tasks", "/tasks", "✓"),
    item("Clients", "/clients", "☺"),
    item("Cases", "/cases", "▤"),
    item("Documents", "/documents", "▧"),
    MenuItem { exclude_client: true, ..item("Tags", "/tags", "#") },
    MenuItem { exclude_client: true, ..item("Search", "/search", "⌕") },
    MenuItem { admin_only: true, ..item("Users", "/users", "☷") },
    MenuItem { exclude_client: true, ..item("Audit log", "/audit", "✎") },
];

impl MenuItem {
    /// Whether this entry renders for a user with `role` (`None`: no user).
    #[must_use]
    pub fn visible_to(&self, role: Option<Role>) -> bool {
        if self.admin_only && role != Some(Role::Admin) {
            return false;
        }
        if self.exclude_client && role == Some(Role::Client) {
            return false;
        }
        true
    }
}

/// Menu entries visible to `role`, in display order.
#[must_use]
pub fn visible_items(role: Option<Role>) -> Vec<MenuItem> {
    MENU_ITEMS.into_iter().filter(|item| item.visible_to(role)).collect()
}
