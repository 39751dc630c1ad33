//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the signed-in chrome and the route guard while reading
//! shared state from Leptos context providers.

pub mod layout;
pub mod notice_host;
pub mod notification_center;
pub mod require_auth;
