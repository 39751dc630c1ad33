//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `load`, `notice`, `notifications`, `ui`) so individual
//! components can depend on small focused models provided as `RwSignal`s.

pub mod auth;
pub mod load;
pub mod notice;
pub mod notifications;
pub mod ui;
