//! Helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing decisions and browser concerns out of the
//! view code so they can be tested without a DOM.

pub mod auth;
pub mod dark_mode;
pub mod menu;
