//! Client-side session lifecycle: token storage, expiry check, refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app provides one [`Session`] through Leptos context. The route guard,
//! the API helpers, and the layout all read it instead of touching
//! `localStorage` directly.

pub mod claims;
pub mod error;
pub mod storage;
pub mod store;
pub mod transport;

pub use claims::{Claims, DecodeError, Role, decode_claims};
pub use error::SessionError;
pub use storage::{BrowserStorage, MemoryStorage, StorageError, TokenStorage};
pub use store::SessionStore;
pub use transport::{AuthTransport, HttpAuthTransport};

/// The browser session: `localStorage` plus `fetch`.
pub type Session = SessionStore<BrowserStorage, HttpAuthTransport>;

/// Build the browser session against the configured API base.
#[must_use]
pub fn browser_session() -> Session {
    SessionStore::new(BrowserStorage, HttpAuthTransport::default())
}
