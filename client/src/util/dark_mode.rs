//! Theme preference persistence.
//!
//! The preference lives in `localStorage` under `darkMode` as a JSON boolean
//! and is reflected as a `data-theme` attribute on `<html>`. Off-browser every
//! call is a no-op so server rendering always emits the light theme.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "darkMode";

/// Parse a stored preference. Anything other than a JSON boolean is ignored.
#[must_use]
pub fn parse_preference(raw: &str) -> Option<bool> {
    serde_json::from_str::<bool>(raw.trim()).ok()
}

#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Stored preference, falling back to the system color scheme.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|raw| parse_preference(&raw));
        if let Some(enabled) = stored {
            return enabled;
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                log::warn!("dark mode: preference not persisted");
            }
        }
    }
    next
}
