//! Theme preference persistence.
//!
//! Reads the user's theme from `localStorage` and applies a `data-theme`
//! attribute to the `<html>` element. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "docchat_theme";

/// Stored value for a theme flag.
#[must_use]
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Parse a stored theme value. Unknown values mean "no preference".
#[must_use]
pub fn parse_theme(raw: &str) -> Option<bool> {
    match raw.trim() {
        "dark" => Some(true),
        "light" => Some(false),
        _ => None,
    }
}

/// Read the theme preference.
///
/// Returns the stored preference, else the system `prefers-color-scheme`,
/// else light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(dark) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_theme) {
                return dark;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Apply and persist an explicit theme choice. Returns the applied value.
pub fn set(dark: bool) -> bool {
    apply(dark);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if let Err(e) = storage.set_item(STORAGE_KEY, theme_name(dark)) {
                log::warn!("theme preference not saved: {e:?}");
            }
        }
    }
    dark
}
