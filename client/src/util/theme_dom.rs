//! Browser side of the theme: `<html data-theme>` and cross-tab events.
//!
//! TRADE-OFFS
//! ==========
//! Both helpers are browser-only; SSR and native test builds no-op so server
//! rendering stays deterministic.

/// Set `data-theme="dark|light"` on the `<html>` element.
pub fn apply(mode: crate::state::theme::ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        if let Err(e) = el.set_attribute("data-theme", mode.as_str()) {
            leptos::logging::debug_warn!("theme: could not set data-theme: {e:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}

/// Forward `storage` events from other tabs to `on_change(key, new_value)`.
///
/// The listener is removed when the calling reactive owner is cleaned up.
pub fn on_storage_change(on_change: impl Fn(Option<String>, Option<String>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let handle = window_event_listener(leptos::ev::storage, move |ev: web_sys::StorageEvent| {
            on_change(ev.key(), ev.new_value());
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
