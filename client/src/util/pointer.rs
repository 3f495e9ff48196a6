//! Pointer-following background glow.
//!
//! Pages expose the pointer position as `--mouse-x` / `--mouse-y` percentage
//! custom properties on `<html>`; the stylesheet centres a radial gradient on
//! them.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

/// `offset` as a percentage of `extent`, clamped to `[0, 100]`.
#[must_use]
pub fn percent_of(offset: f64, extent: f64) -> f64 {
    if !(extent.is_finite() && extent > 0.0) || !offset.is_finite() {
        return 50.0;
    }
    (offset / extent * 100.0).clamp(0.0, 100.0)
}

/// CSS value for one custom property.
#[must_use]
pub fn css_percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Track the pointer for the lifetime of the calling reactive owner.
pub fn track_pointer_glow() {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let handle = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let Some(root) = window
                .document()
                .and_then(|d| d.document_element())
                .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(el).ok())
            else {
                return;
            };
            let style = root.style();
            let x = css_percent(percent_of(f64::from(ev.client_x()), width));
            let y = css_percent(percent_of(f64::from(ev.client_y()), height));
            if style.set_property("--mouse-x", &x).is_err() || style.set_property("--mouse-y", &y).is_err() {
                leptos::logging::debug_warn!("pointer glow: could not set custom properties");
            }
        });
        on_cleanup(move || handle.remove());
    }
}
