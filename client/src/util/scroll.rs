//! Scroll measurement and animation-frame scheduling.
//!
//! SYSTEM CONTEXT
//! ==============
//! The stacking cards need two browser signals: how far the user has scrolled
//! through the stack's region, and a steady animation-frame tick while the
//! smoothing springs are still moving. The pure pieces (`FrameClock`) are
//! testable natively; the `web_sys` glue is hydrate-only.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

use std::time::Duration;

/// Turns absolute animation-frame timestamps into frame deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    last_ms: Option<f64>,
    pending: bool,
}

impl FrameClock {
    /// Claim the next frame. Returns false if one is already requested.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a frame timestamp (ms) and return the time since the last one.
    /// The first frame after a pause reports zero.
    pub fn tick(&mut self, now_ms: f64) -> Duration {
        self.pending = false;
        let delta_ms = self.last_ms.map_or(0.0, |last| (now_ms - last).max(0.0));
        self.last_ms = Some(now_ms);
        if delta_ms.is_finite() { Duration::from_secs_f64(delta_ms / 1000.0) } else { Duration::ZERO }
    }

    /// Forget the last timestamp once animation stops, so a later restart
    /// does not see the idle gap as one giant frame.
    pub fn pause(&mut self) {
        self.last_ms = None;
        self.pending = false;
    }
}

/// Scroll progress through `el`'s region, in `[0, 1]`.
#[cfg(feature = "hydrate")]
pub fn region_progress(el: &web_sys::Element) -> f64 {
    let rect = el.get_bounding_client_rect();
    let viewport = web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    parallax::progress::progress_from_bounds(rect.top(), rect.height(), viewport)
}

/// Run `f` with the timestamp of the next animation frame.
///
/// Returns false (and never calls `f`) if no frame could be requested.
#[cfg(feature = "hydrate")]
pub fn request_frame(f: impl FnOnce(f64) + 'static) -> bool {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return false;
    };
    let cb = Closure::once_into_js(f);
    window.request_animation_frame(cb.unchecked_ref()).is_ok()
}
