//! Scroll-progress normalization.
//!
//! Progress arrives from the host as a raw float that can drift outside
//! `[0, 1]` during fast flicks or overscroll bounce. Everything here clamps;
//! nothing extrapolates.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Clamp a raw progress sample into `[0, 1]`. `NaN` maps to `0`.
#[must_use]
pub fn clamp_progress(raw: f64) -> f64 {
    if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) }
}

/// The slice of global progress owned by one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
    pub start: f64,
    pub end: f64,
}

impl Window {
    /// Window for slot `slot` out of `slots` equal slices.
    ///
    /// `slots == 0` yields an empty window at 0, which maps every progress
    /// value to local progress 0.
    #[must_use]
    pub fn nth(slot: usize, slots: usize) -> Self {
        if slots == 0 {
            return Self { start: 0.0, end: 0.0 };
        }
        #[allow(clippy::cast_precision_loss)]
        let (slot, slots) = (slot as f64, slots as f64);
        Self { start: slot / slots, end: (slot + 1.0) / slots }
    }

    /// Map global progress into this window's local `[0, 1]` progress.
    #[must_use]
    pub fn local(&self, progress: f64) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 0.0;
        }
        ((clamp_progress(progress) - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Progress through a region from its bounding box relative to the viewport.
///
/// `top` is the region's top edge relative to the viewport top (negative once
/// scrolled past), `height` its full height. Progress is 0 while the region's
/// top is at or below the viewport top and 1 once its bottom reaches the
/// viewport bottom.
#[must_use]
pub fn progress_from_bounds(top: f64, height: f64, viewport_height: f64) -> f64 {
    let scrollable = height - viewport_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return if top < 0.0 { 1.0 } else { 0.0 };
    }
    clamp_progress(-top / scrollable)
}
