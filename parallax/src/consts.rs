//! Shared numeric constants for the parallax crate.

use std::time::Duration;

// ── Panel geometry ──────────────────────────────────────────────

/// Default panel height in CSS pixels.
pub const DEFAULT_PANEL_HEIGHT_PX: f64 = 400.0;

/// Default gap between resting panels in CSS pixels.
pub const DEFAULT_SPACING_PX: f64 = 40.0;

/// Default visible sliver of a covered panel in CSS pixels.
pub const DEFAULT_PEEK_PX: f64 = 60.0;

// ── Smoothing ───────────────────────────────────────────────────

/// Default spring stiffness. Natural frequency is `sqrt(stiffness)` rad/s.
pub const DEFAULT_STIFFNESS: f64 = 170.0;

/// Lower bound for stiffness so a spring always converges.
pub const MIN_STIFFNESS: f64 = 0.1;

/// Distance from the target (px) below which a spring counts as settled.
pub const REST_DISTANCE_PX: f64 = 0.05;

/// Speed (px/s) below which a spring counts as settled.
pub const REST_SPEED_PX: f64 = 0.5;

/// Longest frame delta the animator will integrate in one call. Background
/// tabs can report multi-second gaps between animation frames.
pub const MAX_FRAME_DELTA: Duration = Duration::from_millis(64);
