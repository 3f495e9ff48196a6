//! Scroll-linked stacking layout for promotional card panels.
//!
//! This crate is platform-free: it knows nothing about the DOM, animation
//! frames, or Leptos. The host view measures how far the user has scrolled
//! through the stacking region, feeds that progress in, and reads back a
//! vertical offset and stacking order per panel. Panels progressively slide
//! over each other until only a thin `peek` sliver of each earlier panel
//! remains visible.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Stack configuration and the pure `progress -> offset` placement |
//! | [`progress`] | Progress clamping, per-panel windows, region-relative measurement |
//! | [`spring`] | Critically damped spring used to smooth offsets |
//! | [`animator`] | Per-panel springs driven by the layout targets |
//! | [`consts`] | Default dimensions and smoothing parameters |

pub mod animator;
pub mod consts;
pub mod layout;
pub mod progress;
pub mod spring;

pub use animator::{PanelFrame, StackAnimator};
pub use layout::{AnchorPolicy, LayoutError, PanelPlacement, StackConfig, StackLayout};
pub use spring::Spring;
