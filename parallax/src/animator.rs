//! Smoothed stack animation.
//!
//! `StackAnimator` pairs a [`StackLayout`] with one [`Spring`] per panel.
//! Scroll updates retarget the springs; animation frames advance them. The
//! host renders [`PanelFrame`]s and keeps requesting frames until
//! [`StackAnimator::is_settled`] reports true.

#[cfg(test)]
#[path = "animator_test.rs"]
mod animator_test;

use std::time::Duration;

use crate::consts::MAX_FRAME_DELTA;
use crate::layout::{LayoutError, StackConfig, StackLayout};
use crate::progress::clamp_progress;
use crate::spring::Spring;

/// Render-ready output for one panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub index: usize,
    /// Smoothed vertical offset in CSS pixels.
    pub y: f64,
    pub stack_order: u32,
}

#[derive(Debug, Clone)]
pub struct StackAnimator {
    layout: StackLayout,
    springs: Vec<Spring>,
    progress: f64,
}

impl StackAnimator {
    /// Build an animator with every panel at rest for progress 0.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if the configuration is invalid.
    pub fn new(config: StackConfig, count: usize) -> Result<Self, LayoutError> {
        let layout = StackLayout::new(config, count)?;
        Ok(Self::from_layout(layout))
    }

    #[must_use]
    pub fn from_layout(layout: StackLayout) -> Self {
        let springs = layout.place_all(0.0).into_iter().map(|p| Spring::at(p.y)).collect();
        Self { layout, springs, progress: 0.0 }
    }

    /// Override spring stiffness for every panel (builder).
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.springs = self.springs.into_iter().map(|s| s.with_stiffness(stiffness)).collect();
        self
    }

    #[must_use]
    pub fn layout(&self) -> &StackLayout {
        &self.layout
    }

    /// Last accepted (clamped) progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Retarget every panel for a new progress sample.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = clamp_progress(progress);
        for (spring, placement) in self.springs.iter_mut().zip(self.layout.place_all(self.progress)) {
            if placement.anchored {
                spring.snap_to(placement.y);
            } else {
                spring.set_target(placement.y);
            }
        }
    }

    /// Advance every spring by `dt`, capped at [`MAX_FRAME_DELTA`].
    pub fn advance(&mut self, dt: Duration) {
        let dt = dt.min(MAX_FRAME_DELTA);
        for spring in &mut self.springs {
            spring.advance(dt);
        }
    }

    /// Jump every panel to its target.
    pub fn snap(&mut self) {
        for spring in &mut self.springs {
            spring.snap_to(spring.target());
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.springs.iter().all(Spring::is_at_rest)
    }

    #[must_use]
    pub fn frames(&self) -> Vec<PanelFrame> {
        self.springs
            .iter()
            .enumerate()
            .map(|(index, spring)| PanelFrame {
                index,
                y: spring.position(),
                stack_order: self.layout.place(index, self.progress).stack_order,
            })
            .collect()
    }
}
