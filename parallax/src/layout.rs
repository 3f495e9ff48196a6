//! Pure stacking placement: `(panel index, scroll progress) -> offset`.
//!
//! Each panel rests at `index * (panel_height + spacing)` and, as its own
//! slice of scroll progress completes, slides up by
//! `index * (panel_height - peek)` so it ends `peek` pixels below the panel
//! it covers. Later panels stack above earlier ones.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_PANEL_HEIGHT_PX, DEFAULT_PEEK_PX, DEFAULT_SPACING_PX};
use crate::progress::{Window, clamp_progress};

/// Rejected stack configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// A dimension was NaN, infinite, or negative.
    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidDimension { field: &'static str, value: f64 },

    /// The peek sliver cannot be taller than the panel itself.
    #[error("peek ({peek}px) exceeds panel height ({panel_height}px)")]
    PeekExceedsPanel { peek: f64, panel_height: f64 },
}

/// How the first panel participates in the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPolicy {
    /// Every panel, including the first, owns an equal `1/N` progress window.
    #[default]
    Uniform,
    /// The first panel is a fixed reference that owns no window; the other
    /// `N - 1` panels split progress evenly.
    AnchorFirst,
}

/// Shared geometry for every panel in a stack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    pub panel_height: f64,
    pub spacing: f64,
    pub peek: f64,
    pub anchor: AnchorPolicy,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            panel_height: DEFAULT_PANEL_HEIGHT_PX,
            spacing: DEFAULT_SPACING_PX,
            peek: DEFAULT_PEEK_PX,
            anchor: AnchorPolicy::Uniform,
        }
    }
}

impl StackConfig {
    /// Check that every dimension is usable.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] for non-finite or negative dimensions, or a
    /// peek taller than the panel.
    pub fn validate(&self) -> Result<(), LayoutError> {
        for (field, value) in [
            ("panel_height", self.panel_height),
            ("spacing", self.spacing),
            ("peek", self.peek),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidDimension { field, value });
            }
        }
        if self.peek > self.panel_height {
            return Err(LayoutError::PeekExceedsPanel { peek: self.peek, panel_height: self.panel_height });
        }
        Ok(())
    }
}

/// Where one panel sits for a given progress value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
    pub index: usize,
    /// Offset at local progress 0.
    pub rest_offset: f64,
    /// Distance travelled upward by local progress 1.
    pub travel: f64,
    /// Local progress within this panel's window.
    pub local_progress: f64,
    /// Vertical offset in CSS pixels: `rest_offset - local_progress * travel`.
    pub y: f64,
    /// Higher renders on top.
    pub stack_order: u32,
    /// Fixed reference panel that ignores scroll.
    pub anchored: bool,
}

/// Validated layout for a fixed number of panels.
#[derive(Debug, Clone, PartialEq)]
pub struct StackLayout {
    config: StackConfig,
    count: usize,
}

impl StackLayout {
    /// Build a layout for `count` panels.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError`] if `config` fails [`StackConfig::validate`].
    pub fn new(config: StackConfig, count: usize) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self { config, count })
    }

    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Height the scroll region must have so every panel gets an equal window.
    #[must_use]
    pub fn region_height(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let count = self.count as f64;
        self.config.panel_height * count
    }

    /// Whether `index` is the fixed reference panel under the anchor policy.
    #[must_use]
    pub fn is_anchored(&self, index: usize) -> bool {
        index == 0 && self.config.anchor == AnchorPolicy::AnchorFirst
    }

    /// The progress window owned by `index`, or `None` for an anchored panel.
    #[must_use]
    pub fn window(&self, index: usize) -> Option<Window> {
        match self.config.anchor {
            AnchorPolicy::Uniform => Some(Window::nth(index, self.count)),
            AnchorPolicy::AnchorFirst if index == 0 => None,
            AnchorPolicy::AnchorFirst => Some(Window::nth(index - 1, self.count.saturating_sub(1))),
        }
    }

    /// Place a single panel. Indices past the end are placed as if the stack
    /// were long enough to hold them.
    #[must_use]
    pub fn place(&self, index: usize, progress: f64) -> PanelPlacement {
        #[allow(clippy::cast_precision_loss)]
        let i = index as f64;
        let rest_offset = i * (self.config.panel_height + self.config.spacing);
        let travel = i * (self.config.panel_height - self.config.peek);
        let local_progress = self.window(index).map_or(0.0, |w| w.local(clamp_progress(progress)));

        PanelPlacement {
            index,
            rest_offset,
            travel,
            local_progress,
            y: rest_offset - local_progress * travel,
            stack_order: u32::try_from(index).map_or(u32::MAX, |i| i.saturating_add(1)),
            anchored: self.is_anchored(index),
        }
    }

    /// Place every panel for one progress sample. O(N).
    #[must_use]
    pub fn place_all(&self, progress: f64) -> Vec<PanelPlacement> {
        let progress = clamp_progress(progress);
        (0..self.count).map(|index| self.place(index, progress)).collect()
    }
}
