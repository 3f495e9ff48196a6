//! Critically damped spring.
//!
//! Smooths a noisy target signal into continuous motion. Damping is pinned to
//! the critical value `2 * sqrt(stiffness)`, so a spring released from rest
//! approaches its target monotonically and never oscillates.
//!
//! The step uses the closed-form solution of the critically damped
//! oscillator rather than numerical integration:
//!
//! ```text
//! x(t) = target + (c1 + c2 * t) * e^(-w * t)
//! c1   = x0 - target
//! c2   = v0 + w * c1
//! w    = sqrt(stiffness)
//! ```
//!
//! The result is exact for any `dt`, so long frames cannot destabilize it.
//! Overshoot is only possible when the spring is retargeted while already
//! moving toward (and past) the new target, and is bounded by the velocity
//! carried into the retarget.

#[cfg(test)]
#[path = "spring_test.rs"]
mod spring_test;

use std::time::Duration;

use crate::consts::{DEFAULT_STIFFNESS, MIN_STIFFNESS, REST_DISTANCE_PX, REST_SPEED_PX};

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    omega: f64,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `position` with the default stiffness.
    #[must_use]
    pub fn at(position: f64) -> Self {
        Self { position, velocity: 0.0, target: position, omega: DEFAULT_STIFFNESS.sqrt(), at_rest: true }
    }

    /// Set stiffness (builder). Clamped to a small positive minimum.
    #[must_use]
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        let stiffness = if stiffness.is_finite() { stiffness.max(MIN_STIFFNESS) } else { DEFAULT_STIFFNESS };
        self.omega = stiffness.sqrt();
        self
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn stiffness(&self) -> f64 {
        self.omega * self.omega
    }

    /// The damping coefficient implied by the stiffness.
    #[must_use]
    pub fn damping(&self) -> f64 {
        2.0 * self.omega
    }

    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring and wake it. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Jump straight to `position` and stop.
    pub fn snap_to(&mut self, position: f64) {
        if !position.is_finite() {
            return;
        }
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance the spring by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let t = dt.as_secs_f64();
        if t <= 0.0 {
            return;
        }

        let w = self.omega;
        let c1 = self.position - self.target;
        let c2 = self.velocity + w * c1;
        let decay = (-w * t).exp();

        self.position = self.target + (c1 + c2 * t) * decay;
        self.velocity = (c2 - w * (c1 + c2 * t)) * decay;

        if (self.position - self.target).abs() < REST_DISTANCE_PX && self.velocity.abs() < REST_SPEED_PX {
            self.snap_to(self.target);
        }
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::at(0.0)
    }
}
