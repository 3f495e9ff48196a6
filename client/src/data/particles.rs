//! Fixed placements for the decorative floating particles.
//!
//! Positions are static so server and client render identical markup.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub left: f32,
    /// Vertical position, percent of the container.
    pub top: f32,
    /// Animation delay, seconds.
    pub delay: f32,
    /// Animation duration, seconds.
    pub duration: f32,
}

impl Particle {
    const fn new(left: f32, top: f32, delay: f32, duration: f32) -> Self {
        Self { left, top, delay, duration }
    }

    /// Inline style for one particle element.
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left, self.top, self.delay, self.duration
        )
    }
}

pub static PARTICLES: [Particle; 20] = [
    Particle::new(10.0, 20.0, 0.1, 3.5),
    Particle::new(25.0, 45.0, 0.3, 4.2),
    Particle::new(40.0, 15.0, 0.5, 3.8),
    Particle::new(55.0, 70.0, 0.7, 4.0),
    Particle::new(70.0, 30.0, 0.9, 3.6),
    Particle::new(85.0, 60.0, 1.1, 4.1),
    Particle::new(15.0, 80.0, 1.3, 3.9),
    Particle::new(30.0, 10.0, 1.5, 3.7),
    Particle::new(45.0, 55.0, 1.7, 4.3),
    Particle::new(60.0, 25.0, 1.9, 3.4),
    Particle::new(75.0, 75.0, 2.1, 4.0),
    Particle::new(90.0, 40.0, 2.3, 3.8),
    Particle::new(5.0, 65.0, 2.5, 3.6),
    Particle::new(20.0, 35.0, 2.7, 4.2),
    Particle::new(35.0, 85.0, 2.9, 3.9),
    Particle::new(50.0, 5.0, 3.1, 3.7),
    Particle::new(65.0, 50.0, 3.3, 4.1),
    Particle::new(80.0, 20.0, 3.5, 3.5),
    Particle::new(95.0, 80.0, 3.7, 4.0),
    Particle::new(10.0, 90.0, 3.9, 3.8),
];
