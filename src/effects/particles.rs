//! Decorative particle field behind the hero.

pub const CONTAINER_ID: &str = "particles-container";
pub const PARTICLE_CLASS: &str = "particle";

const SIZE_RANGE: (f64, f64) = (1.0, 5.0);
const DELAY_RANGE: (f64, f64) = (0.0, 20.0);
const DURATION_RANGE: (f64, f64) = (15.0, 25.0);

/// Position in percent of the container, size in px, timings in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay: f64,
    pub duration: f64,
}

impl Particle {
    pub fn random(rng: &mut fastrand::Rng) -> Self {
        Self {
            x: rng.f64() * 100.0,
            y: rng.f64() * 100.0,
            size: in_range(rng, SIZE_RANGE),
            delay: in_range(rng, DELAY_RANGE),
            duration: in_range(rng, DURATION_RANGE),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {size:.2}px; height: {size:.2}px; animation-delay: {:.2}s; animation-duration: {:.2}s;",
            self.x,
            self.y,
            self.delay,
            self.duration,
            size = self.size,
        )
    }
}

fn in_range(rng: &mut fastrand::Rng, (low, high): (f64, f64)) -> f64 {
    low + rng.f64() * (high - low)
}

pub fn generate_particles(rng: &mut fastrand::Rng, count: usize) -> Vec<Particle> {
    (0..count).map(|_| Particle::random(rng)).collect()
}
