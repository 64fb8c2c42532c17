//! Floating background particles

use rand::Rng;
use std::time::{Duration, Instant};

/// Particles per field
pub const PARTICLE_COUNT: usize = 50;

/// Quiet period after the last resize before particles are regenerated
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container
    pub x: f64,
    /// Vertical position, percent of the container
    pub y: f64,
    /// Width and height, px
    pub size: f64,
    /// Animation cycle, seconds
    pub duration: f64,
    /// Animation start delay, seconds
    pub delay: f64,
}

impl Particle {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..100.0),
            y: rng.random_range(0.0..100.0),
            size: rng.random_range(1.0..4.0),
            duration: rng.random_range(10.0..30.0),
            delay: rng.random_range(0.0..5.0),
        }
    }

    /// Inline style for the particle element
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {size:.2}px; height: {size:.2}px; animation: float {:.2}s ease-in-out {:.2}s infinite",
            self.x,
            self.y,
            self.duration,
            self.delay,
            size = self.size,
        )
    }
}

/// The `#particles` container
#[derive(Debug, Clone, Default)]
pub struct ParticleField {
    particles: Vec<Particle>,
    generation: u64,
}

impl ParticleField {
    /// Clear the container and sample a fresh set
    pub fn regenerate(&mut self, rng: &mut impl Rng) {
        self.particles = (0..PARTICLE_COUNT).map(|_| Particle::random(&mut *rng)).collect();
        self.generation += 1;
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// How many times the field has been filled
    pub const fn generation(&self) -> u64 {
        self.generation
    }
}

/// Trailing-edge debounce for window resizes
#[derive(Debug, Clone, Copy, Default)]
pub struct ResizeDebounce {
    deadline: Option<Instant>,
}

impl ResizeDebounce {
    /// Each resize pushes the deadline back
    pub fn on_resize(&mut self, at: Instant) {
        self.deadline = Some(at + RESIZE_DEBOUNCE);
    }

    /// True once per burst, when the quiet period has elapsed by `now`
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sample_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::default();
        field.regenerate(&mut rng);

        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        for p in field.particles() {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((10.0..30.0).contains(&p.duration));
            assert!((0.0..5.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_regenerate_replaces_not_appends() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::default();
        field.regenerate(&mut rng);
        let first = field.particles().to_vec();
        field.regenerate(&mut rng);
        assert_eq!(field.particles().len(), PARTICLE_COUNT);
        assert_eq!(field.generation(), 2);
        assert_ne!(field.particles(), first.as_slice());
    }

    #[test]
    fn test_style_string() {
        let p = Particle {
            x: 12.5,
            y: 40.0,
            size: 2.0,
            duration: 15.0,
            delay: 1.25,
        };
        assert_eq!(
            p.style(),
            "left: 12.50%; top: 40.00%; width: 2.00px; height: 2.00px; animation: float 15.00s ease-in-out 1.25s infinite"
        );
    }

    #[test]
    fn test_resize_burst_fires_once() {
        let start = Instant::now();
        let mut debounce = ResizeDebounce::default();
        debounce.on_resize(start);
        debounce.on_resize(start + Duration::from_millis(200));

        assert!(!debounce.poll(start + Duration::from_millis(300)));
        assert!(debounce.poll(start + Duration::from_millis(450)));
        assert!(!debounce.is_pending());
        assert!(!debounce.poll(start + Duration::from_secs(5)));
    }
}
