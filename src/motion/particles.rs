//! Gold dust particles floating over the hero

use rand::Rng;

pub const PARTICLE_COUNT: usize = 20;

/// Horizontal drift in percent, randomly to the left or right
const DRIFT: f64 = 5.0;

/// How far a particle rises over one loop, in percent
pub const RISE: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    /// Left offset in percent
    pub x: f64,
    /// Top offset in percent
    pub y: f64,
    /// Diameter in px
    pub size: f64,
    /// Seconds per loop
    pub duration: f64,
    /// Seconds before the first loop
    pub delay: f64,
    /// Horizontal travel in percent over one loop
    pub drift: f64,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(id: usize, rng: &mut R) -> Self {
        Self {
            id,
            x: rng.gen_range(0.0..100.0),
            y: rng.gen_range(0.0..100.0),
            size: rng.gen_range(1.0..4.0),
            duration: rng.gen_range(10.0..20.0),
            delay: rng.gen_range(0.0..5.0),
            drift: if rng.gen_bool(0.5) { DRIFT } else { -DRIFT },
        }
    }

    /// Where one loop ends, in percent of the field: `drift` sideways and
    /// `RISE` upward from the start
    pub fn end_position(&self) -> (f64, f64) {
        (self.x + self.drift, self.y - RISE)
    }

    /// Inline style carrying the particle's placement and timing into the CSS loop.
    ///
    /// The loop animates `left`/`top` between the start and end custom
    /// properties, so the travel is measured against the field rather than
    /// the dot itself.
    pub fn style(&self) -> String {
        let (end_x, end_y) = self.end_position();
        format!(
            "--from-x: {:.2}%; --from-y: {:.2}%; --to-x: {:.2}%; --to-y: {:.2}%; \
             left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px; \
             animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x,
            self.y,
            end_x,
            end_y,
            self.x,
            self.y,
            self.size,
            self.size,
            self.duration,
            self.delay
        )
    }
}

pub fn generate_particles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Particle> {
    (0..count).map(|id| Particle::random(id, rng)).collect()
}
