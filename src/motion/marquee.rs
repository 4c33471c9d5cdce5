//! Scroll-velocity driven marquee offset

use super::{wrap, LinearMap, Spring, VelocityTracker};

/// Offset bounds in percent of the strip width. The strip holds four copies
/// of the image list, so jumping between these bounds is invisible.
pub const WRAP_FROM: f64 = -20.0;
pub const WRAP_TO: f64 = -45.0;

const SMOOTH_STIFFNESS: f64 = 400.0;
const SMOOTH_DAMPING: f64 = 50.0;

/// Smoothed scroll velocity (px/s) to speed multiplier
const VELOCITY_FACTOR: LinearMap = LinearMap::unclamped((0.0, 1000.0), (0.0, 5.0));

/// Per-frame state of one marquee strip
#[derive(Debug, Clone)]
pub struct MarqueeState {
    base_velocity: f64,
    offset: f64,
    direction: f64,
    scroll_velocity: VelocityTracker,
    smooth_velocity: Spring,
}

impl MarqueeState {
    /// `base_velocity` is in percent per second; its sign is the resting direction
    pub fn new(base_velocity: f64) -> Self {
        Self {
            base_velocity,
            offset: 0.0,
            direction: 1.0,
            scroll_velocity: VelocityTracker::new(),
            smooth_velocity: Spring::new(SMOOTH_STIFFNESS, SMOOTH_DAMPING),
        }
    }

    /// Advance one animation frame and return the wrapped offset in percent.
    ///
    /// `scroll_y` is the current page offset, `now_ms` the frame timestamp and
    /// `delta_ms` the time since the previous frame.
    pub fn tick(&mut self, scroll_y: f64, now_ms: f64, delta_ms: f64) -> f64 {
        let raw = self.scroll_velocity.sample(scroll_y, now_ms);
        self.smooth_velocity.set_target(raw);
        let smoothed = self.smooth_velocity.step(delta_ms / 1000.0);
        let factor = VELOCITY_FACTOR.apply(smoothed);

        let mut move_by = self.direction * self.base_velocity * (delta_ms / 1000.0);

        if factor < 0.0 {
            self.direction = -1.0;
        } else if factor > 0.0 {
            self.direction = 1.0;
        }

        move_by += self.direction * move_by * factor;
        self.offset += move_by;

        self.position()
    }

    /// Current offset wrapped into the visible band
    pub fn position(&self) -> f64 {
        wrap(WRAP_FROM, WRAP_TO, self.offset)
    }

    /// Unbounded accumulated offset
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Speed multiplier derived from the spring-smoothed scroll velocity
    pub fn velocity_factor(&self) -> f64 {
        VELOCITY_FACTOR.apply(self.smooth_velocity.value())
    }
}
