//! Spring smoothing and velocity tracking

/// Largest integration step in seconds; longer frames are split into sub-steps
const MAX_STEP: f64 = 1.0 / 240.0;

/// Frames longer than this are treated as a stall (tab in background) and capped
const MAX_FRAME: f64 = 0.1;

/// A damped spring that pulls `value` towards `target`
///
/// Stepped once per animation frame with the frame's elapsed time.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
            value: 0.0,
            velocity: 0.0,
            target: 0.0,
        }
    }

    /// Start resting at `value`
    pub fn at(mut self, value: f64) -> Self {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_resting(&self) -> bool {
        (self.target - self.value).abs() <= self.rest_delta && self.velocity.abs() <= self.rest_speed
    }

    /// Advance by `dt` seconds and return the new value
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            let displacement = self.value - self.target;
            let force = -self.stiffness * displacement - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if self.is_resting() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}

/// Rate of change of a sampled value, in units per second
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VelocityTracker {
    last: Option<(f64, f64)>,
    velocity: f64,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` observed at `now_ms` and return the updated velocity
    pub fn sample(&mut self, value: f64, now_ms: f64) -> f64 {
        if let Some((last_value, last_ms)) = self.last {
            let elapsed = now_ms - last_ms;
            if elapsed > 0.0 {
                self.velocity = (value - last_value) / elapsed * 1000.0;
            }
        }
        self.last = Some((value, now_ms));
        self.velocity
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}
