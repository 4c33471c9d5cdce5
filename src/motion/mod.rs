//! Animation primitives for the storefront
//!
//! Everything here except `dom` is plain math on `f64` and compiles on every
//! target, so the page's motion can be tested on the host. The `dom` hooks
//! connect that math to the browser (scroll, animation frames, viewport
//! intersection) and fall back to resting values during server rendering.

pub mod dom;
pub mod hero;
pub mod marquee;
pub mod nav;
pub mod particles;
pub mod spring;

pub use spring::{Spring, VelocityTracker};

/// Map `v` into `[min, max)` with modulo arithmetic that stays in range for
/// negative inputs.
///
/// Bounds may be given in either order; the marquee calls
/// `wrap(-20.0, -45.0, x)` and gets a value in `[-45, -20)`.
pub fn wrap(min: f64, max: f64, v: f64) -> f64 {
    let (min, max) = if max < min { (max, min) } else { (min, max) };
    let range = max - min;
    ((((v - min) % range) + range) % range) + min
}

/// Linear mapping from an input range to an output range, optionally clamped
/// at both ends of the input range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearMap {
    pub input: (f64, f64),
    pub output: (f64, f64),
    pub clamp: bool,
}

impl LinearMap {
    /// Clamped map, the default for scroll-linked values
    pub const fn new(input: (f64, f64), output: (f64, f64)) -> Self {
        Self {
            input,
            output,
            clamp: true,
        }
    }

    /// Map that keeps extrapolating past the input range
    pub const fn unclamped(input: (f64, f64), output: (f64, f64)) -> Self {
        Self {
            input,
            output,
            clamp: false,
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let (in_start, in_end) = self.input;
        let (out_start, out_end) = self.output;
        let span = in_end - in_start;
        if span == 0.0 {
            return out_start;
        }

        let mut progress = (v - in_start) / span;
        if self.clamp {
            progress = progress.clamp(0.0, 1.0);
        }
        out_start + (out_end - out_start) * progress
    }
}

/// Delays for a sequence of elements revealed one after another
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    /// Seconds before the first element starts
    pub delay_children: f64,
    /// Seconds between two consecutive elements
    pub stagger: f64,
}

impl Stagger {
    pub const fn new(delay_children: f64, stagger: f64) -> Self {
        Self {
            delay_children,
            stagger,
        }
    }

    /// Start delay in seconds of the element at `index`
    pub fn delay_for(&self, index: usize) -> f64 {
        self.delay_children + index as f64 * self.stagger
    }
}

/// Product cards enter 0.2 s apart once visible
pub const CARD_STAGGER: Stagger = Stagger::new(0.0, 0.2);

pub fn card_delay(index: usize) -> f64 {
    CARD_STAGGER.delay_for(index)
}

/// CSS `transition-delay`/`animation-delay` value for a delay in seconds
pub fn css_seconds(seconds: f64) -> String {
    format!("{:.2}s", seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn wrap_keeps_in_range_values() {
        for v in [-45.0, -40.0, -30.5, -20.000001] {
            assert!((wrap(-45.0, -20.0, v) - v).abs() < EPS, "v = {v}");
        }
    }

    #[test]
    fn wrap_maps_any_value_into_range() {
        let mut v = -1000.0;
        while v < 1000.0 {
            let r = wrap(-45.0, -20.0, v);
            assert!((-45.0..-20.0).contains(&r), "wrap({v}) = {r}");
            v += 3.7;
        }
    }

    #[test]
    fn wrap_with_reversed_bounds_stays_between_them() {
        let r = wrap(-20.0, -45.0, -30.0);
        assert!((-45.0..-20.0).contains(&r));
        assert!((r + 30.0).abs() < EPS);

        let r = wrap(-20.0, -45.0, 0.0);
        assert!((r + 25.0).abs() < EPS);

        // lower bound is inclusive, upper exclusive
        assert_eq!(wrap(-20.0, -45.0, -45.0), -45.0);
        assert_eq!(wrap(-20.0, -45.0, -20.0), -45.0);
    }

    #[test]
    fn wrap_is_periodic() {
        let a = wrap(0.0, 10.0, 3.0);
        let b = wrap(0.0, 10.0, 13.0);
        let c = wrap(0.0, 10.0, -7.0);
        assert!((a - b).abs() < EPS);
        assert!((a - c).abs() < EPS);
    }

    #[test]
    fn linear_map_clamps_by_default() {
        let map = LinearMap::new((0.0, 600.0), (1.0, 0.9));
        assert_eq!(map.apply(-50.0), 1.0);
        assert!((map.apply(300.0) - 0.95).abs() < EPS);
        assert!((map.apply(5000.0) - 0.9).abs() < EPS);
    }

    #[test]
    fn unclamped_map_extrapolates() {
        let map = LinearMap::unclamped((0.0, 1000.0), (0.0, 5.0));
        assert!((map.apply(2000.0) - 10.0).abs() < EPS);
        assert!((map.apply(-500.0) + 2.5).abs() < EPS);
    }

    #[test]
    fn degenerate_input_range_returns_start() {
        let map = LinearMap::new((5.0, 5.0), (1.0, 2.0));
        assert_eq!(map.apply(100.0), 1.0);
    }

    #[test]
    fn card_delays_step_by_fifth_of_a_second() {
        let delays: Vec<f64> = (0..3).map(card_delay).collect();
        assert!((delays[0] - 0.0).abs() < EPS);
        assert!((delays[1] - 0.2).abs() < EPS);
        assert!((delays[2] - 0.4).abs() < EPS);
    }

    #[test]
    fn css_seconds_formats_two_decimals() {
        assert_eq!(css_seconds(0.54), "0.54s");
        assert_eq!(css_seconds(0.0), "0.00s");
    }
}
