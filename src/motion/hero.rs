//! Hero section motion: title stagger, scroll parallax and pointer tilt

use super::{LinearMap, Spring, Stagger};

pub const TITLE: &str = "VOGUE PERFUM";

/// Letters start 0.08 s apart after a 0.3 s lead-in
pub const TITLE_STAGGER: Stagger = Stagger::new(0.3, 0.08);

/// Duration in seconds of a single letter's entrance
pub const LETTER_DURATION: f64 = 1.4;

const BOTTLE_Y: LinearMap = LinearMap::new((0.0, 1000.0), (0.0, 250.0));
const TITLE_SCALE: LinearMap = LinearMap::new((0.0, 600.0), (1.0, 0.9));
const TITLE_OPACITY: LinearMap = LinearMap::new((200.0, 600.0), (1.0, 0.0));
const LETTER_UP: LinearMap = LinearMap::new((0.0, 600.0), (0.0, -100.0));
const LETTER_DOWN: LinearMap = LinearMap::new((0.0, 600.0), (0.0, 100.0));
const GLOW_SCALE: LinearMap = LinearMap::new((0.0, 500.0), (1.0, 1.5));
const GLOW_OPACITY: LinearMap = LinearMap::new((0.0, 300.0), (0.6, 0.0));

const ROTATE_X: LinearMap = LinearMap::new((-0.5, 0.5), (5.0, -5.0));
const ROTATE_Y: LinearMap = LinearMap::new((-0.5, 0.5), (-5.0, 5.0));
const GLOSS_X: LinearMap = LinearMap::new((-0.5, 0.5), (-80.0, 80.0));
const GLOSS_OPACITY: LinearMap = LinearMap::new((-0.5, 0.5), (0.0, 0.2));

const TILT_STIFFNESS: f64 = 400.0;
const TILT_DAMPING: f64 = 30.0;

/// Which way a title letter travels while the page scrolls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterDrift {
    Up,
    Down,
}

impl LetterDrift {
    /// Even letters sink, odd letters rise, giving the title a staggered silhouette
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            LetterDrift::Down
        } else {
            LetterDrift::Up
        }
    }
}

/// One title character with its entrance delay and scroll direction
#[derive(Debug, Clone, PartialEq)]
pub struct TitleLetter {
    pub index: usize,
    pub glyph: char,
    pub delay: f64,
    pub drift: LetterDrift,
}

/// Split a title into letters; spaces become non-breaking so they keep their width
pub fn title_letters(title: &str, stagger: Stagger) -> Vec<TitleLetter> {
    title
        .chars()
        .enumerate()
        .map(|(index, c)| TitleLetter {
            index,
            glyph: if c == ' ' { '\u{00A0}' } else { c },
            delay: stagger.delay_for(index),
            drift: LetterDrift::for_index(index),
        })
        .collect()
}

/// Bounding box of the hero section in client coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Pointer position relative to `bounds`, in `[-0.5, 0.5]` on both axes
pub fn normalize_pointer(client_x: f64, client_y: f64, bounds: Bounds) -> (f64, f64) {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client_x - bounds.left) / bounds.width - 0.5;
    let y = (client_y - bounds.top) / bounds.height - 0.5;
    (x.clamp(-0.5, 0.5), y.clamp(-0.5, 0.5))
}

/// Every value the hero renders for one animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub bottle_y: f64,
    pub title_scale: f64,
    pub title_opacity: f64,
    pub letter_up: f64,
    pub letter_down: f64,
    pub glow_scale: f64,
    pub glow_opacity: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub gloss_x: f64,
    pub gloss_opacity: f64,
}

impl HeroFrame {
    /// Scroll-linked values at `scroll_y` with the pointer at rest
    pub fn at_scroll(scroll_y: f64) -> Self {
        Self::compose(scroll_y, 0.0, 0.0)
    }

    fn compose(scroll_y: f64, pointer_x: f64, pointer_y: f64) -> Self {
        Self {
            bottle_y: BOTTLE_Y.apply(scroll_y),
            title_scale: TITLE_SCALE.apply(scroll_y),
            title_opacity: TITLE_OPACITY.apply(scroll_y),
            letter_up: LETTER_UP.apply(scroll_y),
            letter_down: LETTER_DOWN.apply(scroll_y),
            glow_scale: GLOW_SCALE.apply(scroll_y),
            glow_opacity: GLOW_OPACITY.apply(scroll_y),
            rotate_x: ROTATE_X.apply(pointer_y),
            rotate_y: ROTATE_Y.apply(pointer_x),
            gloss_x: GLOSS_X.apply(pointer_x),
            gloss_opacity: GLOSS_OPACITY.apply(pointer_y),
        }
    }

    /// Vertical scroll offset for a letter drifting in `drift`
    pub fn letter_y(&self, drift: LetterDrift) -> f64 {
        match drift {
            LetterDrift::Up => self.letter_up,
            LetterDrift::Down => self.letter_down,
        }
    }
}

impl Default for HeroFrame {
    fn default() -> Self {
        Self::at_scroll(0.0)
    }
}

/// Pointer springs of the hero; scroll values are derived fresh each frame
#[derive(Debug, Clone)]
pub struct HeroMotion {
    pointer_x: Spring,
    pointer_y: Spring,
}

impl HeroMotion {
    pub fn new() -> Self {
        Self {
            pointer_x: Spring::new(TILT_STIFFNESS, TILT_DAMPING),
            pointer_y: Spring::new(TILT_STIFFNESS, TILT_DAMPING),
        }
    }

    /// Point the tilt at a normalized pointer position
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer_x.set_target(x);
        self.pointer_y.set_target(y);
    }

    /// Pointer left the section; ease back to neutral
    pub fn pointer_left(&mut self) {
        self.pointer_moved(0.0, 0.0);
    }

    /// Advance the springs by `dt` seconds and build the frame for `scroll_y`
    pub fn frame(&mut self, scroll_y: f64, dt: f64) -> HeroFrame {
        let x = self.pointer_x.step(dt);
        let y = self.pointer_y.step(dt);
        HeroFrame::compose(scroll_y, x, y)
    }

    pub fn is_resting(&self) -> bool {
        self.pointer_x.is_resting() && self.pointer_y.is_resting()
    }
}

impl Default for HeroMotion {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn letter_delays_follow_stagger() {
        let letters = title_letters(TITLE, TITLE_STAGGER);
        assert_eq!(letters.len(), 12);
        assert!((letters[0].delay - 0.3).abs() < EPS);
        assert!((letters[3].delay - 0.54).abs() < EPS);
        assert!((letters[11].delay - (0.3 + 11.0 * 0.08)).abs() < EPS);
    }

    #[test]
    fn space_becomes_non_breaking() {
        let letters = title_letters(TITLE, TITLE_STAGGER);
        assert_eq!(letters[5].glyph, '\u{00A0}');
        assert_eq!(letters[6].glyph, 'P');
    }

    #[test]
    fn even_letters_sink_odd_letters_rise() {
        assert_eq!(LetterDrift::for_index(0), LetterDrift::Down);
        assert_eq!(LetterDrift::for_index(1), LetterDrift::Up);
        assert_eq!(LetterDrift::for_index(2), LetterDrift::Down);
        assert_eq!(LetterDrift::for_index(3), LetterDrift::Up);
    }

    #[test]
    fn resting_frame_at_top_of_page() {
        let frame = HeroFrame::at_scroll(0.0);
        assert_eq!(frame.bottle_y, 0.0);
        assert_eq!(frame.title_scale, 1.0);
        assert_eq!(frame.title_opacity, 1.0);
        assert_eq!(frame.letter_up, 0.0);
        assert_eq!(frame.letter_down, 0.0);
        assert_eq!(frame.glow_scale, 1.0);
        assert!((frame.glow_opacity - 0.6).abs() < EPS);
        assert_eq!(frame.rotate_x, 0.0);
        assert_eq!(frame.rotate_y, 0.0);
        assert_eq!(frame.gloss_x, 0.0);
        assert!((frame.gloss_opacity - 0.1).abs() < EPS);
    }

    #[test]
    fn halfway_scroll_frame() {
        let frame = HeroFrame::at_scroll(300.0);
        assert!((frame.bottle_y - 75.0).abs() < EPS);
        assert!((frame.title_scale - 0.95).abs() < EPS);
        assert!((frame.title_opacity - 0.75).abs() < EPS);
        assert!((frame.letter_up + 50.0).abs() < EPS);
        assert!((frame.letter_down - 50.0).abs() < EPS);
        assert!((frame.glow_scale - 1.3).abs() < EPS);
        assert!(frame.glow_opacity.abs() < EPS);
    }

    #[test]
    fn scroll_values_clamp_past_range() {
        let frame = HeroFrame::at_scroll(1000.0);
        assert!((frame.bottle_y - 250.0).abs() < EPS);
        assert!((frame.title_scale - 0.9).abs() < EPS);
        assert!(frame.title_opacity.abs() < EPS);
        assert!((frame.letter_y(LetterDrift::Up) + 100.0).abs() < EPS);
        assert!((frame.letter_y(LetterDrift::Down) - 100.0).abs() < EPS);
        assert!((frame.glow_scale - 1.5).abs() < EPS);

        assert_eq!(HeroFrame::at_scroll(5000.0), frame);
    }

    #[test]
    fn pointer_normalized_to_half_unit_box() {
        let bounds = Bounds {
            left: 100.0,
            top: 50.0,
            width: 800.0,
            height: 600.0,
        };
        assert_eq!(normalize_pointer(500.0, 350.0, bounds), (0.0, 0.0));
        assert_eq!(normalize_pointer(100.0, 50.0, bounds), (-0.5, -0.5));
        assert_eq!(normalize_pointer(900.0, 650.0, bounds), (0.5, 0.5));
        assert_eq!(normalize_pointer(2000.0, -100.0, bounds), (0.5, -0.5));
    }

    #[test]
    fn empty_bounds_give_neutral_pointer() {
        let bounds = Bounds {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
        };
        assert_eq!(normalize_pointer(10.0, 10.0, bounds), (0.0, 0.0));
    }

    #[test]
    fn tilt_follows_pointer_and_returns_on_leave() {
        let mut motion = HeroMotion::new();
        motion.pointer_moved(0.5, -0.5);
        let mut frame = motion.frame(0.0, 0.0);
        for _ in 0..120 {
            frame = motion.frame(0.0, 1.0 / 60.0);
        }
        assert!((frame.rotate_y - 5.0).abs() < EPS);
        assert!((frame.rotate_x - 5.0).abs() < EPS);
        assert!((frame.gloss_x - 80.0).abs() < EPS);
        assert!(frame.gloss_opacity.abs() < EPS);

        motion.pointer_left();
        for _ in 0..120 {
            frame = motion.frame(0.0, 1.0 / 60.0);
        }
        assert!(motion.is_resting());
        assert_eq!(frame.rotate_x, 0.0);
        assert_eq!(frame.rotate_y, 0.0);
    }
}
