//! Navigation bar state: scroll restyle and the mobile menu overlay

/// Scroll offset in pixels at which the bar turns opaque
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const MENU_ITEMS: [&str; 4] = ["Collections", "New Arrivals", "About", "Contact"];

/// Seconds between two menu labels sliding in
const MENU_ITEM_STAGGER: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAppearance {
    /// Top of the page: no background, tall padding
    Transparent,
    /// Scrolled: blurred translucent background, compact padding
    Opaque,
}

impl NavAppearance {
    pub fn from_scroll(offset: f64) -> Self {
        if offset >= SCROLL_THRESHOLD {
            NavAppearance::Opaque
        } else {
            NavAppearance::Transparent
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            NavAppearance::Transparent => "site-nav site-nav--transparent",
            NavAppearance::Opaque => "site-nav site-nav--opaque",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn open(&mut self) {
        *self = MenuState::Open;
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Labels rendered in the overlay, in order; none while closed
    pub fn visible_items(&self) -> &'static [&'static str] {
        match self {
            MenuState::Open => &MENU_ITEMS,
            MenuState::Closed => &[],
        }
    }
}

/// Entrance delay in seconds of the menu label at `index`
pub fn item_delay(index: usize) -> f64 {
    MENU_ITEM_STAGGER * index as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary() {
        assert_eq!(NavAppearance::from_scroll(0.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_scroll(49.0), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_scroll(49.99), NavAppearance::Transparent);
        assert_eq!(NavAppearance::from_scroll(50.0), NavAppearance::Opaque);
        assert_eq!(NavAppearance::from_scroll(1200.0), NavAppearance::Opaque);
    }

    #[test]
    fn menu_starts_closed_and_empty() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert!(menu.visible_items().is_empty());
    }

    #[test]
    fn open_menu_lists_labels_in_order() {
        let mut menu = MenuState::default();
        menu.open();
        assert!(menu.is_open());
        assert_eq!(
            menu.visible_items(),
            &["Collections", "New Arrivals", "About", "Contact"]
        );
    }

    #[test]
    fn close_hides_labels() {
        let mut menu = MenuState::Open;
        menu.close();
        assert!(!menu.is_open());
        assert!(menu.visible_items().is_empty());
    }

    #[test]
    fn labels_enter_a_tenth_of_a_second_apart() {
        let delays: Vec<f64> = (0..MENU_ITEMS.len()).map(item_delay).collect();
        for (i, d) in delays.iter().enumerate() {
            assert!((d - 0.1 * i as f64).abs() < 1e-9);
        }
    }
}
