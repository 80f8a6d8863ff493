pub const TOGGLE_ACTIVE_CLASS: &str = "active";
pub const MENU_OPEN_CLASS: &str = "mobile-open";

/// Open/closed flag of the mobile navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> MenuView {
        self.open = !self.open;
        log::debug!("Mobile menu toggled, open: {}", self.open);
        self.view()
    }

    /// Closing an already closed menu changes nothing but still yields the
    /// closed view, so the page can be re-synced unconditionally.
    pub fn close(&mut self) -> MenuView {
        if self.open {
            log::debug!("Mobile menu closed");
        }
        self.open = false;
        self.view()
    }

    pub fn view(&self) -> MenuView {
        MenuView { open: self.open }
    }
}

/// DOM projection of [`MenuState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
}

impl MenuView {
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Inline `overflow` for the body; empty clears the property.
    pub fn body_overflow(&self) -> &'static str {
        if self.open { "hidden" } else { "" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.view().aria_expanded(), "false");
        assert_eq!(menu.view().body_overflow(), "");
    }

    #[test]
    fn test_toggle_flips() {
        let mut menu = MenuState::default();
        let view = menu.toggle();
        assert!(view.open);
        assert_eq!(view.aria_expanded(), "true");
        assert_eq!(view.body_overflow(), "hidden");

        let view = menu.toggle();
        assert!(!view.open);
        assert_eq!(view.body_overflow(), "");
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut menu = MenuState::default();
        assert_eq!(menu.close(), menu.close());
        menu.toggle();
        assert!(!menu.close().open);
        assert!(!menu.is_open());
    }
}
