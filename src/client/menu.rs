//! Mobile navigation menu

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Hamburger click; also locks page scrolling
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close button or a menu link
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Key press; only Escape on an open menu has an effect
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.open {
            self.open = false;
            return true;
        }
        false
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Value for `body.style.overflow`
    pub const fn body_overflow(self) -> &'static str {
        if self.open {
            "hidden"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_locks_scroll() {
        let mut menu = MobileMenu::default();
        menu.open();
        assert!(menu.is_open());
        assert_eq!(menu.body_overflow(), "hidden");
        menu.close();
        assert_eq!(menu.body_overflow(), "");
    }

    #[test]
    fn test_escape_only_when_open() {
        let mut menu = MobileMenu::default();
        assert!(!menu.on_key("Escape"));
        menu.open();
        assert!(!menu.on_key("Enter"));
        assert!(menu.is_open());
        assert!(menu.on_key("Escape"));
        assert!(!menu.is_open());
    }
}
