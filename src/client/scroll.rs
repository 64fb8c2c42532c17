//! Scroll helpers: scroll-to-top button and in-page anchors

/// Scroll offset above which the scroll-to-top button shows, px
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Floating scroll-to-top button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    /// Scroll event; returns the new visibility
    pub fn on_scroll(&mut self, offset: f64) -> bool {
        self.visible = offset > SCROLL_TOP_THRESHOLD;
        self.visible
    }

    pub const fn is_visible(self) -> bool {
        self.visible
    }

    /// Inline `(opacity, transform)` for the button
    pub const fn style(self) -> (&'static str, &'static str) {
        if self.visible {
            ("1", "translateY(0)")
        } else {
            ("0", "translateY(20px)")
        }
    }
}

/// Element id an in-page link should smooth-scroll to
///
/// A bare `#` and non-fragment links are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        let mut button = ScrollToTop::default();
        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(300.5));
        assert_eq!(button.style(), ("1", "translateY(0)"));
        assert!(!button.on_scroll(0.0));
        assert_eq!(button.style(), ("0", "translateY(20px)"));
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#contact"), Some("contact"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/about"), None);
        assert_eq!(anchor_target(""), None);
    }
}
