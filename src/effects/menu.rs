pub const ACTIVE_CLASS: &str = "active";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconSegment {
    pub transform: &'static str,
    pub opacity: &'static str,
}

impl IconSegment {
    const BAR: Self = Self {
        transform: "none",
        opacity: "1",
    };

    pub fn css(self) -> String {
        format!("transform: {}; opacity: {};", self.transform, self.opacity)
    }
}

const CLOSED_ICON: [IconSegment; 3] = [IconSegment::BAR; 3];

const OPEN_ICON: [IconSegment; 3] = [
    IconSegment {
        transform: "rotate(45deg) translate(5px, 5px)",
        opacity: "1",
    },
    IconSegment {
        transform: "none",
        opacity: "0",
    },
    IconSegment {
        transform: "rotate(-45deg) translate(7px, -6px)",
        opacity: "1",
    },
];

/// Open/closed state of the slide-in mobile menu. Starts closed.
///
/// The panel's active class, the toggle's `aria-expanded` and the hamburger
/// icon are all derived from this one flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flips the state and returns the new one.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the panel was followed. Always ends closed.
    pub fn close_on_link_activation(&mut self) {
        self.open = false;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn closed(mut self) -> Self {
        self.close_on_link_activation();
        self
    }

    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    pub fn panel_class(self) -> Option<&'static str> {
        self.open.then_some(ACTIVE_CLASS)
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open {
            "Close menu"
        } else {
            "Open menu"
        }
    }

    pub fn icon(self) -> [IconSegment; 3] {
        if self.open {
            OPEN_ICON
        } else {
            CLOSED_ICON
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MobileMenu::default();

        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.panel_class(), None);
    }

    #[test]
    fn double_toggle_returns_to_closed_with_aria_in_sync() {
        let mut menu = MobileMenu::default();

        assert!(menu.toggle());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.panel_class(), Some(ACTIVE_CLASS));

        assert!(!menu.toggle());
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.panel_class(), None);
    }

    #[test]
    fn link_activation_closes_open_menu() {
        let mut menu = MobileMenu::default().toggled();
        menu.close_on_link_activation();

        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
    }

    #[test]
    fn link_activation_on_closed_menu_is_a_no_op() {
        let menu = MobileMenu::default();
        assert_eq!(menu.closed(), menu);
    }

    #[test]
    fn icon_forms_an_x_when_open() {
        let open = MobileMenu::default().toggled().icon();

        assert!(open[0].transform.starts_with("rotate(45deg)"));
        assert_eq!(open[1].opacity, "0");
        assert!(open[2].transform.starts_with("rotate(-45deg)"));
    }

    #[test]
    fn icon_shows_three_bars_when_closed() {
        let closed = MobileMenu::default().icon();

        assert!(closed
            .iter()
            .all(|segment| segment.transform == "none" && segment.opacity == "1"));
        assert_eq!(closed[0].css(), "transform: none; opacity: 1;");
    }
}
