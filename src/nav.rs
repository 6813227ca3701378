/// Navbar presentation state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Page has scrolled past the threshold; the bar turns opaque.
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled { scroll_y: f64, threshold: f64 },
    ToggleMenu,
    /// A link in the mobile menu was followed.
    Navigate,
}

impl NavState {
    pub fn apply(self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled {
                scroll_y,
                threshold,
            } => Self {
                scrolled: scroll_y > threshold,
                ..self
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self
            },
            NavAction::Navigate => Self {
                menu_open: false,
                ..self
            },
        }
    }

    pub fn header_class(self) -> &'static str {
        if self.scrolled {
            "navbar is-scrolled"
        } else {
            "navbar"
        }
    }

    pub fn menu_label(self) -> &'static str {
        if self.menu_open {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
