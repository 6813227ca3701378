use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    pub const ZERO: Self = Self::Px(0.0);
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value:.2}px"),
            Self::Percent(value) => write!(f, "{value:.2}%"),
        }
    }
}

/// Visual parameters for one element at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualFrame {
    pub opacity: f64,
    pub translate_x: Length,
    pub translate_y: Length,
    pub scale: f64,
    /// Degrees around the z axis.
    pub rotate: f64,
    /// Degrees around the x axis.
    pub rotate_x: f64,
    pub perspective: Option<f64>,
    /// Gaussian blur radius in px.
    pub blur: f64,
}

impl Default for VisualFrame {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl VisualFrame {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: Length::ZERO,
        translate_y: Length::ZERO,
        scale: 1.0,
        rotate: 0.0,
        rotate_x: 0.0,
        perspective: None,
        blur: 0.0,
    };

    pub const fn with_opacity(mut self, value: f64) -> Self {
        self.opacity = value;
        self
    }

    pub const fn with_x(mut self, value: Length) -> Self {
        self.translate_x = value;
        self
    }

    pub const fn with_y(mut self, value: Length) -> Self {
        self.translate_y = value;
        self
    }

    pub const fn with_scale(mut self, value: f64) -> Self {
        self.scale = value;
        self
    }

    pub const fn with_rotate(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }

    pub const fn with_rotate_x(mut self, degrees: f64) -> Self {
        self.rotate_x = degrees;
        self
    }

    pub const fn with_perspective(mut self, px: f64) -> Self {
        self.perspective = Some(px);
        self
    }

    pub const fn with_blur(mut self, px: f64) -> Self {
        self.blur = px;
        self
    }

    pub fn transform(&self) -> String {
        let mut transform = String::new();
        if let Some(perspective) = self.perspective {
            transform.push_str(&format!("perspective({perspective:.0}px) "));
        }
        transform.push_str(&format!(
            "translate3d({}, {}, 0) scale({:.3}) rotate({:.2}deg) rotateX({:.2}deg)",
            self.translate_x, self.translate_y, self.scale, self.rotate, self.rotate_x
        ));
        transform
    }

    /// Inline CSS declarations for this frame.
    pub fn to_style(&self) -> String {
        let mut style = format!(
            "opacity: {:.3}; transform: {};",
            self.opacity.clamp(0.0, 1.0),
            self.transform()
        );
        if self.blur > 0.0 {
            style.push_str(&format!(" filter: blur({:.1}px);", self.blur));
        }
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_renders_neutral_transform() {
        assert_eq!(
            VisualFrame::IDENTITY.to_style(),
            "opacity: 1.000; transform: translate3d(0.00px, 0.00px, 0) scale(1.000) rotate(0.00deg) rotateX(0.00deg);"
        );
    }

    #[test]
    fn percent_translation_and_blur_render_with_units() {
        let frame = VisualFrame::IDENTITY
            .with_y(Length::Percent(25.0))
            .with_blur(20.0)
            .with_opacity(0.0);

        let style = frame.to_style();
        assert!(style.starts_with("opacity: 0.000;"));
        assert!(style.contains("translate3d(0.00px, 25.00%, 0)"));
        assert!(style.ends_with("filter: blur(20.0px);"));
    }

    #[test]
    fn perspective_prefixes_the_transform() {
        let frame = VisualFrame::IDENTITY.with_perspective(1000.0).with_rotate_x(-90.0);
        assert!(frame.transform().starts_with("perspective(1000px) translate3d("));
        assert!(frame.transform().ends_with("rotateX(-90.00deg)"));
    }

    #[test]
    fn opacity_is_clamped_when_rendered() {
        assert!(VisualFrame::IDENTITY.with_opacity(1.4).to_style().starts_with("opacity: 1.000;"));
    }
}
