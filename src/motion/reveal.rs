//! One-time reveal animations played when an element enters the viewport.

use super::{Easing, Length, Spring, VisualFrame};

pub const DEFAULT_REVEAL_DURATION_SECS: f64 = 0.6;
pub const DEFAULT_STAGGER_STEP_SECS: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealPreset {
    #[default]
    FadeUp,
    ScaleIn,
    SlideLeft,
    SlideRight,
    FlipIn,
    BlurIn,
    BounceIn,
    RotateIn,
    SlideUpFade,
    ZoomIn,
    /// Opacity only.
    Fade,
}

impl RevealPreset {
    pub const ALL: [Self; 11] = [
        Self::FadeUp,
        Self::ScaleIn,
        Self::SlideLeft,
        Self::SlideRight,
        Self::FlipIn,
        Self::BlurIn,
        Self::BounceIn,
        Self::RotateIn,
        Self::SlideUpFade,
        Self::ZoomIn,
        Self::Fade,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::FadeUp => "fade-up",
            Self::ScaleIn => "scale-in",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::FlipIn => "flip-in",
            Self::BlurIn => "blur-in",
            Self::BounceIn => "bounce-in",
            Self::RotateIn => "rotate-in",
            Self::SlideUpFade => "slide-up-fade",
            Self::ZoomIn => "zoom-in",
            Self::Fade => "fade",
        }
    }

    /// Frame before the element has been seen.
    pub fn hidden(self) -> VisualFrame {
        let base = VisualFrame::IDENTITY.with_opacity(0.0);
        match self {
            Self::FadeUp => base.with_y(Length::Px(30.0)),
            Self::ScaleIn => base.with_scale(0.95),
            Self::SlideLeft => base.with_x(Length::Px(-30.0)),
            Self::SlideRight => base.with_x(Length::Px(30.0)),
            Self::FlipIn => base.with_rotate_x(-90.0).with_perspective(1000.0),
            Self::BlurIn => base.with_blur(20.0),
            Self::BounceIn => base.with_scale(0.3).with_y(Length::Px(50.0)),
            Self::RotateIn => base.with_rotate(-180.0).with_scale(0.0),
            Self::SlideUpFade => base.with_y(Length::Px(60.0)),
            Self::ZoomIn => base.with_scale(0.5),
            Self::Fade => base,
        }
    }

    /// Frame once revealed. Flip-in keeps its perspective so the transform
    /// interpolates between matching function lists.
    pub fn visible(self) -> VisualFrame {
        match self {
            Self::FlipIn => VisualFrame::IDENTITY.with_perspective(1000.0),
            _ => VisualFrame::IDENTITY,
        }
    }

    pub fn frame(self, revealed: bool) -> VisualFrame {
        if revealed {
            self.visible()
        } else {
            self.hidden()
        }
    }

    pub fn easing(self) -> Easing {
        match self {
            Self::BounceIn => Easing::Spring(Spring::BOUNCY),
            _ => Easing::REVEAL,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTransition {
    pub duration_secs: f64,
    pub delay_secs: f64,
    pub easing: Easing,
}

impl RevealTransition {
    pub fn for_preset(preset: RevealPreset, duration_secs: f64, delay_secs: f64) -> Self {
        let easing = preset.easing();
        let duration_secs = match easing {
            Easing::Spring(spring) => spring.settle_duration(),
            _ => duration_secs,
        };
        Self {
            duration_secs: duration_secs.max(0.0),
            delay_secs: delay_secs.max(0.0),
            easing,
        }
    }

    /// Inline `transition` declaration covering every animated property.
    pub fn to_css(&self) -> String {
        let easing = self.easing.to_css();
        let timing = format!("{:.2}s {easing} {:.2}s", self.duration_secs, self.delay_secs);
        format!("transition: opacity {timing}, transform {timing}, filter {timing};")
    }
}

pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// Intersection root margin that shrinks the viewport by `inset_px` on every side.
pub fn inset_root_margin(inset_px: u32) -> String {
    if inset_px == 0 {
        "0px".to_string()
    } else {
        format!("-{inset_px}px")
    }
}

/// Visibility latch fed by intersection notifications.
///
/// With `once` set the element stays revealed after its first sighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    once: bool,
    visible: bool,
}

impl RevealLatch {
    pub fn new(once: bool) -> Self {
        Self {
            once,
            visible: false,
        }
    }

    /// Returns `true` when visibility changed.
    pub fn update(&mut self, intersecting: bool) -> bool {
        let next = if self.once {
            self.visible || intersecting
        } else {
            intersecting
        };
        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// No further notification can change the state.
    pub fn is_settled(&self) -> bool {
        self.once && self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_preset_starts_transparent_and_ends_opaque() {
        for preset in RevealPreset::ALL {
            assert_eq!(preset.hidden().opacity, 0.0, "{}", preset.as_str());
            assert_eq!(preset.visible().opacity, 1.0, "{}", preset.as_str());
        }
    }

    #[test]
    fn fade_up_hides_thirty_pixels_low() {
        assert_eq!(RevealPreset::FadeUp.hidden().translate_y, Length::Px(30.0));
        assert_eq!(RevealPreset::FadeUp.frame(true), VisualFrame::IDENTITY);
    }

    #[test]
    fn bounce_in_uses_spring_timing() {
        let transition = RevealTransition::for_preset(RevealPreset::BounceIn, 0.6, 0.2);

        assert!(matches!(transition.easing, Easing::Spring(_)));
        assert_eq!(transition.duration_secs, Spring::BOUNCY.settle_duration());
        assert!(transition.to_css().contains("linear("));
    }

    #[test]
    fn transition_css_covers_all_properties() {
        let css = RevealTransition::for_preset(RevealPreset::FadeUp, 0.5, 0.3).to_css();
        assert_eq!(
            css,
            "transition: opacity 0.50s cubic-bezier(0.25, 0.4, 0.25, 1) 0.30s, \
             transform 0.50s cubic-bezier(0.25, 0.4, 0.25, 1) 0.30s, \
             filter 0.50s cubic-bezier(0.25, 0.4, 0.25, 1) 0.30s;"
        );
    }

    #[test]
    fn negative_timings_are_floored() {
        let transition = RevealTransition::for_preset(RevealPreset::Fade, -1.0, -0.5);
        assert_eq!((transition.duration_secs, transition.delay_secs), (0.0, 0.0));
    }

    #[test]
    fn stagger_grows_linearly() {
        assert_eq!(stagger_delay(0, DEFAULT_STAGGER_STEP_SECS), 0.0);
        assert!((stagger_delay(3, DEFAULT_STAGGER_STEP_SECS) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn root_margin_is_negative_inset() {
        assert_eq!(inset_root_margin(100), "-100px");
        assert_eq!(inset_root_margin(0), "0px");
    }

    #[test]
    fn once_latch_stays_visible() {
        let mut latch = RevealLatch::new(true);

        assert!(!latch.update(false));
        assert!(latch.update(true));
        assert!(latch.is_settled());
        assert!(!latch.update(false));
        assert!(latch.is_visible());
    }

    #[test]
    fn repeating_latch_follows_intersection() {
        let mut latch = RevealLatch::new(false);

        assert!(latch.update(true));
        assert!(latch.update(false));
        assert!(!latch.is_visible());
        assert!(!latch.is_settled());
    }
}
