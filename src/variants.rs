//! Style variants of the shared primitives, resolved to stylesheet classes.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--default",
            Self::Primary => "btn--primary",
            Self::Outline => "btn--outline",
            Self::Ghost => "btn--ghost",
            Self::Link => "btn--link",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    Large,
    /// Square, for a lone glyph.
    Icon,
}

impl ButtonSize {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn--md",
            Self::Small => "btn--sm",
            Self::Large => "btn--lg",
            Self::Icon => "btn--icon",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize) -> String {
    format!("btn {} {}", variant.class(), size.class())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "badge--default",
            Self::Primary => "badge--primary",
            Self::Success => "badge--success",
            Self::Warning => "badge--warning",
        }
    }
}

pub fn badge_class(variant: BadgeVariant) -> String {
    format!("badge {}", variant.class())
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardVariant {
    #[default]
    Default,
    Glass,
    Gradient,
    Glow,
}

impl CardVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "card--default",
            Self::Glass => "card--glass",
            Self::Gradient => "card--gradient",
            Self::Glow => "card--glow",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CardHover {
    #[default]
    Lift,
    Glow,
    Scale,
    None,
}

impl CardHover {
    pub fn class(self) -> Option<&'static str> {
        match self {
            Self::Lift => Some("card--hover-lift"),
            Self::Glow => Some("card--hover-glow"),
            Self::Scale => Some("card--hover-scale"),
            Self::None => None,
        }
    }
}

pub fn card_class(variant: CardVariant, hover: CardHover) -> String {
    match hover.class() {
        Some(hover) => format!("card {} {hover}", variant.class()),
        None => format!("card {}", variant.class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_plain_primitives() {
        assert_eq!(
            button_class(ButtonVariant::default(), ButtonSize::default()),
            "btn btn--default btn--md"
        );
        assert_eq!(badge_class(BadgeVariant::default()), "badge badge--default");
        assert_eq!(
            card_class(CardVariant::default(), CardHover::default()),
            "card card--default card--hover-lift"
        );
    }

    #[test]
    fn hover_none_adds_no_class() {
        assert_eq!(card_class(CardVariant::Glass, CardHover::None), "card card--glass");
    }

    #[test]
    fn feature_card_glows_on_hover() {
        assert_eq!(
            card_class(CardVariant::Default, CardHover::Glow),
            "card card--default card--hover-glow"
        );
    }

    #[test]
    fn button_combinations_compose() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::Large),
            "btn btn--primary btn--lg"
        );
        assert_eq!(
            button_class(ButtonVariant::Ghost, ButtonSize::Icon),
            "btn btn--ghost btn--icon"
        );
    }

    #[test]
    fn variant_classes_are_distinct() {
        let mut classes = vec![
            ButtonVariant::Default.class(),
            ButtonVariant::Primary.class(),
            ButtonVariant::Outline.class(),
            ButtonVariant::Ghost.class(),
            ButtonVariant::Link.class(),
            BadgeVariant::Default.class(),
            BadgeVariant::Primary.class(),
            BadgeVariant::Success.class(),
            BadgeVariant::Warning.class(),
            CardVariant::Default.class(),
            CardVariant::Glass.class(),
            CardVariant::Gradient.class(),
            CardVariant::Glow.class(),
        ];
        let total = classes.len();
        classes.sort_unstable();
        classes.dedup();
        assert_eq!(classes.len(), total);
    }
}
