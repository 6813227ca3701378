//! Static copy and records rendered by the landing page sections.

use crate::theme::Theme;

pub const BRAND: &str = "Nexus";
pub const TAGLINE: &str = "The modern platform for building exceptional digital experiences.";

/// Anchors of the sections the navigation can jump to.
pub const SECTION_FEATURES: &str = "features";
pub const SECTION_PRODUCT: &str = "product";
pub const SECTION_TESTIMONIALS: &str = "testimonials";
pub const SECTION_PRICING: &str = "pricing";

pub const SECTION_IDS: [&str; 4] = [
    SECTION_FEATURES,
    SECTION_PRODUCT,
    SECTION_TESTIMONIALS,
    SECTION_PRICING,
];

/// Line-art glyphs drawn on a 24x24 grid with `currentColor` strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Zap,
    Shield,
    Globe,
    Layers,
    LineChart,
    Palette,
    Star,
    Quote,
    ArrowRight,
    ChevronRight,
    Play,
    Sparkles,
    Sun,
    Moon,
    Menu,
    Close,
    Check,
    CheckCircle,
    TrendingUp,
    Lock,
    Github,
    Twitter,
    Linkedin,
    Youtube,
}

impl Icon {
    /// Glyph shown on the theme toggle for the active theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::Sun,
            Theme::Dark => Self::Moon,
        }
    }

    pub fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
            Self::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Self::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z",
                "M2 12h20",
                "M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z",
            ],
            Self::Layers => &[
                "m12 2 10 5-10 5L2 7l10-5z",
                "m2 17 10 5 10-5",
                "m2 12 10 5 10-5",
            ],
            Self::LineChart => &["M3 3v18h18", "m19 9-5 5-4-4-3 3"],
            Self::Palette => &[
                "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.9 0 1.7-.8 1.7-1.7 0-.4-.2-.8-.4-1.1-.3-.3-.4-.7-.4-1.1 0-.9.8-1.7 1.7-1.7H17c3 0 5-2.5 5-5.5C22 6 17.5 2 12 2z",
                "M7.5 10.5h.01",
                "M12 7.5h.01",
                "M16.5 10.5h.01",
            ],
            Self::Star => &[
                "m12 2 3.1 6.3 6.9 1-5 4.9 1.2 6.8-6.2-3.2-6.2 3.2L7 14.2 2 9.3l6.9-1L12 2z",
            ],
            Self::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.3-.8-2-2-2H4c-1.3 0-2 .8-2 2v6c0 1.3.8 2 2 2 1 0 1 0 1 1v1c0 1-1 2-2 2s-1 0-1 1v3c0 1 0 1 1 1z",
                "M15 21c3 0 7-1 7-8V5c0-1.3-.8-2-2-2h-4c-1.3 0-2 .8-2 2v6c0 1.3.8 2 2 2h.75c0 2.25.25 4-2.75 4v3c0 1 0 1 1 1z",
            ],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::ChevronRight => &["m9 5 7 7-7 7"],
            Self::Play => &["m6 3 14 9-14 9V3z"],
            Self::Sparkles => &[
                "m12 3-1.9 5.8a2 2 0 0 1-1.3 1.3L3 12l5.8 1.9a2 2 0 0 1 1.3 1.3L12 21l1.9-5.8a2 2 0 0 1 1.3-1.3L21 12l-5.8-1.9a2 2 0 0 1-1.3-1.3L12 3z",
            ],
            Self::Sun => &[
                "M12 8a4 4 0 1 0 0 8a4 4 0 1 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            Self::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Self::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Check => &["M5 13l4 4L19 7"],
            Self::CheckCircle => &["M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z"],
            Self::TrendingUp => &["M13 7h8m0 0v8m0-8l-8 8-4-4-6 6"],
            Self::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Self::Github => &[
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4",
                "M9 18c-4.51 2-5-2-7-2",
            ],
            Self::Twitter => &[
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            ],
            Self::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4a2 2 0 1 0 0-4z",
            ],
            Self::Youtube => &[
                "M2.5 17a24.1 24.1 0 0 1 0-10 2 2 0 0 1 1.4-1.4 49.6 49.6 0 0 1 16.2 0A2 2 0 0 1 21.5 7a24.1 24.1 0 0 1 0 10 2 2 0 0 1-1.4 1.4 49.6 49.6 0 0 1-16.2 0A2 2 0 0 1 2.5 17",
                "m10 15 5-3-5-3z",
            ],
        }
    }

    /// Glyphs drawn as filled shapes instead of strokes.
    pub fn filled(self) -> bool {
        matches!(self, Self::Star | Self::Play)
    }
}

/// Two-stop accent gradient, rendered at 135 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }

    pub fn to_css(self) -> String {
        format!("background-image: linear-gradient(135deg, {}, {});", self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    /// In-page anchor this link jumps to, if any.
    pub fn anchor(&self) -> Option<&'static str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Features",
        href: "#features",
    },
    NavLink {
        label: "Product",
        href: "#product",
    },
    NavLink {
        label: "Testimonials",
        href: "#testimonials",
    },
    NavLink {
        label: "Pricing",
        href: "#pricing",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logo {
    pub name: &'static str,
    pub width: u32,
}

pub const LOGOS: [Logo; 6] = [
    Logo {
        name: "Vercel",
        width: 120,
    },
    Logo {
        name: "Stripe",
        width: 100,
    },
    Logo {
        name: "Notion",
        width: 110,
    },
    Logo {
        name: "Linear",
        width: 100,
    },
    Logo {
        name: "Figma",
        width: 90,
    },
    Logo {
        name: "Discord",
        width: 120,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat {
        value: "10M+",
        label: "Users worldwide",
    },
    Stat {
        value: "99.9%",
        label: "Uptime SLA",
    },
    Stat {
        value: "150+",
        label: "Countries",
    },
    Stat {
        value: "500K+",
        label: "Deployments/day",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
}

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "Lightning Fast",
        description: "Optimized for speed with edge computing and smart caching strategies that deliver sub-second load times globally.",
        icon: Icon::Zap,
        gradient: Gradient::new("#eab308", "#f97316"),
    },
    Feature {
        title: "Enterprise Security",
        description: "Bank-grade encryption, SOC 2 compliance, and advanced threat protection to keep your data safe and secure.",
        icon: Icon::Shield,
        gradient: Gradient::new("#10b981", "#14b8a6"),
    },
    Feature {
        title: "Global Scale",
        description: "Deploy to 150+ edge locations worldwide. Your users get blazing fast experiences, wherever they are.",
        icon: Icon::Globe,
        gradient: Gradient::new("#3b82f6", "#06b6d4"),
    },
    Feature {
        title: "Seamless Integration",
        description: "Connect with your favorite tools and services. From databases to APIs, we integrate with everything.",
        icon: Icon::Layers,
        gradient: Gradient::new("#8b5cf6", "#a855f7"),
    },
    Feature {
        title: "Real-time Analytics",
        description: "Comprehensive insights and metrics at your fingertips. Understand user behavior and optimize performance.",
        icon: Icon::LineChart,
        gradient: Gradient::new("#ec4899", "#f43f5e"),
    },
    Feature {
        title: "Beautiful Design",
        description: "Stunning templates and components that are fully customizable. Build beautiful interfaces effortlessly.",
        icon: Icon::Palette,
        gradient: Gradient::new("#6366f1", "#3b82f6"),
    },
];

/// Floating card pinned to the product screenshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HighlightCard {
    pub title: &'static str,
    pub caption: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
}

pub const SHOWCASE_CARDS: [HighlightCard; 3] = [
    HighlightCard {
        title: "Instant Previews",
        caption: "See changes in real-time",
        icon: Icon::Zap,
        gradient: Gradient::new("#8b5cf6", "#6366f1"),
    },
    HighlightCard {
        title: "Auto Scaling",
        caption: "Handle any traffic",
        icon: Icon::CheckCircle,
        gradient: Gradient::new("#10b981", "#14b8a6"),
    },
    HighlightCard {
        title: "99.99% Uptime",
        caption: "Enterprise reliability",
        icon: Icon::TrendingUp,
        gradient: Gradient::new("#ec4899", "#f43f5e"),
    },
];

pub const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=1600&h=900&fit=crop&q=80";
pub const SHOWCASE_IMAGE: &str =
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=1600&h=1000&fit=crop&q=80";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
}

pub const MAX_RATING: u8 = 5;

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "Nexus has completely transformed how we build and deploy our applications. The developer experience is unmatched.",
        author: "Sarah Chen",
        role: "CTO at TechFlow",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "We migrated our entire infrastructure to Nexus and saw a 40% reduction in deployment time. Absolutely game-changing.",
        author: "Marcus Johnson",
        role: "Lead Engineer at ScaleUp",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "The best platform I have ever used. The team behind Nexus truly understands what developers need.",
        author: "Emily Rodriguez",
        role: "Founder at DevStudio",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "From zero to production in minutes. Nexus handles all the complexity so we can focus on building great products.",
        author: "David Kim",
        role: "VP Engineering at CloudBase",
        avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "The performance improvements we saw after switching to Nexus were incredible. Our users noticed immediately.",
        author: "Lisa Park",
        role: "Product Lead at Momentum",
        avatar: "https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
    Testimonial {
        quote: "Nexus is the infrastructure platform we always wished existed. It just works, every single time.",
        author: "James Wilson",
        role: "Senior Developer at Axiom",
        avatar: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&q=80",
        rating: 5,
    },
];

impl Testimonial {
    pub fn stars(&self) -> u8 {
        self.rating.min(MAX_RATING)
    }

    pub fn rating_label(&self) -> String {
        format!("Rated {} out of {MAX_RATING}", self.stars())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [NavLink],
}

const fn placeholder(label: &'static str) -> NavLink {
    NavLink { label, href: "#" }
}

pub const FOOTER_COLUMNS: [FooterColumn; 4] = [
    FooterColumn {
        heading: "Product",
        links: &[
            NavLink {
                label: "Features",
                href: "#features",
            },
            NavLink {
                label: "Pricing",
                href: "#pricing",
            },
            placeholder("Changelog"),
            placeholder("Docs"),
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            placeholder("About"),
            placeholder("Blog"),
            placeholder("Careers"),
            placeholder("Contact"),
        ],
    },
    FooterColumn {
        heading: "Resources",
        links: &[
            placeholder("Community"),
            placeholder("Help Center"),
            placeholder("Partners"),
            placeholder("Status"),
        ],
    },
    FooterColumn {
        heading: "Legal",
        links: &[
            placeholder("Privacy"),
            placeholder("Terms"),
            placeholder("Cookie Policy"),
            placeholder("Licenses"),
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: Icon,
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        name: "Twitter",
        href: "#",
        icon: Icon::Twitter,
    },
    SocialLink {
        name: "GitHub",
        href: "#",
        icon: Icon::Github,
    },
    SocialLink {
        name: "LinkedIn",
        href: "#",
        icon: Icon::Linkedin,
    },
    SocialLink {
        name: "YouTube",
        href: "#",
        icon: Icon::Youtube,
    },
];

pub const COPYRIGHT: &str = "\u{a9} 2026 Nexus. All rights reserved.";
pub const TRUST_LINE: &str = "No credit card required \u{2022} Free tier available \u{2022} Cancel anytime";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_nav_anchor_has_a_section() {
        for link in NAV_LINKS {
            let anchor = link.anchor();
            assert!(
                anchor.is_some_and(|id| SECTION_IDS.contains(&id)),
                "{} points at a missing section",
                link.href
            );
        }
    }

    #[test]
    fn footer_anchors_resolve_or_are_placeholders() {
        for column in FOOTER_COLUMNS {
            for link in column.links {
                match link.anchor() {
                    Some(id) => assert!(SECTION_IDS.contains(&id), "{}", link.href),
                    None => assert_eq!(link.href, "#"),
                }
            }
        }
    }

    #[test]
    fn bare_hash_is_not_an_anchor() {
        assert_eq!(placeholder("Docs").anchor(), None);
        assert_eq!(NAV_LINKS[0].anchor(), Some("features"));
    }

    #[test]
    fn every_icon_has_path_data() {
        let icons = FEATURES
            .iter()
            .map(|feature| feature.icon)
            .chain(SHOWCASE_CARDS.iter().map(|card| card.icon))
            .chain(SOCIAL_LINKS.iter().map(|social| social.icon));
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{icon:?}");
        }
    }

    #[test]
    fn feature_titles_are_unique() {
        let mut titles: Vec<&str> = FEATURES.iter().map(|feature| feature.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), FEATURES.len());
    }

    #[test]
    fn ratings_never_exceed_the_scale() {
        for testimonial in TESTIMONIALS {
            assert!(testimonial.stars() <= MAX_RATING);
        }
        assert_eq!(TESTIMONIALS[0].rating_label(), "Rated 5 out of 5");
    }

    #[test]
    fn gradient_renders_both_stops() {
        assert_eq!(
            Gradient::new("#fff", "#000").to_css(),
            "background-image: linear-gradient(135deg, #fff, #000);"
        );
    }

    #[test]
    fn theme_toggle_shows_the_active_theme() {
        assert_eq!(Icon::for_theme(Theme::Light), Icon::Sun);
        assert_eq!(Icon::for_theme(Theme::Dark), Icon::Moon);
    }
}
