//! Page configuration read from `data-*` attributes on the mount element.

use crate::logging::LogLevel;

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DEFAULT_NAV_SCROLL_THRESHOLD_PX: f64 = 20.0;
pub const DEFAULT_REVEAL_MARGIN_PX: u32 = 100;
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const NAV_SCROLL_THRESHOLD_PX_BOUNDS: (f64, f64) = (0.0, 400.0);
const REVEAL_MARGIN_PX_BOUNDS: (u32, u32) = (0, 400);

#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    pub theme_key: String,
    pub nav_scroll_threshold_px: f64,
    pub reveal_margin_px: u32,
    pub log_level: LogLevel,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_KEY.to_string(),
            nav_scroll_threshold_px: DEFAULT_NAV_SCROLL_THRESHOLD_PX,
            reveal_margin_px: DEFAULT_REVEAL_MARGIN_PX,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl LandingConfig {
    /// `lookup` receives the attribute name without the `data-` prefix.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let theme_key =
            parse_non_empty_string(&lookup, "theme-key").unwrap_or_else(|| DEFAULT_THEME_KEY.to_string());
        let nav_scroll_threshold_px = parse_f64_with_bounds(
            &lookup,
            "nav-scroll-threshold",
            DEFAULT_NAV_SCROLL_THRESHOLD_PX,
            NAV_SCROLL_THRESHOLD_PX_BOUNDS,
        );
        let reveal_margin_px = parse_u32_with_bounds(
            &lookup,
            "reveal-margin",
            DEFAULT_REVEAL_MARGIN_PX,
            REVEAL_MARGIN_PX_BOUNDS,
        );
        let log_level = parse_non_empty_string(&lookup, "log-level")
            .and_then(|value| LogLevel::from_token(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            theme_key,
            nav_scroll_threshold_px,
            reveal_margin_px,
            log_level,
        }
    }
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    lookup(name)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |name| values.get(name).cloned()
    }

    #[test]
    fn missing_attributes_use_defaults() {
        assert_eq!(LandingConfig::from_lookup(|_| None), LandingConfig::default());
    }

    #[test]
    fn valid_attributes_override_defaults() {
        let config = LandingConfig::from_lookup(lookup_from(&[
            ("theme-key", " nexus-theme "),
            ("nav-scroll-threshold", "48.5"),
            ("reveal-margin", "0"),
            ("log-level", "debug"),
        ]));

        assert_eq!(config.theme_key, "nexus-theme");
        assert_eq!(config.nav_scroll_threshold_px, 48.5);
        assert_eq!(config.reveal_margin_px, 0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_bounds_and_garbage_fall_back() {
        let config = LandingConfig::from_lookup(lookup_from(&[
            ("theme-key", "   "),
            ("nav-scroll-threshold", "-5"),
            ("reveal-margin", "9000"),
            ("log-level", "verbose"),
        ]));

        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let config = LandingConfig::from_lookup(lookup_from(&[("nav-scroll-threshold", "NaN")]));
        assert_eq!(config.nav_scroll_threshold_px, DEFAULT_NAV_SCROLL_THRESHOLD_PX);
    }
}
