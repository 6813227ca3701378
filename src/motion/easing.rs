//! Timing curves for reveal transitions.

const SPRING_REST_TOLERANCE: f64 = 0.001;
const SPRING_CSS_SAMPLES: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    EaseInOut,
    CubicBezier(f64, f64, f64, f64),
    Spring(Spring),
}

impl Easing {
    /// Curve shared by the scroll reveals.
    pub const REVEAL: Self = Self::CubicBezier(0.25, 0.4, 0.25, 1.0);

    /// Maps normalized time to normalized progress.
    pub fn apply(&self, t: f64) -> f64 {
        match *self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
            Self::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
            Self::Spring(spring) => {
                let t = t.clamp(0.0, 1.0);
                spring.position(t * spring.settle_duration())
            }
        }
    }

    pub fn to_css(&self) -> String {
        match *self {
            Self::Linear => "linear".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier(x1, y1, x2, y2) => format!("cubic-bezier({x1}, {y1}, {x2}, {y2})"),
            Self::Spring(spring) => spring.css_linear(SPRING_CSS_SAMPLES),
        }
    }
}

/// Damped harmonic oscillator released from rest at 0 toward a target of 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    /// Overshooting spring used by the bounce-in reveal.
    pub const BOUNCY: Self = Self::new(300.0, 15.0, 1.0);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Position after `t` seconds.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }

        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        if !omega.is_finite() || !zeta.is_finite() || omega <= 0.0 {
            return 1.0;
        }

        if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            let envelope = (-zeta * omega * t).exp();
            1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
        } else if (zeta - 1.0).abs() <= f64::EPSILON {
            1.0 - (-omega * t).exp() * (1.0 + omega * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let fast = -omega * (zeta + root);
            let slow = -omega * (zeta - root);
            1.0 - (fast * (slow * t).exp() - slow * (fast * t).exp()) / (fast - slow)
        }
    }

    /// Seconds until the oscillation envelope falls inside the rest tolerance.
    pub fn settle_duration(&self) -> f64 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio();
        if !omega.is_finite() || !zeta.is_finite() || omega <= 0.0 || zeta <= 0.0 {
            return 1.0;
        }

        let decay = if zeta < 1.0 {
            zeta * omega
        } else {
            omega * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        (1.0 / SPRING_REST_TOLERANCE).ln() / decay
    }

    /// CSS `linear()` easing sampled over [`Spring::settle_duration`].
    pub fn css_linear(&self, samples: usize) -> String {
        let samples = samples.max(2);
        let duration = self.settle_duration();
        let stops: Vec<String> = (0..=samples)
            .map(|index| {
                let t = index as f64 / samples as f64;
                let value = if index == samples {
                    1.0
                } else {
                    self.position(t * duration)
                };
                format!("{value:.4}")
            })
            .collect();
        format!("linear({})", stops.join(", "))
    }
}

/// Solves a CSS cubic-bezier timing function at `t`.
///
/// Newton-Raphson on the x polynomial with a bisection fallback.
fn cubic_bezier(t: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let sample_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = t;
    for _ in 0..8 {
        let error = sample_x(s) - t;
        if error.abs() < 1e-7 {
            return sample_y(s);
        }
        let slope = slope_x(s);
        if slope.abs() < 1e-6 {
            break;
        }
        s -= error / slope;
    }

    let (mut low, mut high) = (0.0, 1.0);
    s = t;
    for _ in 0..64 {
        let x = sample_x(s);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            low = s;
        } else {
            high = s;
        }
        s = (low + high) / 2.0;
    }
    sample_y(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bezier_endpoints_are_exact() {
        assert_eq!(Easing::REVEAL.apply(0.0), 0.0);
        assert_eq!(Easing::REVEAL.apply(1.0), 1.0);
        assert_eq!(Easing::REVEAL.apply(-1.0), 0.0);
        assert_eq!(Easing::REVEAL.apply(2.0), 1.0);
    }

    #[test]
    fn reveal_curve_is_monotone() {
        let mut previous = 0.0;
        for step in 1..=100 {
            let value = Easing::REVEAL.apply(f64::from(step) / 100.0);
            assert!(value >= previous - 1e-9, "dropped at step {step}");
            previous = value;
        }
    }

    #[test]
    fn ease_in_out_is_symmetric() {
        let a = Easing::EaseInOut.apply(0.25);
        let b = Easing::EaseInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bezier_with_linear_controls_is_identity() {
        let value = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75).apply(0.3);
        assert!((value - 0.3).abs() < 1e-6);
    }

    #[test]
    fn spring_starts_at_rest_and_settles_on_target() {
        let spring = Spring::BOUNCY;
        assert_eq!(spring.position(0.0), 0.0);

        let settled = spring.position(spring.settle_duration());
        assert!((settled - 1.0).abs() <= SPRING_REST_TOLERANCE * 1.5);
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let spring = Spring::BOUNCY;
        let peak = (1..200)
            .map(|step| spring.position(f64::from(step) / 200.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn critically_and_over_damped_springs_never_overshoot() {
        for spring in [Spring::new(100.0, 20.0, 1.0), Spring::new(100.0, 60.0, 1.0)] {
            for step in 0..=400 {
                let value = spring.position(f64::from(step) / 100.0);
                assert!(value <= 1.0 + 1e-9, "{spring:?} overshot at step {step}");
            }
            assert!(spring.position(spring.settle_duration()) > 0.98);
        }
    }

    #[test]
    fn spring_css_is_a_linear_easing_ending_at_one() {
        let css = Easing::Spring(Spring::BOUNCY).to_css();
        assert!(css.starts_with("linear(0.0000, "));
        assert!(css.ends_with(", 1.0000)"));
        assert_eq!(css.matches(',').count(), SPRING_CSS_SAMPLES);
    }

    #[test]
    fn bezier_css_uses_shortest_float_form() {
        assert_eq!(Easing::REVEAL.to_css(), "cubic-bezier(0.25, 0.4, 0.25, 1)");
    }
}
