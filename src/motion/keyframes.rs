/// Piecewise-linear track through `(progress, value)` control points.
///
/// Points must be sorted by progress. Outside the first and last point the
/// track holds the end value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Keyframes {
    points: &'static [(f64, f64)],
}

impl Keyframes {
    /// # Panics
    ///
    /// Panics when `points` is empty. In a `const` this fails the build.
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        assert!(!points.is_empty(), "keyframes need at least one control point");
        Self { points }
    }

    pub fn points(&self) -> &'static [(f64, f64)] {
        self.points
    }

    /// Value at `progress`. When several points share a progress the last
    /// of them wins.
    pub fn sample(&self, progress: f64) -> f64 {
        let Some(&(first_at, first_value)) = self.points.first() else {
            return 0.0;
        };
        if progress.is_nan() {
            return first_value;
        }
        let progress = progress.max(first_at);

        // Last point at or before `progress`; the first always qualifies.
        let index = self.points.partition_point(|&(at, _)| at <= progress) - 1;
        let (from_at, from_value) = self.points[index];
        let Some(&(to_at, to_value)) = self.points.get(index + 1) else {
            return from_value;
        };

        // `to_at > progress >= from_at`, so the span is positive.
        from_value + (to_value - from_value) * (progress - from_at) / (to_at - from_at)
    }
}
