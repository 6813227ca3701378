//! Scroll progress of an element through the viewport.
//!
//! An offset pair names two moments: when the element starts travelling
//! (`enter`) and when it is done (`exit`). Each moment is the instant a point on
//! the element lines up with a point on the viewport, both given as a fraction
//! of their own height. Progress is where the current scroll position sits
//! between those two moments, derived from the element's bounding rect alone.

/// Point along an element or viewport, from its top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Edge {
    Start,
    Center,
    End,
    Fraction(f64),
}

impl Edge {
    pub fn fraction(self) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => 0.5,
            Self::End => 1.0,
            Self::Fraction(value) => value,
        }
    }
}

/// `target` point of the element meets `container` point of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    pub target: Edge,
    pub container: Edge,
}

impl Intersection {
    pub const fn new(target: Edge, container: Edge) -> Self {
        Self { target, container }
    }

    /// Distance the page still has to scroll before this intersection happens.
    fn remaining(self, geometry: ElementGeometry, viewport_height: f64) -> f64 {
        geometry.top + self.target.fraction() * geometry.height
            - self.container.fraction() * viewport_height
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollOffset {
    pub enter: Intersection,
    pub exit: Intersection,
}

impl ScrollOffset {
    /// From the element's top touching the viewport bottom until its bottom
    /// leaves through the viewport top.
    pub const ENTER_TO_EXIT: Self = Self {
        enter: Intersection::new(Edge::Start, Edge::End),
        exit: Intersection::new(Edge::End, Edge::Start),
    };

    /// From the element's top sitting at the viewport top until its bottom
    /// reaches the viewport top.
    pub const PINNED_TO_EXIT: Self = Self {
        enter: Intersection::new(Edge::Start, Edge::Start),
        exit: Intersection::new(Edge::End, Edge::Start),
    };
}

/// Bounding rect of an element relative to the viewport's top edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementGeometry {
    pub top: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Progress without clamping; negative before `enter`, above 1 after `exit`.
pub fn raw_progress(offset: ScrollOffset, geometry: ElementGeometry, viewport_height: f64) -> f64 {
    let to_enter = offset.enter.remaining(geometry, viewport_height);
    let to_exit = offset.exit.remaining(geometry, viewport_height);
    let window = to_enter - to_exit;

    let progress = if window.abs() <= f64::EPSILON {
        if to_enter > 0.0 {
            0.0
        } else {
            1.0
        }
    } else {
        to_enter / window
    };

    if progress.is_finite() {
        progress
    } else {
        0.0
    }
}

/// Progress clamped to `[0, 1]`.
pub fn scroll_progress(offset: ScrollOffset, geometry: ElementGeometry, viewport_height: f64) -> f64 {
    raw_progress(offset, geometry, viewport_height).clamp(0.0, 1.0)
}

/// Collapses a burst of scroll/resize notifications into one pending frame.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Returns `true` when the caller should schedule a new frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn at(top: f64, height: f64) -> ElementGeometry {
        ElementGeometry { top, height }
    }

    #[test]
    fn enter_to_exit_spans_viewport_plus_element() {
        let offset = ScrollOffset::ENTER_TO_EXIT;

        assert_eq!(scroll_progress(offset, at(VIEWPORT, 400.0), VIEWPORT), 0.0);
        assert_eq!(scroll_progress(offset, at(-400.0, 400.0), VIEWPORT), 1.0);
        assert_eq!(scroll_progress(offset, at(200.0, 400.0), VIEWPORT), 0.5);
    }

    #[test]
    fn pinned_to_exit_starts_at_viewport_top() {
        let offset = ScrollOffset::PINNED_TO_EXIT;

        assert_eq!(scroll_progress(offset, at(0.0, 1000.0), VIEWPORT), 0.0);
        assert_eq!(scroll_progress(offset, at(-500.0, 1000.0), VIEWPORT), 0.5);
        assert_eq!(scroll_progress(offset, at(-1000.0, 1000.0), VIEWPORT), 1.0);
    }

    #[test]
    fn raw_progress_extrapolates_and_clamped_progress_does_not() {
        let offset = ScrollOffset::PINNED_TO_EXIT;
        let before = at(250.0, 1000.0);
        let after = at(-1500.0, 1000.0);

        assert_eq!(raw_progress(offset, before, VIEWPORT), -0.25);
        assert_eq!(raw_progress(offset, after, VIEWPORT), 1.5);
        assert_eq!(scroll_progress(offset, before, VIEWPORT), 0.0);
        assert_eq!(scroll_progress(offset, after, VIEWPORT), 1.0);
    }

    #[test]
    fn zero_length_window_is_a_step() {
        let offset = ScrollOffset {
            enter: Intersection::new(Edge::Start, Edge::Start),
            exit: Intersection::new(Edge::Start, Edge::Start),
        };

        assert_eq!(raw_progress(offset, at(10.0, 0.0), VIEWPORT), 0.0);
        assert_eq!(raw_progress(offset, at(0.0, 0.0), VIEWPORT), 1.0);
        assert_eq!(raw_progress(offset, at(-10.0, 0.0), VIEWPORT), 1.0);
    }

    #[test]
    fn non_finite_geometry_never_escapes() {
        let progress = raw_progress(ScrollOffset::ENTER_TO_EXIT, at(f64::NAN, 100.0), VIEWPORT);
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn same_geometry_gives_same_progress() {
        let geometry = at(123.4, 567.8);
        let first = scroll_progress(ScrollOffset::ENTER_TO_EXIT, geometry, VIEWPORT);
        let second = scroll_progress(ScrollOffset::ENTER_TO_EXIT, geometry, VIEWPORT);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn fractional_edges_resolve_to_their_value() {
        assert_eq!(Edge::Center.fraction(), 0.5);
        assert_eq!(Edge::Fraction(0.25).fraction(), 0.25);
    }

    #[test]
    fn coalescer_schedules_once_per_frame() {
        let mut frames = FrameCoalescer::default();

        assert!(frames.request());
        assert!(!frames.request());
        assert!(!frames.request());

        frames.complete();
        assert!(frames.request());
    }
}
