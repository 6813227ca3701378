use super::dom::{self, IntersectionWatch};
use super::{PageContext, ThemeContext};
use crate::motion::{inset_root_margin, RevealLatch};
use crate::nav::{NavAction, NavState};
use crate::scroll::{scroll_progress, ScrollOffset, Viewport};
use serde_json::json;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

#[hook]
pub(crate) fn use_page() -> PageContext {
    use_context::<PageContext>().expect("PageContext is provided by App")
}

#[hook]
pub(crate) fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext is provided by App")
}

/// Clamped progress of `node` through `offset`, refreshed once per frame.
///
/// Stays at `rest` when the user prefers reduced motion.
#[hook]
pub(crate) fn use_scroll_progress(node: &NodeRef, offset: ScrollOffset, rest: f64) -> f64 {
    let page = use_page();
    let progress = use_state_eq(|| rest);

    {
        let node = node.clone();
        let progress = progress.clone();
        let hub = page.viewport.clone();
        let reduced_motion = page.reduced_motion;
        use_effect_with((), move |_| {
            let subscription = (!reduced_motion).then(|| {
                let measure = move |viewport: &Viewport| {
                    if let Some(element) = node.cast::<Element>() {
                        let geometry = dom::element_geometry(&element);
                        progress.set(scroll_progress(offset, geometry, viewport.height));
                    }
                };
                measure(&hub.snapshot());
                hub.subscribe(measure)
            });
            move || drop(subscription)
        });
    }

    *progress
}

/// Navbar state fed by the shared viewport feed.
#[hook]
pub(crate) fn use_nav_state() -> UseReducerHandle<NavState> {
    let page = use_page();
    let state = use_reducer_eq(NavState::default);

    {
        let dispatcher = state.dispatcher();
        let hub = page.viewport.clone();
        let threshold = page.config.nav_scroll_threshold_px;
        use_effect_with((), move |_| {
            let scrolled = move |viewport: &Viewport| {
                dispatcher.dispatch(NavAction::Scrolled {
                    scroll_y: viewport.scroll_y,
                    threshold,
                });
            };
            scrolled(&hub.snapshot());
            let subscription = hub.subscribe(scrolled);
            move || drop(subscription)
        });
    }

    state
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: NavAction) -> Rc<Self> {
        Rc::new((*self).apply(action))
    }
}

/// Whether `node` has entered the viewport, shrunk by `margin_px` on each side.
///
/// With `once` the answer latches to `true`. Without `IntersectionObserver`
/// or with reduced motion the element counts as visible from the start.
#[hook]
pub(crate) fn use_in_view(node: &NodeRef, once: bool, margin_px: Option<u32>) -> bool {
    let page = use_page();
    let visible = use_state_eq(|| page.reduced_motion);

    {
        let node = node.clone();
        let visible = visible.clone();
        let logger = page.logger.clone();
        let reduced_motion = page.reduced_motion;
        let margin = inset_root_margin(margin_px.unwrap_or(page.config.reveal_margin_px));
        use_effect_with((), move |_| {
            let watch = if reduced_motion {
                None
            } else if let Some(element) = node.cast::<Element>() {
                let mut latch = RevealLatch::new(once);
                let setter = visible.clone();
                let watch = IntersectionWatch::observe(&element, &margin, move |intersecting| {
                    if latch.update(intersecting) {
                        setter.set(latch.is_visible());
                    }
                    latch.is_settled()
                });
                if watch.is_none() {
                    logger.debug("reveal.unsupported", json!({ "margin": margin }));
                    visible.set(true);
                }
                watch
            } else {
                None
            };
            move || drop(watch)
        });
    }

    *visible
}
