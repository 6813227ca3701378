//! Shared scroll/resize feed for every scroll-linked component.

use super::dom;
use crate::logging::Logger;
use crate::observe::{Observers, Subscription};
use crate::scroll::{FrameCoalescer, Viewport};
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use serde_json::json;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use web_sys::window;

/// One passive `scroll` + `resize` listener pair, throttled to one
/// notification per animation frame.
pub(crate) struct ViewportHub {
    inner: Rc<HubInner>,
    listeners: RefCell<Vec<EventListener>>,
}

struct HubInner {
    observers: Rc<Observers<Viewport>>,
    frames: RefCell<FrameCoalescer>,
    pending: RefCell<Option<AnimationFrame>>,
    latest: Cell<Viewport>,
}

impl HubInner {
    fn schedule(self: &Rc<Self>) {
        if !self.frames.borrow_mut().request() {
            return;
        }

        let weak: Weak<Self> = Rc::downgrade(self);
        let frame = request_animation_frame(move |_timestamp| {
            if let Some(inner) = weak.upgrade() {
                inner.flush();
            }
        });
        // Replacing a fired handle is a no-op cancel.
        *self.pending.borrow_mut() = Some(frame);
    }

    fn flush(&self) {
        self.frames.borrow_mut().complete();
        let viewport = dom::viewport();
        self.latest.set(viewport);
        self.observers.notify(&viewport);
    }
}

impl ViewportHub {
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self {
            inner: Rc::new(HubInner {
                observers: Rc::new(Observers::new()),
                frames: RefCell::new(FrameCoalescer::default()),
                pending: RefCell::new(None),
                latest: Cell::new(dom::viewport()),
            }),
            listeners: RefCell::new(Vec::new()),
        })
    }

    /// Installs the window listeners. Repeated calls are ignored.
    pub(crate) fn attach(&self, logger: &Logger) {
        let mut listeners = self.listeners.borrow_mut();
        if !listeners.is_empty() {
            return;
        }
        let Some(win) = window() else {
            return;
        };

        let options = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        };
        for event in ["scroll", "resize"] {
            let inner = Rc::downgrade(&self.inner);
            listeners.push(EventListener::new_with_options(&win, event, options, move |_event| {
                if let Some(inner) = inner.upgrade() {
                    inner.schedule();
                }
            }));
        }

        let viewport = self.snapshot();
        logger.debug(
            "viewport.attached",
            json!({ "width": viewport.width, "height": viewport.height }),
        );
    }

    pub(crate) fn snapshot(&self) -> Viewport {
        self.inner.latest.get()
    }

    pub(crate) fn subscribe(&self, listener: impl Fn(&Viewport) + 'static) -> Subscription {
        self.inner.observers.subscribe_scoped(listener)
    }

    /// Drops the listeners, any pending frame and every subscriber.
    pub(crate) fn detach(&self) {
        self.listeners.borrow_mut().clear();
        self.inner.pending.borrow_mut().take();
        self.inner.frames.borrow_mut().complete();
        self.inner.observers.clear();
    }
}
