//! Browser-side implementations of the host seams.

use crate::scroll::{ElementGeometry, Viewport};
use crate::theme::{ColorSchemeSource, PreferenceStorage, StorageError, Theme, ThemeHost, ThemeSurface};
use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Storage};

const FALLBACK_VIEWPORT: (f64, f64) = (1280.0, 720.0);

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// `localStorage`, probed on every access so a revoked store degrades quietly.
pub(crate) struct LocalPreferences;

impl PreferenceStorage for LocalPreferences {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.get_item(key).map_err(|error| StorageError::Rejected {
            key: key.to_string(),
            reason: format!("{error:?}"),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|error| StorageError::Rejected {
            key: key.to_string(),
            reason: format!("{error:?}"),
        })
    }
}

pub(crate) struct MediaColorScheme;

impl ColorSchemeSource for MediaColorScheme {
    fn prefers_dark(&self) -> bool {
        media_matches("(prefers-color-scheme: dark)")
    }
}

/// `data-theme` attribute and `dark` class on `<html>`.
pub(crate) struct RootThemeSurface;

impl ThemeSurface for RootThemeSurface {
    fn apply(&self, theme: Theme) {
        let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        let _ = root.set_attribute("data-theme", theme.as_str());
        let _ = root.class_list().toggle_with_force("dark", theme.is_dark());
    }
}

pub(crate) fn theme_host() -> ThemeHost {
    ThemeHost {
        storage: Box::new(LocalPreferences),
        color_scheme: Box::new(MediaColorScheme),
        surface: Box::new(RootThemeSurface),
    }
}

pub(crate) fn viewport() -> Viewport {
    let Some(win) = window() else {
        return Viewport {
            scroll_y: 0.0,
            width: FALLBACK_VIEWPORT.0,
            height: FALLBACK_VIEWPORT.1,
        };
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT.1);
    let scroll_y = win.scroll_y().unwrap_or(0.0);

    Viewport {
        scroll_y,
        width,
        height,
    }
}

pub(crate) fn element_geometry(element: &Element) -> ElementGeometry {
    let rect = element.get_bounding_client_rect();
    ElementGeometry {
        top: rect.top(),
        height: rect.height(),
    }
}

/// Reads `data-<name>` from the mount element.
pub(crate) fn data_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

/// One `IntersectionObserver` bound to one element. Disconnects on drop.
pub(crate) struct IntersectionWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl IntersectionWatch {
    /// `on_change` receives each intersecting flag and returns `true` once no
    /// further notifications are wanted. `None` when the browser lacks
    /// `IntersectionObserver`.
    pub(crate) fn observe(
        target: &Element,
        root_margin: &str,
        mut on_change: impl FnMut(bool) -> bool + 'static,
    ) -> Option<Self> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if on_change(entry.is_intersecting()) {
                        observer.disconnect();
                        break;
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options).ok()?;
        observer.observe(target);

        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
