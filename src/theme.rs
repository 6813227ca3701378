//! Light/dark theme store.
//!
//! The store is built once per page session from three host seams: where the
//! preference is persisted, what the host reports for `prefers-color-scheme`,
//! and the root-level flag that styled elements key off. It is handed to the
//! component tree through context rather than living in a global.

use crate::logging::Logger;
use crate::observe::{Observers, Subscription};
use serde::Serialize;
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_token(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} mode")
    }

    pub fn pressed(self) -> bool {
        matches!(self, Self::Dark)
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Where the initial theme came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSource {
    Stored,
    System,
    Default,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

pub trait PreferenceStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

/// Root-level presentation flag. `apply` must take effect before it returns.
pub trait ThemeSurface {
    fn apply(&self, theme: Theme);
}

pub struct ThemeHost {
    pub storage: Box<dyn PreferenceStorage>,
    pub color_scheme: Box<dyn ColorSchemeSource>,
    pub surface: Box<dyn ThemeSurface>,
}

/// Stored preference first, then the host's color-scheme signal, then light.
///
/// Unknown tokens count as "nothing stored".
pub fn resolve_theme(stored: Option<&str>, prefers_dark: bool) -> (Theme, ThemeSource) {
    match stored.and_then(Theme::from_token) {
        Some(theme) => (theme, ThemeSource::Stored),
        None if prefers_dark => (Theme::Dark, ThemeSource::System),
        None => (Theme::Light, ThemeSource::Default),
    }
}

/// [`resolve_theme`] against live host seams.
///
/// A failed read is logged and counts as nothing stored.
pub fn resolve_initial_theme(
    storage: &dyn PreferenceStorage,
    color_scheme: &dyn ColorSchemeSource,
    key: &str,
    logger: &Logger,
) -> (Theme, ThemeSource) {
    let stored = storage.read(key).unwrap_or_else(|error| {
        logger.warn(
            "theme.read_failed",
            json!({ "key": key, "error": error.to_string() }),
        );
        None
    });
    resolve_theme(stored.as_deref(), color_scheme.prefers_dark())
}

pub struct ThemeStore {
    key: String,
    theme: Cell<Theme>,
    source: ThemeSource,
    storage: Box<dyn PreferenceStorage>,
    surface: Box<dyn ThemeSurface>,
    observers: Rc<Observers<Theme>>,
    logger: Logger,
}

impl ThemeStore {
    pub fn init(host: ThemeHost, key: impl Into<String>, logger: Logger) -> Rc<Self> {
        let key = key.into();

        let (theme, source) =
            resolve_initial_theme(host.storage.as_ref(), host.color_scheme.as_ref(), &key, &logger);
        host.surface.apply(theme);
        logger.info("theme.resolved", json!({ "theme": theme, "source": source }));

        Rc::new(Self {
            key,
            theme: Cell::new(theme),
            source,
            storage: host.storage,
            surface: host.surface,
            observers: Rc::new(Observers::new()),
            logger,
        })
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn source(&self) -> ThemeSource {
        self.source
    }

    pub fn toggle(&self) -> Theme {
        let next = self.theme().toggled();
        self.commit(next);
        next
    }

    pub fn set(&self, theme: Theme) {
        if theme != self.theme() {
            self.commit(theme);
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&Theme) + 'static) -> Subscription {
        self.observers.subscribe_scoped(listener)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Drops every subscriber. The store keeps answering `theme()` afterwards.
    pub fn teardown(&self) {
        self.observers.clear();
    }

    fn commit(&self, theme: Theme) {
        self.theme.set(theme);

        if let Err(error) = self.storage.write(&self.key, theme.as_str()) {
            self.logger.warn(
                "theme.persist_failed",
                json!({ "key": self.key, "theme": theme, "error": error.to_string() }),
            );
        }

        self.surface.apply(theme);
        self.logger.info("theme.changed", json!({ "theme": theme }));
        self.observers.notify(&theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::testing::recording_logger;
    use crate::logging::LogLevel;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct MemoryStorage {
        values: Rc<RefCell<HashMap<String, String>>>,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryStorage {
        fn with(key: &str, value: &str) -> Self {
            let storage = Self::default();
            storage.values.borrow_mut().insert(key.to_string(), value.to_string());
            storage
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStorage for MemoryStorage {
        fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
            if self.fail_reads {
                return Err(StorageError::Unavailable);
            }
            Ok(self.get(key))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Rejected {
                    key: key.to_string(),
                    reason: "quota exceeded".to_string(),
                });
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct FixedScheme(bool);

    impl ColorSchemeSource for FixedScheme {
        fn prefers_dark(&self) -> bool {
            self.0
        }
    }

    #[derive(Clone, Default)]
    struct RecordingSurface(Rc<RefCell<Vec<Theme>>>);

    impl ThemeSurface for RecordingSurface {
        fn apply(&self, theme: Theme) {
            self.0.borrow_mut().push(theme);
        }
    }

    impl RecordingSurface {
        fn current(&self) -> Option<Theme> {
            self.0.borrow().last().copied()
        }
    }

    fn store_with(storage: &MemoryStorage, system_dark: bool, surface: &RecordingSurface) -> Rc<ThemeStore> {
        let (logger, _) = recording_logger(LogLevel::Debug);
        ThemeStore::init(
            ThemeHost {
                storage: Box::new(storage.clone()),
                color_scheme: Box::new(FixedScheme(system_dark)),
                surface: Box::new(surface.clone()),
            },
            "theme",
            logger,
        )
    }

    #[test]
    fn system_dark_wins_when_nothing_is_stored() {
        let surface = RecordingSurface::default();
        let store = store_with(&MemoryStorage::default(), true, &surface);

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.source(), ThemeSource::System);
        assert_eq!(surface.current(), Some(Theme::Dark));
    }

    #[test]
    fn stored_light_overrides_system_dark() {
        let surface = RecordingSurface::default();
        let store = store_with(&MemoryStorage::with("theme", "light"), true, &surface);

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.source(), ThemeSource::Stored);
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        let surface = RecordingSurface::default();
        let store = store_with(&MemoryStorage::default(), false, &surface);

        assert_eq!((store.theme(), store.source()), (Theme::Light, ThemeSource::Default));
        assert_eq!(surface.current(), Some(Theme::Light));
    }

    #[test]
    fn malformed_stored_value_is_treated_as_absent() {
        let storage = MemoryStorage::with("theme", "DARK!");
        let surface = RecordingSurface::default();
        let store = store_with(&storage, true, &surface);

        assert_eq!((store.theme(), store.source()), (Theme::Dark, ThemeSource::System));
        assert_eq!(surface.current(), Some(Theme::Dark));
        assert_eq!(storage.get("theme").as_deref(), Some("DARK!"));
    }

    #[test]
    fn malformed_stored_value_without_system_signal_falls_back_to_light() {
        let store = store_with(&MemoryStorage::with("theme", ""), false, &RecordingSurface::default());
        assert_eq!((store.theme(), store.source()), (Theme::Light, ThemeSource::Default));
    }

    #[test]
    fn unreadable_storage_fails_open_and_logs() {
        let storage = MemoryStorage {
            fail_reads: true,
            ..MemoryStorage::default()
        };
        let (logger, sink) = recording_logger(LogLevel::Info);
        let store = ThemeStore::init(
            ThemeHost {
                storage: Box::new(storage),
                color_scheme: Box::new(FixedScheme(false)),
                surface: Box::new(RecordingSurface::default()),
            },
            "theme",
            logger,
        );

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(
            sink.events(),
            vec!["theme.read_failed".to_string(), "theme.resolved".to_string()]
        );
    }

    #[test]
    fn toggle_persists_and_updates_surface_synchronously() {
        let storage = MemoryStorage::default();
        let surface = RecordingSurface::default();
        let store = store_with(&storage, false, &surface);

        let next = store.toggle();

        assert_eq!(next, Theme::Dark);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(storage.get("theme").as_deref(), Some("dark"));
        assert_eq!(surface.current(), Some(Theme::Dark));
    }

    #[test]
    fn toggling_twice_round_trips_and_persists_each_step() {
        let storage = MemoryStorage::default();
        let store = store_with(&storage, true, &RecordingSurface::default());
        let original = store.theme();

        store.toggle();
        assert_eq!(storage.get("theme").as_deref(), Some(store.theme().as_str()));
        store.toggle();

        assert_eq!(store.theme(), original);
        assert_eq!(storage.get("theme").as_deref(), Some(original.as_str()));
    }

    #[test]
    fn subscribers_hear_every_change_until_dropped() {
        let store = store_with(&MemoryStorage::default(), false, &RecordingSurface::default());
        let heard = Rc::new(RefCell::new(Vec::new()));

        let subscription = {
            let heard = Rc::clone(&heard);
            store.subscribe(move |theme| heard.borrow_mut().push(*theme))
        };
        store.toggle();
        store.toggle();
        drop(subscription);
        store.toggle();

        assert_eq!(*heard.borrow(), vec![Theme::Dark, Theme::Light]);
    }

    #[test]
    fn set_to_current_theme_is_a_no_op() {
        let storage = MemoryStorage::default();
        let surface = RecordingSurface::default();
        let store = store_with(&storage, false, &surface);

        store.set(Theme::Light);

        assert_eq!(storage.get("theme"), None);
        assert_eq!(surface.0.borrow().len(), 1);
    }

    #[test]
    fn failed_write_keeps_in_memory_theme() {
        let storage = MemoryStorage {
            fail_writes: true,
            ..MemoryStorage::default()
        };
        let (logger, sink) = recording_logger(LogLevel::Warn);
        let store = ThemeStore::init(
            ThemeHost {
                storage: Box::new(storage),
                color_scheme: Box::new(FixedScheme(false)),
                surface: Box::new(RecordingSurface::default()),
            },
            "theme",
            logger,
        );

        store.toggle();

        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(sink.events(), vec!["theme.persist_failed".to_string()]);
    }

    #[test]
    fn teardown_releases_subscribers() {
        let store = store_with(&MemoryStorage::default(), false, &RecordingSurface::default());
        let _subscription = store.subscribe(|_| {});
        assert_eq!(store.subscriber_count(), 1);

        store.teardown();

        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn toggle_label_names_the_next_theme() {
        assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    }
}
