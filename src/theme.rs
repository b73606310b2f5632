//! Theme preference: one persisted key, applied as `data-theme` on `<body>`.
//!
//! Storage is behind `PreferenceBackend` so the page uses localStorage while
//! tests (and browsers with storage disabled) use the in-memory backend.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, MouseEvent, Storage};

use crate::dom;
use crate::error::{PortfolioError, Result};

pub const THEME_KEY: &str = "theme";
pub const THEME_ATTR: &str = "data-theme";
pub const TOGGLE_ID: &str = "themeToggle";
pub const SWITCHING_CLASS: &str = "theme-switching";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn parse(s: &str) -> Option<Theme> {
        match s {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

// --- Backends ----------------------------------------------------------------

pub trait PreferenceBackend {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default)]
pub struct MemoryBackend {
    values: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct LocalStorageBackend {
    storage: Storage,
}

impl LocalStorageBackend {
    pub fn open() -> Result<Self> {
        let storage = dom::window()?
            .local_storage()
            .map_err(|_| PortfolioError::StorageUnavailable)?
            .ok_or(PortfolioError::StorageUnavailable)?;
        Ok(Self { storage })
    }
}

impl PreferenceBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(|_| PortfolioError::StorageUnavailable)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage.set_item(key, value).map_err(|_| PortfolioError::StorageUnavailable)
    }
}

/// localStorage when reachable, memory otherwise.
pub enum PageBackend {
    Local(LocalStorageBackend),
    Memory(MemoryBackend),
}

impl PageBackend {
    pub fn open() -> Self {
        match LocalStorageBackend::open() {
            Ok(local) => PageBackend::Local(local),
            Err(err) => {
                log::warn!("theme preference kept in memory: {err}");
                PageBackend::Memory(MemoryBackend::new())
            }
        }
    }
}

impl PreferenceBackend for PageBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            PageBackend::Local(b) => b.get(key),
            PageBackend::Memory(b) => b.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match self {
            PageBackend::Local(b) => b.set(key, value),
            PageBackend::Memory(b) => b.set(key, value),
        }
    }
}

// --- Store -------------------------------------------------------------------

pub struct PreferenceStore<B: PreferenceBackend> {
    backend: B,
    current: Theme,
}

impl<B: PreferenceBackend> PreferenceStore<B> {
    /// Read the stored theme; absent, unreadable or unrecognised values yield `Dark`.
    pub fn load(backend: B) -> Self {
        let current = match backend.get(THEME_KEY) {
            Ok(Some(v)) => Theme::parse(&v).unwrap_or_else(|| {
                log::debug!("ignoring stored theme `{v}`");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                log::warn!("theme preference unreadable: {err}");
                Theme::default()
            }
        };
        Self { backend, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip and persist. A failed write keeps the new theme for this page view.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(err) = self.backend.set(THEME_KEY, self.current.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
        self.current
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

// --- DOM binding -------------------------------------------------------------

pub fn apply(target: &Element, theme: Theme) {
    target.set_attribute(THEME_ATTR, theme.as_str()).ok();
}

/// Apply the stored theme now and wire `#themeToggle`. The attribute is applied
/// even when the toggle control is missing.
pub fn install(doc: &Document, transition_ms: i32) -> Result<Rc<RefCell<PreferenceStore<PageBackend>>>> {
    let body = dom::body(doc)?;
    let store = Rc::new(RefCell::new(PreferenceStore::load(PageBackend::open())));
    apply(&body, store.borrow().current());

    let toggle: HtmlElement = dom::by_id(doc, TOGGLE_ID)?;
    let store_cb = store.clone();
    let control = toggle.clone();
    dom::listen(&toggle, "click", move |_evt: MouseEvent| {
        let next = store_cb.borrow_mut().toggle();
        apply(&body, next);
        dom::add_class(&control, SWITCHING_CLASS);
        let control = control.clone();
        if dom::set_timeout(transition_ms, move || dom::remove_class(&control, SWITCHING_CLASS)).is_err() {
            log::debug!("theme transition class not scheduled for removal");
        }
    })?;
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenBackend;

    impl PreferenceBackend for BrokenBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(PortfolioError::StorageUnavailable)
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(PortfolioError::StorageUnavailable)
        }
    }

    #[test]
    fn defaults_to_dark_when_absent() {
        let store = PreferenceStore::load(MemoryBackend::new());
        assert_eq!(store.current(), Theme::Dark);
    }

    #[test]
    fn toggle_from_dark_persists_light() {
        let mut backend = MemoryBackend::new();
        backend.set(THEME_KEY, "dark").unwrap();
        let mut store = PreferenceStore::load(backend);
        assert_eq!(store.toggle(), Theme::Light);
        assert_eq!(store.backend().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn double_toggle_round_trips() {
        let mut backend = MemoryBackend::new();
        backend.set(THEME_KEY, "light").unwrap();
        let mut store = PreferenceStore::load(backend);
        store.toggle();
        store.toggle();
        assert_eq!(store.current(), Theme::Light);
        assert_eq!(store.backend().get(THEME_KEY).unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn garbage_value_falls_back_to_dark() {
        let mut backend = MemoryBackend::new();
        backend.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(PreferenceStore::load(backend).current(), Theme::Dark);
    }

    #[test]
    fn broken_storage_never_raises() {
        let mut store = PreferenceStore::load(BrokenBackend);
        assert_eq!(store.current(), Theme::Dark);
        assert_eq!(store.toggle(), Theme::Light);
    }
}
