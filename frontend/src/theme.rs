use std::fmt;

use gloo_console::warn;
use wasm_bindgen::JsValue;

/// local storage key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// attribute on the document root element the stylesheet keys off
pub const THEME_ATTRIBUTE: &str = "data-theme";

const LIGHT: &str = "light";
const DARK: &str = "dark";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => DARK,
        }
    }

    /// parse a stored value, anything other than "light" or "dark" is rejected
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            LIGHT => Some(Theme::Light),
            DARK => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// client scoped key-value store that outlives a page load
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    /// overwrite the value, failures are not reported to the caller
    fn set(&self, key: &str, value: &str);
}

/// the styling marker on the root document element
pub trait RootAttribute {
    fn set(&self, theme: Theme);
}

/// Owns the active theme and is the only writer of both the stored
/// preference and the root attribute.
///
/// The controller starts at [`Theme::Light`] regardless of what is stored;
/// the stored preference is only applied by [`ThemeController::initialize`],
/// which the page calls after its first render.
pub struct ThemeController<S, R> {
    current: Theme,
    store: S,
    root: R,
}

impl<S: PreferenceStore, R: RootAttribute> ThemeController<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self {
            current: Theme::default(),
            store,
            root,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// load the stored preference (if any) and reflect it onto the document
    pub fn initialize(&mut self) {
        if let Some(theme) = self.store.get(THEME_KEY).as_deref().and_then(Theme::parse) {
            self.current = theme;
        }

        self.root.set(self.current);
    }

    /// flip the theme, persist it and reflect it onto the document
    pub fn toggle(&mut self) {
        self.current = self.current.toggled();

        self.store.set(THEME_KEY, self.current.as_str());
        self.root.set(self.current);
    }
}

/// `window.localStorage`
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

fn log_storage_error(action: &str, key: &str, e: JsValue) {
    warn!(format!("could not {action} local storage key {key}"), e);
}

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        match Self::storage()?.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log_storage_error("read", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            warn!("local storage is unavailable, theme preference will not be remembered");
            return;
        };

        if let Err(e) = storage.set_item(key, value) {
            log_storage_error("write", key, e);
        }
    }
}

/// `document.documentElement`
pub struct DocumentRoot;

impl RootAttribute for DocumentRoot {
    fn set(&self, theme: Theme) {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        if let Err(e) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
            warn!("could not set the document theme attribute", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, collections::HashMap, rc::Rc};

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
        read_only: bool,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
            store
        }

        fn stored(&self) -> Option<String> {
            self.values.borrow().get(THEME_KEY).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            if !self.read_only {
                self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
            }
        }
    }

    #[derive(Clone, Default)]
    struct Attribute(Rc<RefCell<Option<Theme>>>);

    impl Attribute {
        fn value(&self) -> Option<Theme> {
            *self.0.borrow()
        }
    }

    impl RootAttribute for Attribute {
        fn set(&self, theme: Theme) {
            *self.0.borrow_mut() = Some(theme);
        }
    }

    fn controller(store: &MemoryStore) -> (ThemeController<MemoryStore, Attribute>, Attribute) {
        let attribute = Attribute::default();
        (ThemeController::new(store.clone(), attribute.clone()), attribute)
    }

    #[test]
    fn parse_only_accepts_known_values() {
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("Dark"), None);
        assert_eq!(Theme::parse(""), None);
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn starts_light_before_initialize() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        let (theme, attribute) = controller(&store);

        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(attribute.value(), None);
    }

    #[test]
    fn initialize_without_stored_value() {
        let store = MemoryStore::default();
        let (mut theme, attribute) = controller(&store);

        theme.initialize();

        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(attribute.value(), Some(Theme::Light));
        assert_eq!(store.stored(), None);
    }

    #[test]
    fn initialize_with_stored_dark() {
        let store = MemoryStore::with(THEME_KEY, "dark");
        let (mut theme, attribute) = controller(&store);

        theme.initialize();

        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(attribute.value(), Some(Theme::Dark));
    }

    #[test]
    fn initialize_ignores_invalid_stored_value() {
        let store = MemoryStore::with(THEME_KEY, "solarized");
        let (mut theme, attribute) = controller(&store);

        theme.initialize();

        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(attribute.value(), Some(Theme::Light));
    }

    #[test]
    fn toggle_updates_store_and_attribute() {
        let store = MemoryStore::default();
        let (mut theme, attribute) = controller(&store);
        theme.initialize();

        for _ in 0..5 {
            theme.toggle();
            assert_eq!(store.stored().as_deref(), Some(theme.current().as_str()));
            assert_eq!(attribute.value(), Some(theme.current()));
        }
    }

    #[test]
    fn toggle_parity() {
        for initial in ["light", "dark"] {
            for count in 0..10 {
                let store = MemoryStore::with(THEME_KEY, initial);
                let (mut theme, _) = controller(&store);
                theme.initialize();
                let before = theme.current();

                for _ in 0..count {
                    theme.toggle();
                }

                let expected = if count % 2 == 0 {
                    before
                } else {
                    before.toggled()
                };
                assert_eq!(theme.current(), expected, "{count} toggles from {initial}");
            }
        }
    }

    #[test]
    fn preference_survives_reload() {
        let store = MemoryStore::default();

        let (mut theme, _) = controller(&store);
        theme.initialize();
        assert_eq!(theme.current(), Theme::Light);
        theme.toggle();
        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(store.stored().as_deref(), Some("dark"));

        // a fresh page load shares the store but nothing else
        let (mut theme, attribute) = controller(&store);
        assert_eq!(theme.current(), Theme::Light);
        theme.initialize();
        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(attribute.value(), Some(Theme::Dark));
        theme.toggle();
        assert_eq!(theme.current(), Theme::Light);
        assert_eq!(store.stored().as_deref(), Some("light"));
    }

    #[test]
    fn failed_writes_keep_session_state() {
        let store = MemoryStore {
            read_only: true,
            ..Default::default()
        };
        let (mut theme, attribute) = controller(&store);
        theme.initialize();

        theme.toggle();

        assert_eq!(theme.current(), Theme::Dark);
        assert_eq!(attribute.value(), Some(Theme::Dark));
        assert_eq!(store.stored(), None);

        let (mut reloaded, _) = controller(&store);
        reloaded.initialize();
        assert_eq!(reloaded.current(), Theme::Light);
    }
}
