//! Browser adapters for the theme preference store.
//!
//! `LocalStorage` persists the preference as a JSON record under
//! `theme-storage`; `DocumentRoot` toggles the `dark` class on `<html>`.
//! Both require a browser environment and degrade to no-ops under SSR.
//!
//! TRADE-OFFS
//! ==========
//! The WASM bundle restores the preference only after it loads, so the SSR
//! shell also inlines `RESTORE_SCRIPT`, which reads the same record and sets
//! the class before first paint. The two must agree on key and record shape.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use serde::{Deserialize, Serialize};

use crate::state::theme::{PreferenceStorage, PresentationSurface, StorageError, ThemePreferenceStore};
use crate::util::ui_persistence;

pub const STORAGE_KEY: &str = "theme-storage";
pub const DARK_CLASS: &str = "dark";

/// Inline `<head>` script that applies a persisted dark preference pre-paint.
pub const RESTORE_SCRIPT: &str = r#"(function(){try{var r=JSON.parse(localStorage.getItem("theme-storage"));if(r&&r.state&&r.state.isDark){document.documentElement.classList.add("dark");}}catch(e){}})();"#;

/// Persisted envelope: `{"state":{"isDark":true},"version":0}`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub state: ThemeSnapshot,
    #[serde(default)]
    pub version: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSnapshot {
    pub is_dark: bool,
}

impl ThemeRecord {
    pub fn new(is_dark: bool) -> Self {
        Self { state: ThemeSnapshot { is_dark }, version: 0 }
    }
}

/// Store wired to the real browser collaborators.
pub type BrowserThemeStore = ThemePreferenceStore<LocalStorage, DocumentRoot>;

pub fn browser_store() -> BrowserThemeStore {
    ThemePreferenceStore::new(LocalStorage, DocumentRoot)
}

/// `window.localStorage`-backed preference storage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStorage for LocalStorage {
    fn load(&self) -> Option<bool> {
        ui_persistence::load_json::<ThemeRecord>(STORAGE_KEY).map(|record| record.state.is_dark)
    }

    fn save(&self, is_dark: bool) -> Result<(), StorageError> {
        ui_persistence::save_json(STORAGE_KEY, &ThemeRecord::new(is_dark))
    }
}

/// The `<html>` element's class list.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

impl PresentationSurface for DocumentRoot {
    fn apply_presentation_mode(&self, is_dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.document_element())
            {
                let class_list = el.class_list();
                let result = if is_dark {
                    class_list.add_1(DARK_CLASS)
                } else {
                    class_list.remove_1(DARK_CLASS)
                };
                if let Err(e) = result {
                    log::warn!("failed to apply presentation mode: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = is_dark;
        }
    }
}
