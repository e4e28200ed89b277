//! Light/dark theme preference store.
//!
//! DESIGN
//! ======
//! The store owns one boolean and two narrow collaborators: a
//! `PreferenceStorage` that round-trips the boolean across sessions, and a
//! `PresentationSurface` that mirrors it onto the rendered document. The app
//! constructs one store per session and hands it down through context, so
//! tests can drive the same logic with in-memory fakes.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. A failed read behaves like "nothing stored" and
//! a failed write is logged and dropped; neither blocks the visible toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Errors produced while persisting the theme preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage medium is reachable (SSR, private mode, disabled storage).
    #[error("preference storage unavailable")]
    Unavailable,

    /// The record could not be serialized.
    #[error("preference encode failed: {0}")]
    Encode(String),

    /// The storage medium rejected the write (quota exceeded, security error).
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Durable key-value backing for the theme preference.
pub trait PreferenceStorage {
    /// Last persisted value, or `None` when nothing readable is stored.
    fn load(&self) -> Option<bool>;

    /// Persist `is_dark`, replacing any previous record.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium is missing or refuses the write.
    fn save(&self, is_dark: bool) -> Result<(), StorageError>;
}

/// Document-level indicator that style rules key off.
pub trait PresentationSurface {
    fn apply_presentation_mode(&self, is_dark: bool);
}

/// Single source of truth for the light/dark presentation mode.
#[derive(Clone, Debug)]
pub struct ThemePreferenceStore<S, P> {
    is_dark: bool,
    storage: S,
    surface: P,
}

impl<S, P> ThemePreferenceStore<S, P>
where
    S: PreferenceStorage,
    P: PresentationSurface,
{
    /// Create a store in light mode. Nothing is read or applied until
    /// [`Self::restore_on_start`] runs.
    pub fn new(storage: S, surface: P) -> Self {
        Self { is_dark: false, storage, surface }
    }

    /// Current preference.
    #[must_use]
    pub fn current(&self) -> bool {
        self.is_dark
    }

    /// Flip the preference, apply it to the surface, and persist it.
    ///
    /// A failed write is logged; the new mode stays in effect for the session.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.surface.apply_presentation_mode(self.is_dark);
        if let Err(e) = self.storage.save(self.is_dark) {
            #[cfg(feature = "hydrate")]
            log::warn!("theme preference not persisted: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
        }
        self.is_dark
    }

    /// Adopt the persisted preference, if any, and apply it to the surface.
    ///
    /// Absence of a record keeps the current (default light) mode untouched.
    pub fn restore_on_start(&mut self) {
        if let Some(is_dark) = self.storage.load() {
            self.is_dark = is_dark;
            self.surface.apply_presentation_mode(is_dark);
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }
}

impl<T: PreferenceStorage> PreferenceStorage for &T {
    fn load(&self) -> Option<bool> {
        (**self).load()
    }

    fn save(&self, is_dark: bool) -> Result<(), StorageError> {
        (**self).save(is_dark)
    }
}

impl<T: PresentationSurface> PresentationSurface for &T {
    fn apply_presentation_mode(&self, is_dark: bool) {
        (**self).apply_presentation_mode(is_dark);
    }
}
