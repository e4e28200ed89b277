//! Local UI chrome state (language, navbar menu, scroll styling).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the theme store so navbar
//! controls can evolve independently of the persisted preference.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::i18n::Language;

/// Scroll offset past which the navbar switches to its opaque style.
pub const SCROLLED_THRESHOLD_PX: f64 = 20.0;

/// UI state for the navbar and copy language.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub language: Language,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl UiState {
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Route changes close the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Record the window scroll offset; returns whether `scrolled` changed.
    pub fn set_scroll_offset(&mut self, offset_px: f64) -> bool {
        let scrolled = offset_px > SCROLLED_THRESHOLD_PX;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }
}
