//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod clipboard;
pub mod dark_mode;
pub mod i18n;
pub mod ui_persistence;
