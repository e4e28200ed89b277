//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and content blocks while reading/writing
//! shared state from Leptos context providers.

pub mod badge;
pub mod code_block;
pub mod feature_card;
pub mod navbar;
pub mod tip_box;
