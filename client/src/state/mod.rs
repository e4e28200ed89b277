//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `ui`) so components depend on small
//! focused models. Both are provided to the view tree as `RwSignal` contexts
//! by the root `App` component.

pub mod theme;
pub mod ui;
