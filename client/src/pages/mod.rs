//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped view state (active docs section, billing
//! period, demo log) and delegates shared rendering details to `components`.

pub mod docs;
pub mod download;
pub mod features;
pub mod home;
pub mod pricing;
