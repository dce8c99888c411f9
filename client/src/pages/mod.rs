//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (its own auth gate, its own data
//! loads) and delegates rendering details to `components`.

pub mod auth_callback;
pub mod category;
pub mod dashboard;
pub mod home;
