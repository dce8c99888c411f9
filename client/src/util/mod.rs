//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (cookies, storage,
//! history, timers) and the auth flows built on them from page and component
//! logic, which keeps those flows testable outside a browser.

pub mod auth;
pub mod browser;
pub mod credentials;
pub mod handoff;
