//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves auth requests, `session` interprets identity replies,
//! `api` wraps the email/category endpoints, and `types` defines the shared
//! wire schema.

pub mod api;
pub mod session;
pub mod transport;
pub mod types;
