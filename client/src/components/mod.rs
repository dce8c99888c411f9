//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the shell chrome, the auth-gate branches and the
//! category/email surfaces. Pages own data loading and pass plain values or
//! signals down.

pub mod add_category_dialog;
pub mod category_list;
pub mod connected_accounts;
pub mod email_list;
pub mod header;
pub mod login_prompt;
pub mod notice_banner;
pub mod skeleton;
