//! Email-list state for category and uncategorized views.

#[cfg(test)]
#[path = "emails_test.rs"]
mod emails_test;

use crate::net::types::Email;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmailsState {
    pub items: Vec<Email>,
    pub loading: bool,
    pub error: Option<String>,
}

impl EmailsState {
    pub fn loading() -> Self {
        Self { loading: true, ..Self::default() }
    }

    pub fn loaded(items: Vec<Email>) -> Self {
        Self { items, loading: false, error: None }
    }

    pub fn failed(message: String) -> Self {
        Self { items: Vec::new(), loading: false, error: Some(message) }
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|e| !e.is_read).count()
    }

    pub fn count_label(&self) -> String {
        email_count_label(self.items.len())
    }

    /// Count label plus the unread tally when any mail is unread.
    pub fn summary_label(&self) -> String {
        match self.unread_count() {
            0 => self.count_label(),
            unread => format!("{}, {unread} unread", self.count_label()),
        }
    }
}

/// "1 email" / "N emails".
pub fn email_count_label(count: usize) -> String {
    match count {
        1 => "1 email".to_owned(),
        n => format!("{n} emails"),
    }
}
