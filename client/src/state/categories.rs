//! Category-list state for the dashboard.
//!
//! DESIGN
//! ======
//! Mutations are plain methods over a cloneable struct so the dashboard can
//! hold it in one `RwSignal` and tests can exercise it without a runtime.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::api::ApiError;
use crate::net::types::{ActionResponse, Category, NewCategory};

/// Dashboard category inventory plus the last user-visible notice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategoriesState {
    pub items: Vec<Category>,
    pub loading: bool,
    pub error: Option<String>,
    pub notice: Option<Notice>,
}

/// Outcome banner for dashboard actions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

impl Notice {
    /// Banner for an action reply. The backend's own message wins; `fallback`
    /// covers replies without one.
    pub fn from_action(action: &str, fallback: &str, result: &Result<ActionResponse, ApiError>) -> Self {
        match result {
            Ok(reply) if !reply.message.trim().is_empty() => Self::Success(reply.message.clone()),
            Ok(_) => Self::Success(fallback.to_owned()),
            Err(e) => Self::Failure(e.user_message(action)),
        }
    }
}

impl CategoriesState {
    pub fn replace_all(&mut self, items: Vec<Category>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Insert or replace by id, keeping existing order.
    pub fn upsert(&mut self, category: Category) {
        match self.items.iter_mut().find(|c| c.id == category.id) {
            Some(existing) => *existing = category,
            None => self.items.push(category),
        }
    }

    pub fn remove(&mut self, id: i64) {
        self.items.retain(|c| c.id != id);
    }

    pub fn name_of(&self, id: i64) -> Option<&str> {
        self.items.iter().find(|c| c.id == id).map(|c| c.name.as_str())
    }

    pub fn total_emails(&self) -> u32 {
        self.items.iter().map(|c| c.email_count).sum()
    }
}

/// Trim and require both fields of the add-category form.
///
/// # Errors
///
/// Returns the message to show under the form when a field is blank.
pub fn validate_new_category(name: &str, description: &str) -> Result<NewCategory, &'static str> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() || description.is_empty() {
        return Err("Enter both a name and a description.");
    }
    Ok(NewCategory { name: name.to_owned(), description: description.to_owned() })
}

/// Parse a `/categories/:id` route parameter.
pub fn parse_category_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}
