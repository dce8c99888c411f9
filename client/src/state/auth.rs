//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is what every identity check resolves to. `GateStatus` adds the
//! "not resolved yet" phase that protected views render as a skeleton.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::MeResponse;

/// Validation failures when building a [`UserProfile`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("profile email is missing or malformed")]
    InvalidEmail,
    #[error("profile subject id is empty")]
    MissingSubject,
}

/// Identity of a signed-in user. Fields are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    email: String,
    display_name: String,
    avatar_url: Option<String>,
    subject_id: String,
}

impl UserProfile {
    /// Build a profile, rejecting empty subjects and malformed emails.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] when `email` or `subject_id` is unusable.
    pub fn new(
        email: &str,
        display_name: &str,
        avatar_url: Option<&str>,
        subject_id: &str,
    ) -> Result<Self, ProfileError> {
        let email = email.trim();
        if !is_plausible_email(email) {
            return Err(ProfileError::InvalidEmail);
        }
        let subject_id = subject_id.trim();
        if subject_id.is_empty() {
            return Err(ProfileError::MissingSubject);
        }
        let avatar_url = avatar_url.map(str::trim).filter(|url| !url.is_empty()).map(str::to_owned);
        Ok(Self {
            email: email.to_owned(),
            display_name: display_name.trim().to_owned(),
            avatar_url,
            subject_id: subject_id.to_owned(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Display name, falling back to the email when the provider sent none.
    pub fn display_name(&self) -> &str {
        if self.display_name.is_empty() { &self.email } else { &self.display_name }
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }
}

fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
}

/// Resolved identity of the current browser session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated { user: UserProfile, provider_linked: bool },
}

impl AuthState {
    /// Interpret an `/auth/me`-shaped payload.
    ///
    /// Anything short of an explicit `authenticated: true` with a complete
    /// profile is treated as signed out.
    pub fn from_me(body: &MeResponse) -> Self {
        if !body.authenticated {
            return Self::Unauthenticated;
        }
        let Some(user) = &body.user else {
            return Self::Unauthenticated;
        };
        match UserProfile::new(&user.email, &user.name, user.picture.as_deref(), &user.sub) {
            Ok(profile) => Self::Authenticated {
                user: profile,
                provider_linked: body.google_connected.unwrap_or(false),
            },
            Err(_) => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Authenticated { user, .. } => Some(user),
            Self::Unauthenticated => None,
        }
    }

    pub fn subject_id(&self) -> Option<&str> {
        self.user().map(UserProfile::subject_id)
    }

    /// Whether the backend holds Gmail access for this user.
    pub fn provider_linked(&self) -> bool {
        matches!(self, Self::Authenticated { provider_linked: true, .. })
    }
}

/// Per-mount auth gate status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateStatus {
    /// No identity check has completed during this mount.
    #[default]
    Loading,
    Resolved(AuthState),
}

impl GateStatus {
    pub fn loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Self::Resolved(state) => state.user(),
            Self::Loading => None,
        }
    }

    /// Which branch a protected view should render.
    pub fn branch(&self) -> GateBranch {
        match self {
            Self::Loading => GateBranch::Skeleton,
            Self::Resolved(AuthState::Unauthenticated) => GateBranch::LoginPrompt,
            Self::Resolved(AuthState::Authenticated { user, .. }) => GateBranch::Protected(user.clone()),
        }
    }
}

/// Rendering decision derived from [`GateStatus`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateBranch {
    Skeleton,
    LoginPrompt,
    Protected(UserProfile),
}
