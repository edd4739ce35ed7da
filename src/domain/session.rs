//! Authentication session state as an explicit value.
//!
//! The session is passed down to whoever needs it; login and logout are pure
//! transitions returning the new state. Token issuance and verification
//! belong to the external auth collaborator.

use serde::{Deserialize, Serialize};

use crate::domain::types::UserId;

/// Role assigned to a dashboard user by the external auth service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

/// Profile of an authenticated user.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Current authentication state.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum AuthSession {
    #[default]
    Anonymous,
    Authenticated {
        user: UserProfile,
        token: String,
    },
}

impl AuthSession {
    /// Transition into the authenticated state with credentials issued by
    /// the external auth service. Logging in over an existing session
    /// replaces it.
    pub fn login(self, user: UserProfile, token: impl Into<String>) -> Self {
        AuthSession::Authenticated {
            user,
            token: token.into(),
        }
    }

    /// Transition back to the anonymous state.
    pub fn logout(self) -> Self {
        AuthSession::Anonymous
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            AuthSession::Anonymous => None,
            AuthSession::Authenticated { user, .. } => Some(user),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            AuthSession::Anonymous => None,
            AuthSession::Authenticated { token, .. } => Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthSession::Authenticated { .. })
    }

    pub fn is_admin(&self) -> bool {
        self.user()
            .map(|user| user.role == UserRole::Admin)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> UserProfile {
        UserProfile {
            id: UserId::new("u1").unwrap(),
            name: "Admin".to_string(),
            email: "admin@example.com".to_string(),
            role: UserRole::Admin,
        }
    }

    fn viewer() -> UserProfile {
        UserProfile {
            id: UserId::new("u2").unwrap(),
            name: "Viewer".to_string(),
            email: "viewer@example.com".to_string(),
            role: UserRole::User,
        }
    }

    #[test]
    fn login_from_any_state_yields_authenticated() {
        let session = AuthSession::default().login(admin(), "tok-1");
        assert!(session.is_authenticated());
        assert!(session.is_admin());
        assert_eq!(session.token(), Some("tok-1"));

        // Logging in again replaces the previous session.
        let session = session.login(viewer(), "tok-2");
        assert_eq!(session.user().map(|u| u.name.as_str()), Some("Viewer"));
        assert!(!session.is_admin());
        assert_eq!(session.token(), Some("tok-2"));
    }

    #[test]
    fn logout_from_any_state_yields_anonymous() {
        assert_eq!(AuthSession::Anonymous.logout(), AuthSession::Anonymous);

        let session = AuthSession::default().login(admin(), "tok").logout();
        assert_eq!(session, AuthSession::Anonymous);
        assert!(session.user().is_none());
        assert!(session.token().is_none());
        assert!(!session.is_admin());
    }
}
