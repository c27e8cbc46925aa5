use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Guest,
    TeamMember,
    SuperAdmin,
}

/// Current user as returned by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: UserRole,
}

/// Read-only capability view over the current session.
///
/// Passed explicitly through context instead of a module-level singleton so
/// components (nav, side panel, booking page) share one source of truth and
/// tests can inject fixtures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionContext {
    pub current_user: Option<UserInfo>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn for_user(user: UserInfo) -> Self {
        Self {
            current_user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn is_team_member(&self) -> bool {
        matches!(
            self.current_user.as_ref().map(|u| u.role),
            Some(UserRole::TeamMember) | Some(UserRole::SuperAdmin)
        )
    }

    pub fn is_super_admin(&self) -> bool {
        matches!(
            self.current_user.as_ref().map(|u| u.role),
            Some(UserRole::SuperAdmin)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            email: "staff@example.com".into(),
            full_name: "Staff".into(),
            role,
        }
    }

    #[test]
    fn capability_checks() {
        assert!(!SessionContext::anonymous().is_team_member());
        assert!(!SessionContext::for_user(user(UserRole::Guest)).is_team_member());

        let team = SessionContext::for_user(user(UserRole::TeamMember));
        assert!(team.is_team_member());
        assert!(!team.is_super_admin());

        let admin = SessionContext::for_user(user(UserRole::SuperAdmin));
        assert!(admin.is_team_member());
        assert!(admin.is_super_admin());
    }
}
