//! Users, groups, and the permission matrix

use crate::ids::{GroupId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roles assignable to a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    Viewer,
}

impl UserRole {
    /// Every assignable role, in display order. The permission matrix must
    /// carry exactly this set.
    pub const ALL: [UserRole; 3] = [UserRole::Admin, UserRole::Editor, UserRole::Viewer];

    /// Lowercase wire name
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Editor => "editor",
            UserRole::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account state of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Invited,
    Suspended,
}

/// A workspace user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub status: UserStatus,
    /// Total API requests attributed to this user in the reporting window
    pub request_count: u64,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
}

/// A named group of users
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub member_ids: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Capability grants for one role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleGrants {
    pub role: UserRole,
    pub can_view_records: bool,
    pub can_edit_records: bool,
    pub can_delete_records: bool,
    pub can_manage_users: bool,
    pub can_manage_models: bool,
}

/// Role-to-capability matrix. Rows cover exactly `UserRole::ALL`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionMatrix {
    pub entries: Vec<RoleGrants>,
}

impl PermissionMatrix {
    /// Grants for one role, if present
    #[must_use]
    pub fn grants_for(&self, role: UserRole) -> Option<&RoleGrants> {
        self.entries.iter().find(|e| e.role == role)
    }
}

/// Field-wise update to a user; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub status: Option<UserStatus>,
}

impl User {
    /// Merge a patch into this user. Timestamps are the caller's concern.
    pub fn apply(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_user() -> User {
        let at = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        User {
            id: UserId::new("user-1"),
            email: "dana.fields@example.com".to_string(),
            name: "Dana Fields".to_string(),
            role: UserRole::Editor,
            status: UserStatus::Active,
            request_count: 120,
            created_at: at,
            last_active_at: at,
        }
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut user = sample_user();
        user.apply(&UserPatch {
            role: Some(UserRole::Admin),
            ..UserPatch::default()
        });

        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(user.name, "Dana Fields");
        assert_eq!(user.status, UserStatus::Active);
    }

    #[test]
    fn role_wire_names_are_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }
}
