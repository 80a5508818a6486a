//! Users domain accessor

use crate::error::StoreError;
use crate::store::ScenarioStore;
use mirage_model::{PermissionMatrix, User, UserGroup, UserId, UserPatch, UserRole, UserStatus};
use std::sync::Arc;
use ulid::Ulid;

/// Read/mutate access to the users slice of the dataset
#[derive(Clone)]
pub struct UsersAccess {
    store: Arc<ScenarioStore>,
}

impl UsersAccess {
    #[must_use]
    pub fn new(store: Arc<ScenarioStore>) -> Self {
        Self { store }
    }

    /// All users, invite order first
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.store.snapshot().users
    }

    /// User by id
    #[must_use]
    pub fn get(&self, id: &UserId) -> Option<User> {
        self.store.snapshot().users.into_iter().find(|u| &u.id == id)
    }

    /// All user groups
    #[must_use]
    pub fn groups(&self) -> Vec<UserGroup> {
        self.store.snapshot().user_groups
    }

    /// The role/capability matrix
    #[must_use]
    pub fn permission_matrix(&self) -> PermissionMatrix {
        self.store.snapshot().permission_matrix
    }

    /// Invite a new user: generates an id, derives a display name from the
    /// email's local part, and prepends the user to the list.
    pub fn invite(&self, email: &str, role: UserRole) -> User {
        let now = self.store.context().now;
        let user = User {
            id: UserId::new(format!("user-{}", Ulid::new().to_string().to_lowercase())),
            email: email.to_string(),
            name: display_name_from_email(email),
            role,
            status: UserStatus::Invited,
            request_count: 0,
            created_at: now,
            last_active_at: now,
        };
        tracing::info!(email, role = %role, "inviting demo user");
        self.store.update(|s| s.users.insert(0, user.clone()));
        user
    }

    /// Merge a patch into an existing user and stamp last activity
    pub fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, StoreError> {
        let now = self.store.context().now;
        self.store.update(|s| {
            let user = s
                .users
                .iter_mut()
                .find(|u| &u.id == id)
                .ok_or_else(|| StoreError::missing("user", id.as_str()))?;
            user.apply(patch);
            user.last_active_at = now;
            Ok(user.clone())
        })
    }

    /// Remove a user by id
    pub fn remove(&self, id: &UserId) -> Result<(), StoreError> {
        self.store.update(|s| {
            let before = s.users.len();
            s.users.retain(|u| &u.id != id);
            if s.users.len() == before {
                return Err(StoreError::missing("user", id.as_str()));
            }
            tracing::debug!(id = %id, "removed demo user");
            Ok(())
        })
    }
}

/// "dana.fields@example.com" -> "Dana Fields"
fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    let parts: Vec<String> = local
        .split(['.', '_', '-', '+'])
        .filter(|p| !p.is_empty())
        .map(capitalize)
        .collect();
    if parts.is_empty() {
        local.to_string()
    } else {
        parts.join(" ")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DemoData;

    #[test]
    fn display_names_come_from_the_local_part() {
        assert_eq!(display_name_from_email("dana.fields@example.com"), "Dana Fields");
        assert_eq!(display_name_from_email("jonas_keller@example.com"), "Jonas Keller");
        assert_eq!(display_name_from_email("solo@example.com"), "Solo");
        assert_eq!(display_name_from_email("noat"), "Noat");
    }

    #[test]
    fn invite_prepends_an_invited_user() {
        let users = DemoData::with_defaults().users();
        let before = users.list().len();

        let invited = users.invite("new.person@example.com", UserRole::Viewer);

        let listed = users.list();
        assert_eq!(listed.len(), before + 1);
        assert_eq!(listed[0].id, invited.id);
        assert_eq!(listed[0].status, UserStatus::Invited);
        assert_eq!(listed[0].name, "New Person");
    }

    #[test]
    fn update_merges_and_stamps_activity() {
        let data = DemoData::with_defaults();
        let users = data.users();
        let target = users.list()[2].clone();

        let updated = users
            .update(
                &target.id,
                &UserPatch {
                    role: Some(UserRole::Admin),
                    ..UserPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.role, UserRole::Admin);
        assert_eq!(updated.name, target.name);
        assert_eq!(updated.last_active_at, data.store().context().now);
    }

    #[test]
    fn mutating_a_missing_user_is_an_error() {
        let users = DemoData::with_defaults().users();
        let ghost = UserId::new("user-ghost");

        assert!(matches!(
            users.update(&ghost, &UserPatch::default()),
            Err(StoreError::MissingEntity { .. })
        ));
        assert!(users.remove(&ghost).is_err());
    }

    #[test]
    fn remove_deletes_by_id() {
        let users = DemoData::with_defaults().users();
        let target = users.list()[0].id.clone();

        users.remove(&target).unwrap();
        assert!(users.get(&target).is_none());
    }
}
