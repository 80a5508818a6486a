//! Users repository

use crate::client::{ApiRequest, NetworkClient};
use crate::error::ApiError;
use crate::routes;
use async_trait::async_trait;
use mirage_model::{PermissionMatrix, User, UserGroup, UserId, UserPatch, UserRole};
use mirage_store::UsersAccess;
use serde_json::json;
use std::sync::Arc;

/// Contract shared by the live and demo implementations
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn get(&self, id: &UserId) -> Result<Option<User>, ApiError>;
    async fn groups(&self) -> Result<Vec<UserGroup>, ApiError>;
    async fn permission_matrix(&self) -> Result<PermissionMatrix, ApiError>;
    async fn invite(&self, email: &str, role: UserRole) -> Result<User, ApiError>;
    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError>;
    async fn remove(&self, id: &UserId) -> Result<(), ApiError>;
}

/// Backend-backed implementation
pub struct LiveUsersRepository {
    client: Arc<dyn NetworkClient>,
}

impl LiveUsersRepository {
    #[must_use]
    pub fn new(client: Arc<dyn NetworkClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UsersRepository for LiveUsersRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        let value = self.client.send(ApiRequest::get(routes::USERS)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, ApiError> {
        let value = self
            .client
            .send(ApiRequest::get(routes::user(id.as_str())))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn groups(&self) -> Result<Vec<UserGroup>, ApiError> {
        let value = self.client.send(ApiRequest::get(routes::USER_GROUPS)).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn permission_matrix(&self) -> Result<PermissionMatrix, ApiError> {
        let value = self
            .client
            .send(ApiRequest::get(routes::USER_PERMISSIONS))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn invite(&self, email: &str, role: UserRole) -> Result<User, ApiError> {
        let value = self
            .client
            .send(ApiRequest::post(
                routes::USERS,
                json!({ "email": email, "role": role }),
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        let value = self
            .client
            .send(ApiRequest::patch(
                routes::user(id.as_str()),
                serde_json::to_value(patch)?,
            ))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn remove(&self, id: &UserId) -> Result<(), ApiError> {
        self.client
            .send(ApiRequest::delete(routes::user(id.as_str())))
            .await?;
        Ok(())
    }
}

/// Dataset-backed implementation
pub struct DemoUsersRepository {
    users: UsersAccess,
}

impl DemoUsersRepository {
    #[must_use]
    pub fn new(users: UsersAccess) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UsersRepository for DemoUsersRepository {
    async fn list(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.list())
    }

    async fn get(&self, id: &UserId) -> Result<Option<User>, ApiError> {
        Ok(self.users.get(id))
    }

    async fn groups(&self) -> Result<Vec<UserGroup>, ApiError> {
        Ok(self.users.groups())
    }

    async fn permission_matrix(&self) -> Result<PermissionMatrix, ApiError> {
        Ok(self.users.permission_matrix())
    }

    async fn invite(&self, email: &str, role: UserRole) -> Result<User, ApiError> {
        Ok(self.users.invite(email, role))
    }

    async fn update(&self, id: &UserId, patch: &UserPatch) -> Result<User, ApiError> {
        Ok(self.users.update(id, patch)?)
    }

    async fn remove(&self, id: &UserId) -> Result<(), ApiError> {
        Ok(self.users.remove(id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockNetworkClient;
    use mirage_store::DemoData;

    #[tokio::test]
    async fn demo_list_equals_the_accessor_answer() {
        let data = DemoData::with_defaults();
        let repo = DemoUsersRepository::new(data.users());

        assert_eq!(repo.list().await.unwrap(), data.users().list());
    }

    #[tokio::test]
    async fn demo_get_of_missing_user_is_none_not_an_error() {
        let repo = DemoUsersRepository::new(DemoData::with_defaults().users());
        let result = repo.get(&UserId::new("user-ghost")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn demo_remove_of_missing_user_is_an_error() {
        let repo = DemoUsersRepository::new(DemoData::with_defaults().users());
        let err = repo.remove(&UserId::new("user-ghost")).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingEntity(_)));
    }

    #[tokio::test]
    async fn live_list_deserializes_the_response() {
        let users = DemoData::with_defaults().users().list();
        let payload = serde_json::to_value(&users).unwrap();

        let mut client = MockNetworkClient::new();
        client
            .expect_send()
            .withf(|req| req.path == routes::USERS)
            .return_once(move |_| Ok(payload));

        let repo = LiveUsersRepository::new(Arc::new(client));
        assert_eq!(repo.list().await.unwrap(), users);
    }

    #[tokio::test]
    async fn live_list_maps_shape_mismatch_to_schema_error() {
        let mut client = MockNetworkClient::new();
        client
            .expect_send()
            .return_once(|_| Ok(serde_json::json!({ "unexpected": true })));

        let repo = LiveUsersRepository::new(Arc::new(client));
        let err = repo.list().await.unwrap_err();
        assert!(matches!(err, ApiError::Schema { .. }));
    }
}
