use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::UserModel;
use crate::shared::AppError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `Conflict` when the username is taken
    async fn create_user(&self, user: &UserModel) -> Result<(), AppError>;
    async fn get_user(&self, user_id: &str) -> Result<Option<UserModel>, AppError>;
    async fn list_users(&self) -> Result<Vec<UserModel>, AppError>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, UserModel>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    #[instrument(skip(self, user))]
    async fn create_user(&self, user: &UserModel) -> Result<(), AppError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|existing| existing.username.eq_ignore_ascii_case(&user.username))
        {
            warn!(username = %user.username, "Username already taken");
            return Err(AppError::Conflict(format!(
                "Username {} is already taken",
                user.username
            )));
        }

        users.insert(user.id.clone(), user.clone());
        debug!(user_id = %user.id, "User stored in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: &str) -> Result<Option<UserModel>, AppError> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn list_users(&self) -> Result<Vec<UserModel>, AppError> {
        Ok(self.users.read().await.values().cloned().collect())
    }
}
