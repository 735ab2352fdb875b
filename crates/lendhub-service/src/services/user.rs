//! User administration and borrower registration

use lendhub_common::auth::hash_password;
use lendhub_core::{DomainError, User};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::dto::{CreateUserRequest, RegisterBorrowerRequest, UpdateUserRequest, UserResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    fn is_protected(&self, username: &str) -> bool {
        username == self.ctx.settings().admin_username
    }

    /// List all accounts
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().list().await?;
        if users.is_empty() {
            return Err(DomainError::NoResults("user").into());
        }
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Create an account on behalf of an administrator
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<UserResponse> {
        let password_hash = hash_password(&request.password)?;
        let user = User::new(Uuid::new_v4(), request.username, request.is_admin, false);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User created");
        Ok(UserResponse::from(user))
    }

    /// Update the admin flag and optionally the password of an account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn update(&self, request: UpdateUserRequest) -> ServiceResult<()> {
        if self.is_protected(&request.username) {
            return Err(DomainError::ProtectedAccount.into());
        }

        let password_hash = match request.password.as_deref().filter(|p| !p.is_empty()) {
            Some(password) => Some(hash_password(password)?),
            None => None,
        };

        self.ctx
            .user_repo()
            .update_by_username(&request.username, request.is_admin, password_hash.as_deref())
            .await?;

        info!("User updated");
        Ok(())
    }

    /// Delete an account
    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> ServiceResult<()> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("user"))?;

        if self.is_protected(&user.username) {
            return Err(DomainError::ProtectedAccount.into());
        }

        self.ctx.user_repo().delete(id).await?;

        info!("User deleted");
        Ok(())
    }

    /// Borrower self-registration
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn register_borrower(&self, request: RegisterBorrowerRequest) -> ServiceResult<()> {
        let password_hash = hash_password(&request.password)?;
        let user = User::borrower(Uuid::new_v4(), request.username);

        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "Borrower registered");
        Ok(())
    }
}
