use tracing::info;

use crate::domain::credentials::{generate_password, generate_token, hash_password};
use crate::domain::repository::{EmailSender, UserRepository};
use crate::domain::types::{Identity, NewUser, SYSTEM_USER_ID, User};
use crate::error::InventoryServiceError;

pub const RESET_EMAIL_SUBJECT: &str = "Inventory Password Reset";

fn reset_email_body(password: &str) -> String {
    format!(
        "<p>Your new password is <b>{password}</b>. Please change it once you log in. </p>"
    )
}

// ── LookupUser ───────────────────────────────────────────────────────────────

pub struct LookupUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> LookupUserUseCase<R> {
    /// Resolve an account by username on behalf of `actor_id`. Unknown or
    /// inactive usernames are `Anonymous`.
    pub async fn execute(
        &self,
        username: &str,
        actor_id: i32,
    ) -> Result<Identity, InventoryServiceError> {
        let identity: Identity = self.repo.find_by_username(username).await?.into();
        tracing::debug!(
            username,
            actor_id,
            found = identity.is_valid(),
            "looked up user"
        );
        Ok(identity)
    }
}

// ── AddUser ──────────────────────────────────────────────────────────────────

pub struct AddUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

pub struct AddUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> AddUserUseCase<R> {
    pub async fn execute(&self, input: AddUserInput) -> Result<(), InventoryServiceError> {
        let username = input.username.trim();
        if username.is_empty() {
            return Err(InventoryServiceError::missing("username"));
        }
        if input.password.is_empty() {
            return Err(InventoryServiceError::missing("password"));
        }
        let email = input.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(InventoryServiceError::missing("email"));
        }

        let user = NewUser {
            username: username.to_owned(),
            email,
            password_hash: hash_password(&input.password)?,
            token: generate_token(),
            is_admin: input.is_admin,
        };
        self.repo.create(&user).await?;
        info!(username = %user.username, is_admin = user.is_admin, "user created");
        Ok(())
    }
}

// ── ListUsers ────────────────────────────────────────────────────────────────

pub struct ListUsersUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ListUsersUseCase<R> {
    pub async fn execute(&self) -> Result<Vec<User>, InventoryServiceError> {
        self.repo.list_active().await
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> DeleteUserUseCase<R> {
    pub async fn execute(&self, target_id: i32, actor_id: i32) -> Result<(), InventoryServiceError> {
        if target_id == SYSTEM_USER_ID {
            return Err(InventoryServiceError::SystemAccount);
        }
        if self.repo.soft_delete(target_id).await? == 0 {
            return Err(InventoryServiceError::UserNotFound);
        }
        info!(target_id, actor_id, "user deleted");
        Ok(())
    }
}

// ── ResetPassword ────────────────────────────────────────────────────────────

pub struct ResetPasswordUseCase<R: UserRepository, M: EmailSender> {
    pub repo: R,
    pub mailer: M,
}

impl<R: UserRepository, M: EmailSender> ResetPasswordUseCase<R, M> {
    /// Mail a fresh password to the address on file, then store its hash. A
    /// failed send leaves the old password in place.
    pub async fn execute(
        &self,
        username: &str,
        claimed_email: &str,
    ) -> Result<(), InventoryServiceError> {
        if username.is_empty() {
            return Err(InventoryServiceError::missing("username"));
        }
        if claimed_email.is_empty() {
            return Err(InventoryServiceError::missing("email"));
        }

        let user = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or(InventoryServiceError::UserNotFound)?;
        if user.id == SYSTEM_USER_ID {
            return Err(InventoryServiceError::SystemAccount);
        }
        if user.email.to_lowercase() != claimed_email.trim().to_lowercase() {
            return Err(InventoryServiceError::EmailMismatch);
        }

        let password = generate_password();
        let password_hash = hash_password(&password)?;
        self.mailer
            .send(&user.email, RESET_EMAIL_SUBJECT, &reset_email_body(&password))
            .await?;
        self.repo.update_password(user.id, &password_hash).await?;

        info!(user_id = user.id, "password reset");
        Ok(())
    }
}
