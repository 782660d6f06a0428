use crate::domain::credentials::verify_password;
use crate::domain::repository::UserRepository;
use crate::domain::types::{Identity, User};
use crate::error::InventoryServiceError;

// ── ResolveToken ─────────────────────────────────────────────────────────────

pub struct ResolveTokenUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> ResolveTokenUseCase<R> {
    /// An empty or unknown token is `Anonymous`. Store errors propagate.
    pub async fn execute(&self, token: &str) -> Result<Identity, InventoryServiceError> {
        if token.is_empty() {
            return Ok(Identity::Anonymous);
        }
        Ok(self.repo.find_by_token(token).await?.into())
    }
}

// ── CheckCredentials ─────────────────────────────────────────────────────────

pub struct CheckCredentialsUseCase<R: UserRepository> {
    pub repo: R,
}

impl<R: UserRepository> CheckCredentialsUseCase<R> {
    /// Returns the stored account on a match so the caller can hand out its token.
    /// Blank input never matches.
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<User>, InventoryServiceError> {
        if username.is_empty() || password.is_empty() {
            return Ok(None);
        }
        let Some(user) = self.repo.find_by_username(username).await? else {
            return Ok(None);
        };
        Ok(verify_password(password, &user.password_hash).then_some(user))
    }
}

// ── Login ────────────────────────────────────────────────────────────────────

pub struct LoginOutput {
    pub token: String,
    pub identity: Identity,
}

pub struct LoginUseCase<R: UserRepository> {
    pub credentials: CheckCredentialsUseCase<R>,
}

impl<R: UserRepository> LoginUseCase<R> {
    pub async fn execute(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginOutput, InventoryServiceError> {
        let user = self
            .credentials
            .execute(username, password)
            .await?
            .ok_or(InventoryServiceError::InvalidCredentials)?;

        tracing::info!(user_id = user.id, "user logged in");
        Ok(LoginOutput {
            token: user.token.clone(),
            identity: Some(user).into(),
        })
    }
}
