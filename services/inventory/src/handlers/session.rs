use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;
use serde::{Deserialize, Serialize};

use crate::domain::types::AuthUser;
use crate::error::InventoryServiceError;
use crate::extract::{CurrentUser, JsonBody, MaybeUser, expired_token_cookie, token_cookie};
use crate::handlers::Success;
use crate::state::AppState;
use crate::usecase::session::{CheckCredentialsUseCase, LoginUseCase};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUserResponse {
    pub username: String,
    pub email: String,
    pub is_sys_admin: bool,
}

impl From<AuthUser> for SessionUserResponse {
    fn from(user: AuthUser) -> Self {
        Self {
            username: user.username,
            email: user.email,
            is_sys_admin: user.is_admin,
        }
    }
}

// ── POST /api/user/login ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(body): JsonBody<LoginRequest>,
) -> Result<(CookieJar, Json<SessionUserResponse>), InventoryServiceError> {
    let usecase = LoginUseCase {
        credentials: CheckCredentialsUseCase {
            repo: state.user_repo(),
        },
    };
    let out = usecase.execute(&body.username, &body.password).await?;
    let user = out
        .identity
        .into_user()
        .ok_or(InventoryServiceError::InvalidCredentials)?;
    Ok((jar.add(token_cookie(out.token)), Json(user.into())))
}

// ── GET /api/user/logincheck ─────────────────────────────────────────────────

pub async fn login_check(CurrentUser(user): CurrentUser) -> Json<SessionUserResponse> {
    Json(user.into())
}

// ── DELETE /api/user/logout ──────────────────────────────────────────────────

pub async fn logout(MaybeUser(identity): MaybeUser, jar: CookieJar) -> (CookieJar, Json<Success>) {
    if let Some(user) = identity.user() {
        tracing::info!(user_id = user.id, "user logged out");
    }
    (jar.add(expired_token_cookie()), Json(Success::ok()))
}
