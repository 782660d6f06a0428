use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::domain::types::User;
use crate::error::InventoryServiceError;
use crate::extract::{CurrentUser, JsonBody, QueryParams};
use crate::handlers::Success;
use crate::state::AppState;
use crate::usecase::user::{
    AddUserInput, AddUserUseCase, DeleteUserUseCase, ListUsersUseCase, LookupUserUseCase,
    ResetPasswordUseCase,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub username: String,
    pub email: String,
    pub is_sys_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            email: user.email,
            is_sys_admin: user.is_admin,
        }
    }
}

// ── GET /api/users ───────────────────────────────────────────────────────────

pub async fn list_users(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, InventoryServiceError> {
    user.ensure_admin()?;
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── POST /api/user/add ───────────────────────────────────────────────────────

/// Admin flag as sent by clients: a JSON bool or the string `"true"`.
#[derive(Deserialize)]
#[serde(untagged)]
pub enum AdminFlag {
    Bool(bool),
    Text(String),
}

impl AdminFlag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => s == "true",
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, alias = "is_sys_admin")]
    pub is_sys_admin: Option<AdminFlag>,
}

pub async fn add_user(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<AddUserRequest>,
) -> Result<Json<Success>, InventoryServiceError> {
    user.ensure_admin()?;
    let usecase = AddUserUseCase {
        repo: state.user_repo(),
    };
    usecase
        .execute(AddUserInput {
            username: body.username,
            email: body.email,
            password: body.password,
            is_admin: body.is_sys_admin.is_some_and(|f| f.is_set()),
        })
        .await?;
    Ok(Json(Success::ok()))
}

// ── DELETE /api/user/delete ──────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct DeleteUserQuery {
    #[serde(default)]
    pub u: String,
}

pub async fn delete_user(
    CurrentUser(user): CurrentUser,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<DeleteUserQuery>,
) -> Result<Json<Success>, InventoryServiceError> {
    user.ensure_admin()?;
    if query.u.is_empty() {
        return Err(InventoryServiceError::missing("u"));
    }

    let lookup = LookupUserUseCase {
        repo: state.user_repo(),
    };
    let target = lookup
        .execute(&query.u, user.id)
        .await?
        .into_user()
        .ok_or(InventoryServiceError::UserNotFound)?;

    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
    };
    usecase.execute(target.id, user.id).await?;
    Ok(Json(Success::ok()))
}

// ── GET /api/user/resetPassword ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordQuery {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<ResetPasswordQuery>,
) -> Result<Json<Success>, InventoryServiceError> {
    let usecase = ResetPasswordUseCase {
        repo: state.user_repo(),
        mailer: state.email_sender(),
    };
    usecase.execute(&query.username, &query.email).await?;
    Ok(Json(Success::ok()))
}
