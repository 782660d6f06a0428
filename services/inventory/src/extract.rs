//! Authentication gate extractors, the session cookie, and body/query
//! extractors that reject with the service error envelope.
//!
//! The account token travels in the `token` cookie set by login, or in an
//! `Authorization: Bearer` header for non-browser clients.

use axum::extract::{FromRequest, FromRequestParts};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::domain::types::{AuthUser, Identity};
use crate::error::InventoryServiceError;
use crate::state::AppState;
use crate::usecase::session::ResolveTokenUseCase;

/// `axum::Json` whose rejection renders as an [`InventoryServiceError`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(InventoryServiceError))]
pub struct JsonBody<T>(pub T);

/// `axum::extract::Query` whose rejection renders as an [`InventoryServiceError`].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(InventoryServiceError))]
pub struct QueryParams<T>(pub T);

/// Session cookie name.
pub const TOKEN_COOKIE: &str = "token";

/// Session cookie lifetime in days.
pub const TOKEN_COOKIE_DAYS: i64 = 31;

/// Read the account token from the request, cookie first. Returns an empty
/// string when neither source carries one.
pub fn read_token(headers: &HeaderMap) -> String {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE).filter(|c| !c.value().is_empty()) {
        return cookie.value().to_owned();
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_owned())
        .unwrap_or_default()
}

pub fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .max_age(Duration::days(TOKEN_COOKIE_DAYS))
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Empty, already-expired session cookie. Overwrites whatever the client holds.
pub fn expired_token_cookie() -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Required gate: rejects anonymous callers with 401.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthUser);

/// Optional gate: always succeeds with whatever identity the token resolves to.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Identity);

fn resolve(
    parts: &Parts,
    state: &AppState,
) -> impl Future<Output = Result<Identity, InventoryServiceError>> + Send + use<> {
    let token = read_token(&parts.headers);
    let usecase = ResolveTokenUseCase {
        repo: state.user_repo(),
    };
    async move { usecase.execute(&token).await }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = InventoryServiceError;

    // Extract synchronously and hand back a 'static future; an `async fn` here
    // would capture the `parts` borrow.
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = resolve(parts, state);
        async move {
            identity
                .await?
                .into_user()
                .map(Self)
                .ok_or(InventoryServiceError::Unauthorized)
        }
    }
}

impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = InventoryServiceError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let identity = resolve(parts, state);
        async move { identity.await.map(Self) }
    }
}
