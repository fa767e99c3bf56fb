//! Authentication extractor
//!
//! Reads the session token from the Authorization header or the `session`
//! cookie and loads the user it belongs to.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use modboard_core::entities::User;
use modboard_service::SessionService;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "session";

/// Authenticated user loaded from the session token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user: User,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user: User) -> Self {
        Self { user }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = match TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
            .await
        {
            Ok(TypedHeader(Authorization(bearer))) => bearer.token().to_string(),
            Err(_) => CookieJar::from_headers(&parts.headers)
                .get(SESSION_COOKIE)
                .map(|cookie| cookie.value().to_string())
                .ok_or(ApiError::MissingAuth)?,
        };

        let app_state = AppState::from_ref(state);
        let user = SessionService::new(app_state.service_context())
            .authenticate(&token)
            .await
            .map_err(|e| {
                if e.status_code() == 401 {
                    tracing::warn!(error = %e, "Rejected session");
                }
                ApiError::from(e)
            })?;

        Ok(AuthUser::new(user))
    }
}
