use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::Redirect,
};
use tracing::warn;
use uuid::Uuid;

use super::services::{session_token_from_headers, SessionKeys};

/// Signed-in user, resolved from the session cookie.
///
/// Every page takes `Option<SessionUser>`. A missing or invalid session is
/// rejected with a redirect to `/login`, which the `Option` wrapper absorbs.
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub id: Uuid,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    SessionKeys: FromRef<S>,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token =
            session_token_from_headers(&parts.headers).ok_or_else(|| Redirect::to("/login"))?;

        let keys = SessionKeys::from_ref(state);
        let claims = match keys.verify(&token) {
            Ok(c) => c,
            Err(_) => {
                warn!("invalid or expired session");
                return Err(Redirect::to("/login"));
            }
        };

        Ok(SessionUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;
    use axum::http::{header::COOKIE, Request, StatusCode};
    use axum::response::IntoResponse;

    async fn extract(cookie: Option<&str>) -> Result<SessionUser, Redirect> {
        let state = AppState::fake();
        let mut builder = Request::builder().uri("/");
        if let Some(c) = cookie {
            builder = builder.header(COOKIE, c);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        SessionUser::from_request_parts(&mut parts, &state).await
    }

    #[tokio::test]
    async fn resolves_valid_session() {
        let state = AppState::fake();
        let id = Uuid::new_v4();
        let token = SessionKeys::from_ref(&state).sign(id, "test@user.com").unwrap();
        let cookie = format!("blog_session={token}");
        let user = extract(Some(cookie.as_str())).await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.email, "test@user.com");
    }

    #[tokio::test]
    async fn missing_cookie_redirects_to_login() {
        let rejection = extract(None).await.unwrap_err().into_response();
        assert_eq!(rejection.status(), StatusCode::SEE_OTHER);
        assert_eq!(rejection.headers()["location"], "/login");
    }

    #[tokio::test]
    async fn tampered_token_is_rejected() {
        assert!(extract(Some("blog_session=abc.def.ghi")).await.is_err());
    }
}
