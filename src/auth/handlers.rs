use axum::{
    extract::{FromRef, State},
    http::{header::SET_COOKIE, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginForm, RegisterForm},
        extractors::SessionUser,
        repo_types::User,
        services::{
            clear_session_cookie, hash_password, session_cookie, verify_password, SessionKeys,
        },
    },
    error::AppError,
    state::AppState,
    validation::FieldError,
    views,
};

pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout).post(logout))
}

pub fn register_routes() -> Router<AppState> {
    Router::new().route("/register", get(register_page).post(register))
}

fn render_login(
    status: StatusCode,
    viewer: Option<&SessionUser>,
    email: &str,
    errors: &[FieldError],
) -> Response {
    (status, Html(views::login(viewer, email, errors))).into_response()
}

fn render_register(
    status: StatusCode,
    viewer: Option<&SessionUser>,
    form: &RegisterForm,
    errors: &[FieldError],
) -> Response {
    (status, Html(views::register(viewer, form, errors))).into_response()
}

pub async fn login_page(viewer: Option<SessionUser>) -> Html<String> {
    Html(views::login(viewer.as_ref(), "", &[]))
}

pub async fn register_page(viewer: Option<SessionUser>) -> Html<String> {
    Html(views::register(viewer.as_ref(), &RegisterForm::default(), &[]))
}

#[instrument(skip(state, viewer, form))]
pub async fn login(
    State(state): State<AppState>,
    viewer: Option<SessionUser>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let email = match form.email() {
        Ok(e) => e,
        Err(err) => {
            warn!(email = %form.email, "invalid email");
            return Ok(render_login(
                StatusCode::BAD_REQUEST,
                viewer.as_ref(),
                &form.email,
                &[err],
            ));
        }
    };

    let invalid = || {
        render_login(
            StatusCode::UNAUTHORIZED,
            viewer.as_ref(),
            &email,
            &[FieldError::new("form", "Invalid email or password.")],
        )
    };

    let Some(user) = User::find_by_email(&state.db, &email).await? else {
        warn!(email = %email, "login unknown email");
        return Ok(invalid());
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Ok(invalid());
    }

    let token = SessionKeys::from_ref(&state).sign(user.id, &user.email)?;
    let cookie = session_cookie(&state.config.session, &token)?;

    info!(user_id = %user.id, email = %user.email, "user logged in");
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/home")).into_response())
}

#[instrument(skip(state, viewer, form))]
pub async fn register(
    State(state): State<AppState>,
    viewer: Option<SessionUser>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let new_user = match form.validate() {
        Ok(u) => u,
        Err(errors) => {
            warn!(?errors, "register form rejected");
            return Ok(render_register(
                StatusCode::BAD_REQUEST,
                viewer.as_ref(),
                &form,
                &errors,
            ));
        }
    };

    let taken = || {
        render_register(
            StatusCode::CONFLICT,
            viewer.as_ref(),
            &form,
            &[FieldError::new("email", AppError::EmailTaken.to_string())],
        )
    };

    if User::find_by_email(&state.db, &new_user.email).await?.is_some() {
        warn!(email = %new_user.email, "email already registered");
        return Ok(taken());
    }

    let hash = hash_password(&form.password)?;

    // The unique constraint still decides when two registrations race.
    match User::create(&state.db, &new_user, &hash).await {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "user registered");
            Ok(Redirect::to("/login").into_response())
        }
        Err(AppError::EmailTaken) => {
            warn!(email = %new_user.email, "email already registered");
            Ok(taken())
        }
        Err(e) => Err(e),
    }
}

#[instrument(skip(state, viewer))]
pub async fn logout(
    State(state): State<AppState>,
    viewer: Option<SessionUser>,
) -> Result<Response, AppError> {
    if let Some(user) = viewer {
        info!(user_id = %user.id, "user logged out");
    }
    let cookie = clear_session_cookie(&state.config.session)?;
    Ok(([(SET_COOKIE, cookie)], Redirect::to("/home")).into_response())
}
