use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use tracing::{info, instrument, warn};

use crate::{
    auth::extractors::SessionUser,
    error::AppError,
    posts::{dto::PostForm, repo_types::Post},
    state::AppState,
    views,
};

pub fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/home", get(home))
}

pub fn write_routes() -> Router<AppState> {
    Router::new().route("/post", get(new_post).post(create_post))
}

#[instrument(skip(state, viewer))]
pub async fn home(
    State(state): State<AppState>,
    viewer: Option<SessionUser>,
) -> Result<Html<String>, AppError> {
    let posts = Post::list_all(&state.db).await?;
    Ok(Html(views::home(viewer.as_ref(), &posts)))
}

pub async fn new_post(viewer: Option<SessionUser>) -> Html<String> {
    Html(views::post_form(viewer.as_ref(), &PostForm::default(), &[]))
}

#[instrument(skip(state, viewer, form))]
pub async fn create_post(
    State(state): State<AppState>,
    viewer: Option<SessionUser>,
    Form(form): Form<PostForm>,
) -> Result<Response, AppError> {
    let new_post = match form.validate() {
        Ok(p) => p,
        Err(errors) => {
            warn!(?errors, "post form rejected");
            return Ok(Html(views::post_form(viewer.as_ref(), &form, &errors)).into_response());
        }
    };

    let post = Post::create(&state.db, &new_post).await?;
    info!(post_id = %post.id, title = %post.title, "post created");
    Ok(Redirect::to("/home").into_response())
}
