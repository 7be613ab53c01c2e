use axum::{response::Html, routing::get, Router};

use crate::{auth::extractors::SessionUser, state::AppState, views};

pub fn router() -> Router<AppState> {
    Router::new().route("/about", get(about))
}

pub async fn about(viewer: Option<SessionUser>) -> Html<String> {
    Html(views::about(viewer.as_ref()))
}
