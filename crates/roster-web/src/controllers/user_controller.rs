//! User directory controller.

use crate::{responses::WebResult, state::AppState};
use axum::{
    extract::{rejection::FormRejection, Path, State},
    http::Uri,
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use roster_core::{RosterError, UserId};
use roster_service::AddUserForm;
use tracing::debug;

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/add_user", get(add_user_form).post(add_user))
        .route("/delete_user/:id", post(delete_user))
}

/// Lists all users.
async fn index(State(state): State<AppState>) -> WebResult<Html<String>> {
    debug!("List users request");

    let users = state.user_service.list_users().await?;
    Ok(Html(state.ssr.render_index(&users)))
}

/// Shows the add-user form.
async fn add_user_form(State(state): State<AppState>) -> Html<String> {
    Html(state.ssr.render_add_user_form())
}

/// Adds a user and goes back to the list.
async fn add_user(
    State(state): State<AppState>,
    payload: Result<Form<AddUserForm>, FormRejection>,
) -> WebResult<Redirect> {
    let Form(form) = payload?;
    debug!("Add user request: {:?}", form.username);

    state.user_service.add_user(form).await?;
    Ok(Redirect::to("/"))
}

/// Deletes a user and goes back to the list.
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<Redirect> {
    debug!("Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(user_id).await?;
    Ok(Redirect::to("/"))
}

/// Answers any path no route matched.
pub async fn fallback(uri: Uri) -> WebResult<()> {
    Err(RosterError::not_found("Page", uri.path()).into())
}

/// A path segment that is not an integer names no user.
fn parse_user_id(id: &str) -> Result<UserId, RosterError> {
    UserId::parse(id).map_err(|_| RosterError::not_found("User", id))
}
