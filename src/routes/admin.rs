use axum::response::{IntoResponse, Redirect, Response};
use tracing::instrument;

use crate::types::customer::CUSTOMERS;
use crate::utils::session::Session;
use crate::views;

/// Session presence is the entire authorization check; anonymous visitors
/// are bounced back to the login form without an error.
#[instrument(skip_all)]
pub(crate) async fn admin(session: Session) -> Response {
    match session.username() {
        Some(username) => views::admin(&username, &CUSTOMERS).into_response(),
        None => Redirect::to("/").into_response(),
    }
}
