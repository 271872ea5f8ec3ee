use axum::extract::{Form, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{LoginData, LoginType};
use crate::utils::session::Session;
use crate::views;

#[instrument(skip_all)]
pub(crate) async fn index() -> Html<String> {
    views::index(None)
}

#[instrument(skip_all, fields(login_type))]
pub(crate) async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(credentials): Form<LoginData>,
) -> Result<Response, Error> {
    tracing::Span::current().record("login_type", tracing::field::debug(credentials.login_type));

    let user = match credentials.login_type {
        LoginType::Vulnerable => {
            state
                .store
                .vulnerable_login(&credentials.username, &credentials.password)
                .await?
        }
        LoginType::Secure => {
            state
                .store
                .secure_login(&credentials.username, &credentials.password)
                .await?
        }
    };

    match user {
        Some(user) => {
            tracing::info!(username = %user.username, "login succeeded");

            Ok((session.establish(&user.username), Redirect::to("/admin")).into_response())
        }
        None => {
            tracing::info!("login failed");

            Ok(views::index(Some(credentials.login_type.failure_message())).into_response())
        }
    }
}

#[instrument(skip_all)]
pub(crate) async fn logout(session: Session) -> impl IntoResponse {
    (session.clear(), Redirect::to("/"))
}
