use axum::{
    Router,
    extract::{MatchedPath, Request},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::info_span;

use crate::core::state::AppState;
use crate::routes::{admin, login};

pub(crate) fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(login::index).post(login::login))
        .route("/admin", get(admin::admin))
        .route("/logout", get(login::logout))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let matched_path = request
                    .extensions()
                    .get::<MatchedPath>()
                    .map(MatchedPath::as_str);

                info_span!(
                    "request",
                    method = ?request.method(),
                    matched_path,
                )
            }),
        )
}
