use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use idsmoe_redirector::RedirectQuery;
use tracing::debug;

use super::found;
use crate::error::Result;
use crate::state::AppState;

/// `GET /rd` and `GET /redirect`: sends the client to the matching page on
/// the requested platform, or returns the URL as text when raw output is
/// requested.
pub async fn redirect_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Response> {
    let Query(params) = query?;
    let query = RedirectQuery::from_params(&params);
    let redirect = state.redirector().redirect(&query).await?;
    debug!(uri = %redirect.uri, raw = redirect.raw, "redirect resolved");

    if redirect.raw {
        Ok(redirect.uri.into_response())
    } else {
        Ok(found(&redirect.uri))
    }
}
