use axum::{
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use crate::{
    api::{AppState, STATE_COOKIE},
    recommend::{self, NO_TOP_TRACKS_MESSAGE, Outcome, StageError},
    render::PageRenderer,
    types::CallbackParams,
    warning,
};

pub const STATE_MISMATCH_MESSAGE: &str = "State mismatch";
pub const RENDER_ERROR_MESSAGE: &str = "Error rendering page";

/// Completes the authorization code flow and renders the recommendation.
///
/// The `state` query parameter must equal the value of the state cookie
/// set by `/login`; otherwise the request is rejected with 401 before any
/// call to Spotify. On a match the cookie is cleared and the
/// recommendation pipeline runs.
pub async fn callback(
    State(state): State<AppState>,
    jar: CookieJar,
    params: Result<Query<CallbackParams>, QueryRejection>,
) -> Response {
    // an unparsable query carries no usable state
    let params = params.map(|Query(p)| p).unwrap_or_default();
    let stored = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    let received = params.state.as_deref().filter(|s| !s.is_empty());

    match (received, stored.as_deref()) {
        (Some(received), Some(stored)) if received == stored => {}
        _ => {
            warning!("Rejected callback with a missing or mismatched state");
            return (StatusCode::UNAUTHORIZED, STATE_MISMATCH_MESSAGE).into_response();
        }
    }

    let jar = jar.remove(Cookie::build(STATE_COOKIE).path("/"));

    let outcome = recommend::run(state.spotify.as_ref(), params.code.as_deref()).await;
    let response = respond(state.renderer.as_ref(), outcome).await;

    (jar, response).into_response()
}

async fn respond(
    renderer: &dyn PageRenderer,
    outcome: Result<Outcome, StageError>,
) -> Response {
    match outcome {
        Ok(Outcome::NoTopTracks) => NO_TOP_TRACKS_MESSAGE.into_response(),
        Ok(Outcome::Recommended {
            recommendation,
            top_tracks,
        }) => match renderer.render(&recommendation, &top_tracks).await {
            Ok(page) => Html(page).into_response(),
            Err(e) => {
                warning!("Failed to render page: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, RENDER_ERROR_MESSAGE).into_response()
            }
        },
        Err(e) => {
            warning!("{}: {}", e.message(), e.api_error());
            (StatusCode::BAD_GATEWAY, e.message()).into_response()
        }
    }
}
