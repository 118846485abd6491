use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    api::{AppState, STATE_COOKIE, found},
    spotify, utils,
};

/// How long an issued state stays valid in the browser.
const STATE_COOKIE_TTL_MINUTES: i64 = 10;

/// Starts the authorization code flow.
///
/// Issues a fresh state nonce, stores it in an HTTP-only cookie and
/// redirects the browser to Spotify's authorization page. The same nonce is
/// sent along as the `state` parameter and checked again in `/callback`.
pub async fn login(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let auth_state = utils::generate_state();
    let location = spotify::authorize_url(&state.config, &auth_state);

    (jar.add(state_cookie(auth_state)), found(&location))
}

fn state_cookie(value: String) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::minutes(STATE_COOKIE_TTL_MINUTES))
        .build()
}
