//! # API Module
//!
//! HTTP endpoints of the Solo Song web server.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, redirects to `/login`
//! - [`login`] - `GET /login`, sets the state cookie and redirects to
//!   Spotify's authorization page
//! - [`callback`] - `GET /callback`, verifies the state, runs the
//!   recommendation pipeline and renders the page
//! - [`health`] - `GET /health`, status and version for monitoring
//!
//! ## Responses of `/callback`
//!
//! | Situation | Status | Body |
//! |---|---|---|
//! | state missing or not matching the cookie | 401 | `State mismatch` |
//! | recommendation found | 200 | HTML page |
//! | user has no top tracks | 200 | `No top tracks found for this user.` |
//! | a Spotify call failed | 502 | name of the failed stage |
//! | page template unusable | 500 | `Error rendering page` |
//!
//! ## Shared State
//!
//! Handlers receive an [`AppState`] holding the immutable configuration, the
//! Spotify client and the page renderer. Nothing in it is mutated, so
//! requests never wait on each other.

use std::sync::Arc;

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{config::Config, render::PageRenderer, spotify::SpotifyApi};

mod callback;
mod health;
mod index;
mod login;

pub use callback::{RENDER_ERROR_MESSAGE, STATE_MISMATCH_MESSAGE, callback};
pub use health::health;
pub use index::index;
pub use login::login;

/// Cookie holding the state nonce between `/login` and `/callback`.
pub const STATE_COOKIE: &str = "spotify_auth_state";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub spotify: Arc<dyn SpotifyApi>,
    pub renderer: Arc<dyn PageRenderer>,
}

/// `302 Found` redirect to `location`.
pub(crate) fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
