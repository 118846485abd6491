//! # Spotify Integration Module
//!
//! This module is the integration layer between Solo Song and the Spotify
//! Web API. It covers the three outbound calls the recommendation flow needs
//! and the authorization URL the login handler redirects to.
//!
//! ## Architecture
//!
//! ```text
//! Recommendation pipeline
//!          ↓
//! SpotifyApi trait
//!     └── SpotifyClient (reqwest)
//!             ├── auth    - authorize URL, code exchange
//!             └── tracks  - top tracks, recommendations
//!          ↓
//! Spotify Web API
//! ```
//!
//! The pipeline only ever talks to [`SpotifyApi`], so handlers can be driven
//! against a fake implementation in tests.
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization code exchange (Basic client auth)
//! - `GET /me/top/tracks` - user's top tracks
//! - `GET /recommendations` - seeded recommendations
//!
//! ## Error Handling
//!
//! Every call returns [`ApiError`]. Non-2xx statuses are captured together
//! with the response body so the caller can log what Spotify said. Each
//! request is bounded by the configured timeout; a timeout surfaces as
//! [`ApiError::Request`]. Nothing is retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::{
    config::Config,
    types::{TokenResponse, Track},
};

pub mod auth;
pub mod tracks;

pub use auth::authorize_url;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to send http request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("spotify responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("spotify response contained no {0}")]
    EmptyResponse(&'static str),
}

/// The outbound calls of the recommendation flow.
///
/// Implemented by [`SpotifyClient`] for the real Web API.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ApiError>;

    /// Fetches the current user's top tracks.
    async fn top_tracks(&self, access_token: &str) -> Result<Vec<Track>, ApiError>;

    /// Fetches recommendations seeded by artists and genres.
    async fn recommendations(
        &self,
        access_token: &str,
        seed_artists: &[String],
        seed_genres: &[String],
        limit: u32,
    ) -> Result<Vec<Track>, ApiError>;
}

/// Spotify Web API client backed by a shared `reqwest` connection pool.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Ok(SpotifyClient {
            http: build_http_client(config.request_timeout)?,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        })
    }
}

fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Turns a non-success response into [`ApiError::Status`].
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "failed to read error body".to_string());

    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn exchange_code(&self, code: &str) -> Result<TokenResponse, ApiError> {
        self.request_token(code).await
    }

    async fn top_tracks(&self, access_token: &str) -> Result<Vec<Track>, ApiError> {
        self.get_top_tracks(access_token).await
    }

    async fn recommendations(
        &self,
        access_token: &str,
        seed_artists: &[String],
        seed_genres: &[String],
        limit: u32,
    ) -> Result<Vec<Track>, ApiError> {
        self.get_recommendations(access_token, seed_artists, seed_genres, limit)
            .await
    }
}
