use url::form_urlencoded;

use crate::{
    config::{Config, SCOPE},
    spotify::{ApiError, SpotifyClient, check_status},
    types::TokenResponse,
    utils,
};

/// Builds the Spotify authorization URL the login handler redirects to.
///
/// # Arguments
///
/// * `config` - Supplies the authorization endpoint, client ID and redirect URI
/// * `state` - The nonce that was just stored in the state cookie
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, "A1b2C3d4E5f6G7h8");
/// // https://accounts.spotify.com/authorize?response_type=code&client_id=...
/// ```
pub fn authorize_url(config: &Config, state: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("response_type", "code")
        .append_pair("client_id", &config.client_id)
        .append_pair("scope", SCOPE)
        .append_pair("redirect_uri", &config.redirect_uri)
        .append_pair("state", state)
        .finish();

    format!("{}?{}", config.auth_url, query)
}

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the authorization code flow. The client authenticates with
    /// its ID and secret in a `Basic` header; the body is form-encoded.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Request`] - network failure, timeout or malformed JSON
    /// - [`ApiError::Status`] - Spotify rejected the code (usually 400)
    /// - [`ApiError::EmptyResponse`] - the response carried an empty token
    pub(crate) async fn request_token(&self, code: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .http
            .post(&self.token_url)
            .header(
                reqwest::header::AUTHORIZATION,
                utils::basic_auth(&self.client_id, &self.client_secret),
            )
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
            ])
            .send()
            .await?;

        let token: TokenResponse = check_status(response).await?.json().await?;
        if token.access_token.is_empty() {
            return Err(ApiError::EmptyResponse("access token"));
        }

        Ok(token)
    }
}
