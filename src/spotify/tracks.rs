use crate::{
    spotify::{ApiError, SpotifyClient, check_status},
    types::{RecommendationsResponse, TopTracksResponse, Track},
};

impl SpotifyClient {
    /// Retrieves the authenticated user's top tracks.
    ///
    /// Uses Spotify's default time range and page size. An empty list is a
    /// valid answer and is returned as such.
    pub(crate) async fn get_top_tracks(&self, token: &str) -> Result<Vec<Track>, ApiError> {
        let api_url = format!("{uri}/me/top/tracks", uri = self.api_url);

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        let res = check_status(response).await?.json::<TopTracksResponse>().await?;

        Ok(res.items)
    }

    /// Retrieves recommendations for the given seeds.
    ///
    /// Both seed lists are sent comma-joined; an empty genre list is still
    /// sent as an empty parameter.
    pub(crate) async fn get_recommendations(
        &self,
        token: &str,
        seed_artists: &[String],
        seed_genres: &[String],
        limit: u32,
    ) -> Result<Vec<Track>, ApiError> {
        let api_url = format!("{uri}/recommendations", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token)
            .query(&[
                ("seed_artists", seed_artists.join(",")),
                ("seed_genres", seed_genres.join(",")),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        let res = check_status(response)
            .await?
            .json::<RecommendationsResponse>()
            .await?;

        Ok(res.tracks)
    }
}
