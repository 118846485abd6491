//! The recommendation pipeline run by the callback handler.
//!
//! Three dependent stages, awaited one after the other:
//!
//! 1. exchange the authorization code for an access token
//! 2. fetch the user's top tracks
//! 3. fetch a single recommendation seeded from the first top tracks
//!
//! Each stage either hands its value to the next one or stops the pipeline
//! with a [`StageError`] naming the stage. The HTTP layer turns the final
//! [`Outcome`] or error into a response in one place.

use thiserror::Error;

use crate::{
    spotify::{ApiError, SpotifyApi},
    types::{RecommendationInfo, Track},
};

/// Number of leading top tracks used to seed the recommendation request.
pub const SEED_TRACKS: usize = 5;

/// How many recommendations to ask for. Only the first one is shown.
pub const RECOMMENDATION_LIMIT: u32 = 1;

pub const NO_TOP_TRACKS_MESSAGE: &str = "No top tracks found for this user.";

#[derive(Debug, Error)]
pub enum StageError {
    #[error("Error getting token")]
    Token(#[source] ApiError),
    #[error("Error fetching top tracks")]
    TopTracks(#[source] ApiError),
    #[error("Error fetching recommendations")]
    Recommendations(#[source] ApiError),
}

impl StageError {
    /// The user-visible message for the failed stage.
    pub fn message(&self) -> &'static str {
        match self {
            StageError::Token(_) => "Error getting token",
            StageError::TopTracks(_) => "Error fetching top tracks",
            StageError::Recommendations(_) => "Error fetching recommendations",
        }
    }

    pub fn api_error(&self) -> &ApiError {
        match self {
            StageError::Token(e) | StageError::TopTracks(e) | StageError::Recommendations(e) => e,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Outcome {
    /// The user has no top tracks; nothing was requested after stage 2.
    NoTopTracks,
    Recommended {
        recommendation: RecommendationInfo,
        top_tracks: Vec<Track>,
    },
}

/// Primary-artist IDs of the first [`SEED_TRACKS`] tracks, in order.
///
/// Tracks without an artist ID contribute nothing.
pub fn seed_artists(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .take(SEED_TRACKS)
        .filter_map(|t| t.primary_artist().and_then(|a| a.id.clone()))
        .collect()
}

/// Genres of the first [`SEED_TRACKS`] tracks, flattened in order.
pub fn seed_genres(tracks: &[Track]) -> Vec<String> {
    tracks
        .iter()
        .take(SEED_TRACKS)
        .flat_map(|t| t.genres.iter().cloned())
        .collect()
}

/// Runs the full pipeline for one callback request.
///
/// A missing `code` fails the token stage without contacting Spotify.
pub async fn run(api: &dyn SpotifyApi, code: Option<&str>) -> Result<Outcome, StageError> {
    let code = code
        .filter(|c| !c.is_empty())
        .ok_or(StageError::Token(ApiError::EmptyResponse("authorization code")))?;

    let token = api.exchange_code(code).await.map_err(StageError::Token)?;

    let top_tracks = api
        .top_tracks(&token.access_token)
        .await
        .map_err(StageError::TopTracks)?;

    if top_tracks.is_empty() {
        return Ok(Outcome::NoTopTracks);
    }

    let recommended = api
        .recommendations(
            &token.access_token,
            &seed_artists(&top_tracks),
            &seed_genres(&top_tracks),
            RECOMMENDATION_LIMIT,
        )
        .await
        .map_err(StageError::Recommendations)?;

    let recommendation = recommended
        .first()
        .map(RecommendationInfo::from)
        .ok_or(StageError::Recommendations(ApiError::EmptyResponse(
            "recommended tracks",
        )))?;

    Ok(Outcome::Recommended {
        recommendation,
        top_tracks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Artist;

    fn track(artist_id: Option<&str>, genres: &[&str]) -> Track {
        Track {
            name: "song".to_string(),
            artists: vec![Artist {
                id: artist_id.map(str::to_string),
                name: "artist".to_string(),
            }],
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn seed_artists_skips_missing_ids() {
        let tracks = vec![track(Some("a"), &[]), track(None, &[]), track(Some("c"), &[])];
        assert_eq!(seed_artists(&tracks), vec!["a", "c"]);
    }

    #[test]
    fn seed_genres_only_reads_the_first_five_tracks() {
        let tracks: Vec<Track> = (0..7)
            .map(|i| track(Some("x"), &[format!("g{i}").as_str()]))
            .collect();
        assert_eq!(seed_genres(&tracks), vec!["g0", "g1", "g2", "g3", "g4"]);
    }

    #[test]
    fn stage_messages_match_display() {
        let err = StageError::TopTracks(ApiError::EmptyResponse("x"));
        assert_eq!(err.message(), err.to_string());
    }
}
