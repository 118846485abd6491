use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Album {
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<Artist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album: Album,
    /// Rarely present on track objects; kept for seeding when it is.
    #[serde(default)]
    pub genres: Vec<String>,
}

impl Track {
    pub fn primary_artist(&self) -> Option<&Artist> {
        self.artists.first()
    }

    pub fn primary_artist_name(&self) -> &str {
        self.primary_artist().map(|a| a.name.as_str()).unwrap_or_default()
    }

    pub fn url(&self) -> &str {
        self.external_urls.spotify.as_deref().unwrap_or_default()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.album.images.first().map(|i| i.url.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

/// The single song shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationInfo {
    pub name: String,
    pub artist: String,
    pub url: String,
    pub image: Option<String>,
}

impl From<&Track> for RecommendationInfo {
    fn from(track: &Track) -> Self {
        RecommendationInfo {
            name: track.name.clone(),
            artist: track.primary_artist_name().to_string(),
            url: track.url().to_string(),
            image: track.image_url().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
}
