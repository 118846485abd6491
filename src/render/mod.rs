//! # Page Rendering
//!
//! Turns a [`RecommendationInfo`] and the user's top tracks into the HTML
//! page returned by `/callback`.
//!
//! Two interchangeable renderers implement [`PageRenderer`]:
//!
//! - [`InlineRenderer`] - the whole document, style and script included, is
//!   built in code
//! - [`TemplateRenderer`] - a static HTML file is read from disk and its
//!   [`CONTENT_MARKER`] replaced with the generated content
//!
//! Which one serves requests is decided once at startup by
//! [`renderer_for`]. Both share the fragment builders in this module, so
//! every value coming from Spotify is HTML-escaped the same way.

use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use thiserror::Error;

use crate::{
    config::Config,
    types::{RecommendationInfo, Track},
    utils::escape_html,
};

mod inline;
mod template;

pub use inline::InlineRenderer;
pub use template::TemplateRenderer;

/// Replaced with the recommendation and the top tracks list in file templates.
pub const CONTENT_MARKER: &str = "<!-- solosong:content -->";

/// Element ID of the collapsible top tracks list.
pub const TOP_TRACKS_LIST_ID: &str = "top-tracks-list";

/// Script toggling the top tracks list between collapsed and expanded.
pub const TOGGLE_SCRIPT: &str = r#"<script>
  function toggleTopTracks() {
    var topTracksList = document.getElementById('top-tracks-list');
    topTracksList.classList.toggle('expanded');
  }
</script>"#;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("template {0} does not contain the content marker")]
    MissingMarker(PathBuf),
}

/// Renders the recommendation page.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    async fn render(
        &self,
        recommendation: &RecommendationInfo,
        top_tracks: &[Track],
    ) -> Result<String, RenderError>;
}

/// Picks the renderer configured for this process.
pub fn renderer_for(config: &Config) -> Arc<dyn PageRenderer> {
    match &config.page_template {
        Some(path) => Arc::new(TemplateRenderer::new(path.clone())),
        None => Arc::new(InlineRenderer),
    }
}

/// `url` escaped for an `href`/`src` attribute, if it is an http(s) URL.
///
/// Anything else (`javascript:`, `data:`, relative paths) yields `None`.
pub fn safe_url(url: &str) -> Option<String> {
    let lower = url.trim_start().to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        Some(escape_html(url.trim_start()))
    } else {
        None
    }
}

/// The recommendation block: album art, link, name and artist.
pub fn recommendation_html(recommendation: &RecommendationInfo) -> String {
    let name = escape_html(&recommendation.name);
    let artist = escape_html(&recommendation.artist);
    let url = safe_url(&recommendation.url);
    let image = recommendation.image.as_deref().and_then(safe_url);

    let mut html = String::from("<div class=\"recommendation\">\n");
    html.push_str("  <h1>Today's Song Recommendation</h1>\n");
    if let Some(image) = image {
        let img = format!("<img src=\"{image}\" alt=\"{name} Album Art\">");
        html.push_str(&format!("  {}\n", link(url.as_deref(), &img)));
    }
    html.push_str(&format!(
        "  <p>{} by {artist}</p>\n",
        link(url.as_deref(), &format!("<strong>{name}</strong>"))
    ));
    html.push_str("</div>\n");
    html
}

/// The toggle button followed by one list entry per top track.
pub fn top_tracks_html(top_tracks: &[Track]) -> String {
    let mut html = String::from(
        "<div class=\"top-tracks-button\" onclick=\"toggleTopTracks()\">Your Top Tracks</div>\n",
    );
    html.push_str(&format!(
        "<ul id=\"{TOP_TRACKS_LIST_ID}\" class=\"collapsed\">\n"
    ));
    for track in top_tracks {
        let listen = match safe_url(track.url()) {
            Some(url) => format!(" - <a href=\"{url}\" target=\"_blank\">Listen</a>"),
            None => String::new(),
        };
        html.push_str(&format!(
            "  <li><strong>{}</strong> by {}{listen}</li>\n",
            escape_html(&track.name),
            escape_html(track.primary_artist_name()),
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Wraps `content` in a new-tab link when there is a usable URL.
fn link(url: Option<&str>, content: &str) -> String {
    match url {
        Some(url) => format!("<a href=\"{url}\" target=\"_blank\">{content}</a>"),
        None => content.to_string(),
    }
}
