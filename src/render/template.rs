use std::path::PathBuf;

use async_trait::async_trait;

use crate::{
    render::{
        CONTENT_MARKER, PageRenderer, RenderError, TOGGLE_SCRIPT, recommendation_html,
        top_tracks_html,
    },
    types::{RecommendationInfo, Track},
};

/// Renders into an HTML file read from disk on every request.
///
/// The file is re-read each time so it can be edited while the server runs.
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    path: PathBuf,
}

impl TemplateRenderer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TemplateRenderer { path: path.into() }
    }

    /// Substitutes the first content marker in `template`.
    ///
    /// Returns `None` if the template has no marker.
    pub fn fill(
        template: &str,
        recommendation: &RecommendationInfo,
        top_tracks: &[Track],
    ) -> Option<String> {
        if !template.contains(CONTENT_MARKER) {
            return None;
        }

        let content = format!(
            "{TOGGLE_SCRIPT}\n{}{}",
            recommendation_html(recommendation),
            top_tracks_html(top_tracks)
        );

        Some(template.replacen(CONTENT_MARKER, &content, 1))
    }
}

#[async_trait]
impl PageRenderer for TemplateRenderer {
    async fn render(
        &self,
        recommendation: &RecommendationInfo,
        top_tracks: &[Track],
    ) -> Result<String, RenderError> {
        let template =
            async_fs::read_to_string(&self.path)
                .await
                .map_err(|source| RenderError::Read {
                    path: self.path.clone(),
                    source,
                })?;

        Self::fill(&template, recommendation, top_tracks)
            .ok_or_else(|| RenderError::MissingMarker(self.path.clone()))
    }
}
