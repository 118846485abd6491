use async_trait::async_trait;

use crate::{
    render::{PageRenderer, RenderError, TOGGLE_SCRIPT, recommendation_html, top_tracks_html},
    types::{RecommendationInfo, Track},
};

const STYLE: &str = r#"<style>
  body {
    font-family: 'Quicksand', sans-serif;
    background-color: #f5f5f5;
    color: #333;
    margin: 0;
    padding: 20px;
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: center;
  }
  header, footer {
    position: fixed;
    width: 100%;
    background-color: #2ecc71;
    color: white;
    text-align: center;
  }
  header { top: 0; padding: 10px 0; font-size: 24px; font-weight: bold; }
  footer { bottom: 0; padding: 5px 0; font-size: 14px; }
  h1 { color: #2ecc71; margin-bottom: 20px; }
  .top-tracks-button {
    color: white;
    cursor: pointer;
    background-color: #2ecc71;
    padding: 10px 20px;
    border-radius: 25px;
    transition: background-color 0.3s;
    width: 100%;
    max-width: 600px;
    text-align: center;
  }
  .top-tracks-button:hover { background-color: #27ae60; }
  ul {
    list-style-type: none;
    padding: 0;
    margin-top: 0;
    max-height: 0;
    overflow: hidden;
    transition: max-height 0.5s ease-out;
    text-align: center;
  }
  ul.expanded { max-height: 1000px; }
  li { margin: 5px 0; }
  a { color: #2ecc71; text-decoration: none; }
  a:hover { text-decoration: underline; }
  .recommendation {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    margin-bottom: 20px;
    padding-top: 40px;
  }
  .recommendation img {
    width: 200px;
    height: 200px;
    border-radius: 15px;
    margin-bottom: 10px;
  }
  .recommendation p a { font-weight: bold; }
  .info-text {
    margin: 20px 0 40px;
    padding: 20px;
    background-color: #e0f7e9;
    border-radius: 10px;
    max-width: 600px;
    text-align: center;
  }
</style>"#;

const INFO_TEXT: &str = "Overstimulation is a constant in our everyday lives. We are always \
watching or listening to something. <strong>Solo Song</strong> gives you just one song per day, \
so there is time to cherish the music and time to be away from media.";

/// Builds the complete page in code, style and script embedded.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineRenderer;

impl InlineRenderer {
    pub fn page(recommendation: &RecommendationInfo, top_tracks: &[Track]) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Solo Song</title>
{STYLE}
<link href="https://fonts.googleapis.com/css2?family=Quicksand:wght@300;400;500;600;700&display=swap" rel="stylesheet">
{TOGGLE_SCRIPT}
</head>
<body>
<header>Solo Song</header>
{recommendation}{tracks}<div class="info-text">{INFO_TEXT}</div>
<footer>&copy; Solo Song</footer>
</body>
</html>
"#,
            recommendation = recommendation_html(recommendation),
            tracks = top_tracks_html(top_tracks),
        )
    }
}

#[async_trait]
impl PageRenderer for InlineRenderer {
    async fn render(
        &self,
        recommendation: &RecommendationInfo,
        top_tracks: &[Track],
    ) -> Result<String, RenderError> {
        Ok(Self::page(recommendation, top_tracks))
    }
}
