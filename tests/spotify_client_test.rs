use std::{collections::HashMap, net::SocketAddr, time::Duration};

use axum::{
    Form, Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use solosong::{
    config::Config,
    spotify::{ApiError, SpotifyApi, SpotifyClient},
    utils,
};

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

async fn token(headers: HeaderMap, Form(form): Form<HashMap<String, String>>) -> Response {
    let expected = utils::basic_auth("client-id", "client-secret");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .is_some_and(|v| v.to_str().ok() == Some(expected.as_str()));

    let valid_form = form.get("grant_type").map(String::as_str) == Some("authorization_code")
        && form.get("redirect_uri").map(String::as_str) == Some("http://localhost:3000/callback");

    match form.get("code").map(String::as_str) {
        Some("good-code") if authorized && valid_form => Json(json!({
            "access_token": "access-token",
            "token_type": "Bearer",
            "scope": "user-top-read",
            "expires_in": 3600
        }))
        .into_response(),
        Some("garbage") => "not json".into_response(),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        )
            .into_response(),
    }
}

async fn top_tracks(headers: HeaderMap) -> Response {
    match bearer(&headers) {
        Some("access-token") => Json(json!({
            "items": [
                {
                    "id": "t1",
                    "name": "First",
                    "artists": [{ "id": "a1", "name": "Artist One" }],
                    "external_urls": { "spotify": "https://open.spotify.com/track/t1" },
                    "album": { "images": [{ "url": "https://i.scdn.co/image/1", "height": 640, "width": 640 }] }
                },
                {
                    "id": "t2",
                    "name": "Second",
                    "artists": [{ "id": "a2", "name": "Artist Two" }],
                    "external_urls": { "spotify": "https://open.spotify.com/track/t2" },
                    "album": { "images": [] }
                }
            ],
            "total": 2
        }))
        .into_response(),
        Some("slow-token") => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({ "items": [] })).into_response()
        }
        _ => StatusCode::UNAUTHORIZED.into_response(),
    }
}

async fn recommendations(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if bearer(&headers) != Some("access-token") {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    // echo the seeds back through the track name
    let name = format!(
        "{}|{}|{}",
        query.get("seed_artists").cloned().unwrap_or_default(),
        query.get("seed_genres").cloned().unwrap_or_else(|| "-".to_string()),
        query.get("limit").cloned().unwrap_or_default()
    );

    Json(json!({
        "tracks": [{
            "id": "rec",
            "name": name,
            "artists": [{ "id": "ar", "name": "Rec Artist" }],
            "external_urls": { "spotify": "https://open.spotify.com/track/rec" },
            "album": { "images": [{ "url": "https://i.scdn.co/image/rec" }] }
        }]
    }))
    .into_response()
}

async fn spawn_fake_spotify() -> SocketAddr {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/top/tracks", get(top_tracks))
        .route("/v1/recommendations", get(recommendations));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn client() -> SpotifyClient {
    let addr = spawn_fake_spotify().await;
    let config = Config {
        client_id: "client-id".to_string(),
        client_secret: "client-secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        port: 3000,
        auth_url: format!("http://{addr}/authorize"),
        token_url: format!("http://{addr}/api/token"),
        api_url: format!("http://{addr}/v1"),
        request_timeout: Duration::from_millis(500),
        page_template: None,
    };
    SpotifyClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_exchange_code_sends_basic_auth_and_form() {
    let client = client().await;

    let token = client.exchange_code("good-code").await.unwrap();
    assert_eq!(token.access_token, "access-token");
    assert_eq!(token.expires_in, Some(3600));
}

#[tokio::test]
async fn test_exchange_code_rejected() {
    let client = client().await;

    match client.exchange_code("bad-code").await {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("invalid_grant"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_exchange_code_malformed_body() {
    let client = client().await;

    assert!(matches!(
        client.exchange_code("garbage").await,
        Err(ApiError::Request(_))
    ));
}

#[tokio::test]
async fn test_top_tracks() {
    let client = client().await;

    let tracks = client.top_tracks("access-token").await.unwrap();
    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "First");
    assert_eq!(tracks[0].primary_artist_name(), "Artist One");
    assert_eq!(tracks[0].image_url(), Some("https://i.scdn.co/image/1"));
    assert_eq!(tracks[1].image_url(), None);
    assert!(tracks[1].genres.is_empty());
}

#[tokio::test]
async fn test_top_tracks_unauthorized() {
    let client = client().await;

    assert!(matches!(
        client.top_tracks("wrong").await,
        Err(ApiError::Status { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_top_tracks_timeout() {
    let client = client().await;

    match client.top_tracks("slow-token").await {
        Err(ApiError::Request(e)) => assert!(e.is_timeout()),
        other => panic!("expected timeout, got {other:?}"),
    }
}

#[tokio::test]
async fn test_recommendations_query() {
    let client = client().await;

    let tracks = client
        .recommendations(
            "access-token",
            &["a1".to_string(), "a2".to_string()],
            &[],
            1,
        )
        .await
        .unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].name, "a1,a2||1");
    assert_eq!(tracks[0].url(), "https://open.spotify.com/track/rec");
}
