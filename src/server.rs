use std::{net::SocketAddr, sync::Arc};

use axum::{Router, routing::get};

use crate::{
    Res,
    api::{self, AppState},
    config::Config,
    info, render,
    spotify::SpotifyClient,
    success,
};

/// Routes of the web server bound to `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .with_state(state)
}

/// Assembles the production [`AppState`] from a validated configuration.
pub fn app_state(config: Config) -> Res<AppState> {
    config.validate()?;

    let spotify = SpotifyClient::new(&config)?;
    let renderer = render::renderer_for(&config);

    Ok(AppState {
        config: Arc::new(config),
        spotify: Arc::new(spotify),
        renderer,
    })
}

/// Binds to the configured port and serves until the process stops.
pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let port = config.port;

    match &config.page_template {
        Some(path) => info!("Rendering pages from template {}", path.display()),
        None => info!("Rendering pages with the built-in template"),
    }
    info!("Redirect URI: {}", config.redirect_uri);

    let app = router(app_state(config)?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Server running at http://localhost:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}
