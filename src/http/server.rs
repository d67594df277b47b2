//! HTTP server implementation for the constellation API

use super::handler::{constellation_handler, status_handler};
use crate::builder::ConstellationBuilder;
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use constella_lexicon::Lexicon;
use rust_embed::RustEmbed;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

#[derive(RustEmbed)]
#[folder = "src/http/static/"]
struct Assets;

async fn static_handler() -> impl IntoResponse {
    let index_html = Assets::get("index.html").unwrap();
    Html(std::str::from_utf8(index_html.data.as_ref()).unwrap().to_string())
}

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub builder: Arc<ConstellationBuilder>,
    pub lexicon: Arc<Lexicon>,
}

/// Listen address configuration, overridable from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by CONSTELLA_HOST / CONSTELLA_PORT
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let host = std::env::var("CONSTELLA_HOST").unwrap_or(defaults.host);
        let port = std::env::var("CONSTELLA_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);
        ServerConfig { host, port }
    }
}

/// HTTP server managing the constellation API and static assets
pub struct HttpServer {
    state: AppState,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(state: AppState, config: ServerConfig) -> Self {
        Self { state, config }
    }

    /// The router, exposed separately so tests can drive it in-process
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(static_handler))
            .route("/api/constellation", post(constellation_handler))
            .route("/api/status", get(status_handler))
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Start the HTTP server
    pub async fn start(&self) -> std::io::Result<()> {
        let app = self.router();

        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("constellation API available at http://localhost:{}", self.config.port);

        axum::serve(listener, app).await
    }
}
