mod dto;
mod error;
mod handlers;
mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::body::Body;
use axum::http::{Request, Response};
use axum::routing::get;
use axum::Router;
use selkit_core::SelkitConfig;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use state::AppState;

fn load_config() -> Result<SelkitConfig> {
    let mut config = match std::env::var("SELKIT_CONFIG") {
        Ok(path) => SelkitConfig::load(&path).with_context(|| format!("loading {}", path))?,
        Err(_) => SelkitConfig::default(),
    };
    if let Ok(path) = std::env::var("SELKIT_OPTIONS") {
        config.server.options_path = Some(path);
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse().context("PORT must be a port number")?;
    }
    Ok(config)
}

fn router(state: Arc<AppState>) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<Body>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                uri = %req.uri(),
            )
        })
        .on_response(|res: &Response<Body>, latency: Duration, _span: &tracing::Span| {
            info!(
                latency = %format!("{} ms", latency.as_millis()),
                status = %res.status().as_u16(),
                "finished processing request"
            );
        });

    let logged_routes = Router::new()
        .route("/", get(handlers::form::show_form).post(handlers::form::submit_form))
        .route("/api/selection", get(handlers::form::selection))
        .layer(trace_layer);

    Router::new()
        .merge(logged_routes)
        .route("/health", get(handlers::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = load_config()?;
    let port = config.server.port;
    let state = Arc::new(AppState::new(config)?);
    info!("Serving {} options", state.options.len());

    let addr = format!("0.0.0.0:{}", port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router(state)).await?;

    Ok(())
}
