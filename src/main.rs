mod state;
mod error;
mod config;
mod function;
mod billing;
mod clients;
mod responder;
mod utils {
    pub mod fields;
}
mod routes;

use axum::{
    Router, Extension, extract::DefaultBodyLimit
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use crate::{config::Config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().init();

    let cfg = Config::from_env()?;
    cfg.report();
    let state = AppState::from_config(&cfg)?;

    let app = Router::new()
        .merge(routes::router())
        .layer(Extension(state))
        .layer(DefaultBodyLimit::max(cfg.body_limit))
        .layer(RequestBodyLimitLayer::new(cfg.body_limit))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!(addr = %cfg.bind_addr, "listening");
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
