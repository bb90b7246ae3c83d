// rest/mod.rs — HTTP REST API server.
//
// Axum HTTP server, local only by default.
//
// Endpoints:
//   GET    /health
//   GET    /tasks
//   POST   /tasks
//   GET    /tasks/{id}
//   DELETE /tasks/{id}

pub mod routes;

use anyhow::{Context as _, Result};
use axum::{
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

/// Bind the listener and serve until the process exits.
pub async fn serve(ctx: Arc<AppContext>) -> Result<()> {
    let bind = ctx.config.bind_addr();
    let addr: SocketAddr = bind
        .parse()
        .with_context(|| format!("invalid bind address '{bind}'"))?;

    let router = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("could not bind {addr}"))?;
    info!("REST API listening on http://{}", addr);
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Health (not part of the task API)
        .route("/health", get(routes::health::health))
        // Tasks
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            get(routes::tasks::get_task).delete(routes::tasks::delete_task),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}
