use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub mod handlers;
pub mod state;

pub use state::AppState;

pub async fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/news/:company", get(handlers::get_news))
        .route("/analyze/:company", get(handlers::analyze_company))
        .route("/narration/:company", get(handlers::get_narration))
        .layer(cors)
        .with_state(Arc::new(state))
}

pub async fn serve(addr: SocketAddr, state: AppState) -> ns_core::Result<()> {
    let app = create_app(state).await;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🌐 Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use ns_core::{Article, Report, Result, Error};
    pub use crate::AppState;
}
