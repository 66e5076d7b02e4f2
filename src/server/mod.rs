pub mod handlers;

use crate::utils::error::Result;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

/// Fixed response body for the root route.
pub const ROOT_BODY: &str = "The wind caught it.";

pub fn router() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/echo", get(handlers::echo).post(handlers::echo))
}

/// Serves the echo routes on an already-bound listener until the process
/// is terminated.
pub async fn serve(listener: TcpListener) -> Result<()> {
    axum::serve(listener, router()).await?;
    Ok(())
}
