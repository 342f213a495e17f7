//! HTTP facade used by the web front end.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::{espn::LeagueSource, Config, Result};

/// Bind the configured address and serve until the process exits.
pub async fn serve(config: &Config, league: Arc<dyn LeagueSource>) -> Result<()> {
    let app = create_router(AppState::new(league), &config.allowed_origins);

    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "API server listening on http://{} (origins: {})",
        listener.local_addr()?,
        config.allowed_origins.join(", ")
    );

    axum::serve(listener, app).await?;
    Ok(())
}
