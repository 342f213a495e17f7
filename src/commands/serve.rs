//! HTTP facade command

use std::sync::Arc;

use crate::{api, espn::LeagueSource, Config, Result};

/// Handle the serve command
pub async fn handle_serve(config: &Config, source: Arc<dyn LeagueSource>) -> Result<()> {
    // tarpaulin::skip - binds a socket, exercised through the router tests
    api::serve(config, source).await
}
