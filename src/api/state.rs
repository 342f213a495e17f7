use std::sync::Arc;

use crate::{espn::LeagueSource, SessionSlot};

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// The active save; handlers only ever read snapshots of it
    pub sessions: Arc<SessionSlot>,

    /// Where league, roster and free-agent data comes from
    pub league: Arc<dyn LeagueSource>,
}

impl AppState {
    pub fn new(league: Arc<dyn LeagueSource>) -> Self {
        Self {
            sessions: Arc::new(SessionSlot::new()),
            league,
        }
    }
}
