use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use super::{handlers, state::AppState};

pub fn create_router(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring unusable CORS origin");
                None
            }
        })
        .collect();

    // CORS is limited to the web front end origins
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Session endpoints
        .route("/set-active-save", post(handlers::set_active_save))
        .route("/get-active-save", get(handlers::get_active_save))
        // League endpoints
        .route("/get-league-teams", post(handlers::get_league_teams))
        .route("/validate-league", post(handlers::validate_league))
        .route("/get-team-roster", get(handlers::get_team_roster))
        .route("/get-top-free-agents", get(handlers::get_top_free_agents))
        .with_state(state)
        .layer(cors)
}
