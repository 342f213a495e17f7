//! Unit tests for the ESPN HTTP client

use super::*;
use crate::espn::fixtures::{free_agents_json, league_json};
use crate::{LeagueId, Season};
use serde_json::json;
use wiremock::{
    matchers::{header, header_exists, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE_PATH: &str = "/apis/v3/games/fba/seasons/2026/segments/0/leagues/12345";

fn creds() -> LeagueCredentials {
    LeagueCredentials::new(LeagueId::new(12345), Season::new(2026), "s2val", "{SWID}")
}

fn client_for(server: &MockServer) -> EspnClient {
    EspnClient::with_base_url(format!("{}/apis/v3/games/fba", server.uri()))
}

#[tokio::test]
async fn test_fetch_league_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "mRoster"))
        .and(header("accept", "application/json"))
        .and(header("cookie", "SWID={SWID}; espn_s2=s2val"))
        .respond_with(ResponseTemplate::new(200).set_body_json(league_json()))
        .mount(&mock_server)
        .await;

    let league = client_for(&mock_server)
        .fetch_league(&creds())
        .await
        .unwrap();

    assert_eq!(league.league_id, LeagueId::new(12345));
    assert_eq!(league.season, Season::new(2026));
    assert_eq!(league.teams.len(), 2);
    assert_eq!(league.teams[0].roster.len(), 2);
    assert_eq!(league.settings.scoring_settings.scoring_items.len(), 4);
}

#[tokio::test]
async fn test_fetch_league_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_league(&creds())
        .await
        .unwrap_err();

    assert!(matches!(err, FbbError::Unauthorized));
}

#[tokio::test]
async fn test_fetch_league_not_found_is_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_string("league not found"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_league(&creds())
        .await
        .unwrap_err();

    match err {
        FbbError::LeagueUnavailable { status, reason } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "league not found");
        }
        other => panic!("Expected LeagueUnavailable, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_league_without_teams_is_no_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 12345, "seasonId": 2026})),
        )
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .fetch_league(&creds())
        .await
        .unwrap_err();

    assert!(matches!(err, FbbError::NoData));
}

#[tokio::test]
async fn test_free_agents_sends_filter_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .and(query_param("view", "kona_player_info"))
        .and(header_exists("x-fantasy-filter"))
        .respond_with(ResponseTemplate::new(200).set_body_json(free_agents_json()))
        .mount(&mock_server)
        .await;

    let players = client_for(&mock_server)
        .free_agents(&creds(), Some(Position::PF), 10)
        .await
        .unwrap();

    assert_eq!(players.len(), 2);
    assert_eq!(players[0].name, "Delta Forward");
    assert_eq!(players[0].position, Some(Position::PF));
}

#[tokio::test]
async fn test_free_agents_truncates_to_size() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(free_agents_json()))
        .mount(&mock_server)
        .await;

    let players = client_for(&mock_server)
        .free_agents(&creds(), None, 1)
        .await
        .unwrap();

    assert_eq!(players.len(), 1);
}

#[tokio::test]
async fn test_public_league_sends_no_cookie() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(league_json()))
        .mount(&mock_server)
        .await;

    let public = LeagueCredentials::new(LeagueId::new(12345), Season::new(2026), "", "");
    client_for(&mock_server).fetch_league(&public).await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("cookie").is_none());
}
