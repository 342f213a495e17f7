//! Canned ESPN payloads shared by unit tests.

use serde_json::{json, Value};

pub fn player_json(id: u64, name: &str, position_id: i64, pts: f64, ast: f64) -> Value {
    json!({
        "id": id,
        "fullName": name,
        "defaultPositionId": position_id,
        "proTeamId": 7,
        "injuryStatus": "ACTIVE",
        "stats": [
            {
                "id": "002026",
                "seasonId": 2026,
                "statSourceId": 0,
                "statSplitTypeId": 0,
                "averageStats": { "0": pts, "3": ast, "19": 0.5, "11": 2.0 },
                "stats": { "0": pts * 10.0, "3": ast * 10.0 }
            },
            {
                "id": "012026",
                "seasonId": 2026,
                "statSourceId": 0,
                "statSplitTypeId": 1,
                "averageStats": { "0": pts + 1.0 },
                "stats": {}
            }
        ]
    })
}

pub fn league_json() -> Value {
    json!({
        "id": 12345,
        "seasonId": 2026,
        "settings": {
            "name": "Test League",
            "scoringSettings": {
                "scoringType": "H2H_CATEGORY",
                "scoringItems": [
                    { "statId": 0, "points": 1.0 },
                    { "statId": 3, "points": 0.0 },
                    { "statId": 11, "points": 1.0, "isReverseItem": true },
                    { "statId": 19, "points": 0.0 }
                ]
            }
        },
        "teams": [
            {
                "id": 1,
                "name": "Dunk Dynasty",
                "abbrev": "DD",
                "roster": { "entries": [
                    { "playerId": 101, "lineupSlotId": 0,
                      "playerPoolEntry": { "player": player_json(101, "Alpha Guard", 1, 20.0, 5.0) } },
                    { "playerId": 102, "lineupSlotId": 4,
                      "playerPoolEntry": { "player": player_json(102, "Beta Center", 5, 12.0, 2.0) } }
                ]}
            },
            {
                "id": 2,
                "location": "Bench",
                "nickname": "Warmers",
                "abbrev": "BW",
                "roster": { "entries": [
                    { "playerId": 201, "lineupSlotId": 2,
                      "playerPoolEntry": { "player": player_json(201, "Gamma Wing", 3, 15.5, 3.5) } }
                ]}
            }
        ]
    })
}

pub fn free_agents_json() -> Value {
    json!({
        "players": [
            { "player": player_json(301, "Delta Forward", 4, 9.0, 1.0) },
            { "player": player_json(302, "Epsilon Guard", 2, 8.0, 4.0) }
        ]
    })
}
