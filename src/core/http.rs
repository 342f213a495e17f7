//! HTTP utilities for ESPN API communication

use crate::{espn::LeagueCredentials, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Build request headers for a league, adding the `SWID`/`espn_s2` cookie
/// when both values are present (public leagues need neither).
pub fn league_header_map(creds: &LeagueCredentials) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if creds.has_cookies() {
        let cookie = format!("SWID={}; espn_s2={}", creds.swid.trim(), creds.espn_s2.trim());
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LeagueId, Season};

    #[test]
    fn test_header_map_with_cookies() {
        let creds = LeagueCredentials::new(LeagueId::new(1), Season::new(2026), "s2val", "{SWID}");

        let headers = league_header_map(&creds).unwrap();
        assert!(headers.contains_key(ACCEPT));
        assert_eq!(
            headers.get(COOKIE).unwrap().to_str().unwrap(),
            "SWID={SWID}; espn_s2=s2val"
        );
    }

    #[test]
    fn test_header_map_without_cookies() {
        let creds = LeagueCredentials::new(LeagueId::new(1), Season::new(2026), "", "{SWID}");

        let headers = league_header_map(&creds).unwrap();
        assert!(headers.contains_key(ACCEPT));
        assert!(!headers.contains_key(COOKIE));
    }

    #[test]
    fn test_header_map_rejects_invalid_cookie() {
        let creds = LeagueCredentials::new(LeagueId::new(1), Season::new(2026), "bad\nvalue", "x");
        assert!(league_header_map(&creds).is_err());
    }
}
