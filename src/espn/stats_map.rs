//! ESPN basketball stat ids and split prefixes.

/// Category names indexed by ESPN stat id.
const STAT_NAMES: [&str; 45] = [
    "PTS", "BLK", "STL", "AST", "OREB", "DREB", "REB", "EJ", "FF", "PF", "TF", "TO", "DQ", "FGM",
    "FGA", "FTM", "FTA", "3PM", "3PA", "FG%", "FT%", "3P%", "AFG%", "FGMI", "FTMI", "3PMI", "APG",
    "BPG", "MPG", "PPG", "RPG", "SPG", "TOPG", "3PG", "PPM", "A/TO", "STR", "DD", "TD", "QD", "MIN",
    "GS", "GP", "TW", "FTR",
];

/// Category name for a stat id; unknown ids keep their numeric id.
pub fn stat_name(stat_id: &str) -> String {
    stat_id
        .parse::<usize>()
        .ok()
        .and_then(|idx| STAT_NAMES.get(idx))
        .map(|name| name.to_string())
        .unwrap_or_else(|| stat_id.to_string())
}

/// Period suffix for a stat block id such as `002026` or `012026`.
pub fn split_suffix(block_id: &str) -> Option<&'static str> {
    match block_id.get(..2)? {
        "00" => Some("total"),
        "01" => Some("last_7"),
        "02" => Some("last_15"),
        "03" => Some("last_30"),
        "10" => Some("projected"),
        _ => None,
    }
}
