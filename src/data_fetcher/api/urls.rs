//! URL building utilities for the web JSON API

fn root(base: &str) -> &str {
    base.trim_end_matches('/')
}

/// Builds the roster URL of a match, the input of lineup decoding.
///
/// # Example
/// ```
/// use del_app_helper::data_fetcher::api::build_roster_url;
///
/// let url = build_roster_url("https://api.example.com/", 1523);
/// assert_eq!(url, "https://api.example.com/matches/1523/roster.json");
/// ```
pub fn build_roster_url(del_api: &str, match_id: u32) -> String {
    format!("{}/matches/{match_id}/roster.json", root(del_api))
}

/// Builds the game header URL of a match (teams, score, referees).
pub fn build_game_header_url(del_api: &str, match_id: u32) -> String {
    format!("{}/matches/{match_id}/game-header.json", root(del_api))
}

pub fn build_faceoffs_url(del_api: &str, match_id: u32) -> String {
    format!("{}/matches/{match_id}/faceoffs.json", root(del_api))
}

pub fn build_period_events_url(del_api: &str, match_id: u32) -> String {
    format!("{}/matches/{match_id}/period-events.json", root(del_api))
}

/// Builds the per-team statistics URL of a match.
///
/// # Example
/// ```
/// use del_app_helper::data_fetcher::api::build_team_stats_url;
///
/// let url = build_team_stats_url("https://api.example.com", 1523, 7);
/// assert_eq!(url, "https://api.example.com/matches/1523/team-stats/7.json");
/// ```
pub fn build_team_stats_url(del_api: &str, match_id: u32, team_id: u32) -> String {
    format!("{}/matches/{match_id}/team-stats/{team_id}.json", root(del_api))
}

/// Builds the shift URL of a match. The resource name is backend-specific
/// and comes from configuration.
pub fn build_shifts_url(del_api: &str, match_id: u32, shift_name: &str) -> String {
    format!("{}/matches/{match_id}/{shift_name}", root(del_api))
}

pub fn build_shots_url(del_api: &str, match_id: u32) -> String {
    format!("{}/visualization/shots/{match_id}.json", root(del_api))
}

/// Builds the top scorer URL of a match. Served from `base_url`, not `del_api`.
pub fn build_scorers_url(base_url: &str, match_id: u32) -> String {
    format!("{}/matches/{match_id}/top-scorers.json", root(base_url))
}

/// Builds the season schedule URL of one team.
///
/// # Example
/// ```
/// use del_app_helper::data_fetcher::api::build_team_matches_url;
///
/// let url = build_team_matches_url("https://api.example.com", "2023", 1, 3);
/// assert_eq!(url, "https://api.example.com/league-team-matches/2023/1/3.json");
/// ```
pub fn build_team_matches_url(del_api: &str, season: &str, league_id: u32, team_id: u32) -> String {
    format!(
        "{}/league-team-matches/{season}/{league_id}/{team_id}.json",
        root(del_api)
    )
}

pub fn build_fairplay_url(del_api: &str, year: &str, league_id: u32) -> String {
    format!("{}/fair-play/{year}/{league_id}.json", root(del_api))
}

pub fn build_playoff_tree_url(del_api: &str, year: &str, league_id: u32) -> String {
    format!("{}/league-playoffs/{year}/{league_id}.json", root(del_api))
}

pub fn build_standings_url(del_api: &str, table_id: u32) -> String {
    format!("{}/tables/{table_id}.json", root(del_api))
}

/// Builds the player statistics URL of one team over a season.
pub fn build_team_players_url(del_api: &str, season: &str, league_id: u32, team_id: u32) -> String {
    format!(
        "{}/league-team-stats/{season}/{league_id}/{team_id}.json",
        root(del_api)
    )
}

pub fn build_team_stats_summary_url(
    del_api: &str,
    season: &str,
    league_id: u32,
    team_id: u32,
) -> String {
    format!(
        "{}/league-all-team-stats/{season}/{league_id}/{team_id}.json",
        root(del_api)
    )
}
