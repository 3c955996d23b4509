//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed request values and defaults shared by
//! the configuration layer and the API clients.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Device identifier sent to the mobile API when none is configured
pub const DEFAULT_DEVICE_ID: &str = "bada55bada55666";

/// Operating system reported in every mobile API request body
pub const MOBILE_OS: &str = "android";

/// Content type header attached to every request, GET included
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default roster keys for the two sides of a match
pub mod roster {
    pub const HOME_KEY: &str = "home";
    pub const VISITOR_KEY: &str = "visitor";
}

/// Defaults for web API resources that take an optional id
pub mod web_defaults {
    /// Standings table id
    pub const STANDINGS_TABLE_ID: u32 = 27;

    /// League id used for playoff trees
    pub const PLAYOFF_LEAGUE_ID: u32 = 3;

    /// Team id used by the team player and team match listings
    pub const TEAM_ID: u32 = 3;

    /// League id for the regular season (3 = playoffs, 4 = Magenta Cup)
    pub const REGULAR_SEASON_LEAGUE_ID: u32 = 1;
}

/// `requestName` values understood by the mobile API
pub mod request_names {
    pub const GAMES: &str = "games";
    pub const GAME_RESULTS: &str = "gameResults";
    pub const GAME_SITUATIONS: &str = "gameSituations";
    pub const GAME_SITUATIONS_EXTENDED: &str = "gameSituationsExtended";
    pub const MY_TEAM: &str = "myTeam";
    pub const TEAM_MEMBERS: &str = "teamMembers";
    pub const TEAM_STANDINGS: &str = "teamStandings";
    pub const TOURNAMENT_LIST: &str = "tournamentList";
}

/// Environment variable names
pub mod env_vars {
    /// Mobile API endpoint override
    pub const MOBILE_API: &str = "DEL_MOBILE_API";

    /// Web JSON API base URL override
    pub const DEL_API: &str = "DEL_API";

    /// Top scorer base URL override
    pub const BASE_URL: &str = "DEL_BASE_URL";

    /// Device identifier override
    pub const DEVICE_ID: &str = "DEL_DEVICE_ID";

    /// Tournament id override
    pub const TOURNAMENT_ID: &str = "DEL_TOURNAMENT_ID";

    /// Log file path override
    pub const LOG_FILE: &str = "DEL_LOG_FILE";

    /// HTTP timeout override in seconds
    pub const HTTP_TIMEOUT: &str = "DEL_HTTP_TIMEOUT";

    /// Set to `true` or `1` to skip TLS certificate validation
    pub const ACCEPT_INVALID_CERTS: &str = "DEL_ACCEPT_INVALID_CERTS";
}
