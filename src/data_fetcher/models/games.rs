use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Game entry of the mobile API `games` listing.
///
/// Only the fields used for filtering are typed; everything else is kept in
/// `extra` so callers still see the full record.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Game {
    #[serde(rename = "dateTime", default)]
    pub date_time: String,
    #[serde(rename = "homeTeam", default)]
    pub home_team: String,
    #[serde(rename = "guestTeam", default)]
    pub guest_team: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Game {
    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.guest_team == team
    }
}

/// First game starting exactly at `date_time` with `team` on either side.
pub fn find_game<'a>(games: &'a [Game], date_time: &str, team: &str) -> Option<&'a Game> {
    games
        .iter()
        .find(|game| game.date_time == date_time && game.involves(team))
}

/// Entry of the mobile API `tournamentList` response.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TournamentEntry {
    #[serde(rename = "tournamentID", default)]
    pub tournament_id: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TournamentEntry {
    /// Numeric tournament id; the backend sends it as a number or a numeric string.
    pub fn id(&self) -> Option<i64> {
        match self.tournament_id.as_ref()? {
            Value::Number(number) => number.as_i64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }
}
