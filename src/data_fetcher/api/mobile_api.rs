//! Request bodies for the mobile API.
//!
//! Every call is a form POST to one endpoint; the `requestName` field selects
//! the operation and `os` is always appended.

use crate::constants::{MOBILE_OS, request_names};

/// Ordered form fields of one mobile API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileRequest {
    fields: Vec<(&'static str, String)>,
}

impl MobileRequest {
    pub fn new(request_name: &str) -> Self {
        MobileRequest {
            fields: vec![("requestName", request_name.to_string())],
        }
    }

    pub fn field(mut self, name: &'static str, value: impl ToString) -> Self {
        self.fields.push((name, value.to_string()));
        self
    }

    pub fn request_name(&self) -> &str {
        self.get("requestName").unwrap_or_default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Final form body with the `os` field appended.
    pub fn into_form(mut self) -> Vec<(&'static str, String)> {
        self.fields.push(("os", MOBILE_OS.to_string()));
        self.fields
    }
}

pub fn games_request(device_id: &str, tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::GAMES)
        .field("deviceId", device_id)
        .field("tournamentId", tournament_id)
        .field("lastUpdate", 0)
}

pub fn game_results_request(game_id: u32, tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::GAME_RESULTS)
        .field("gameNumber", game_id)
        .field("tournamentId", tournament_id)
        .field("lastUpdate", 0)
}

pub fn game_situations_request(game_id: u32, tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::GAME_SITUATIONS)
        .field("gameNumber", game_id)
        .field("tournamentId", tournament_id)
        .field("lastUpdate", 0)
}

pub fn game_situations_extended_request(game_id: u32, tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::GAME_SITUATIONS_EXTENDED)
        .field("gameNumber", game_id)
        .field("tournamentId", tournament_id)
        .field("lastUpdate", 0)
}

/// `lastUpdate` is 1 here, unlike every other request.
pub fn my_team_request(device_id: &str, tournament_id: i64, team: &str) -> MobileRequest {
    MobileRequest::new(request_names::MY_TEAM)
        .field("deviceId", device_id)
        .field("tournamentId", tournament_id)
        .field("noc", team)
        .field("lastUpdate", 1)
}

pub fn team_members_request(team: &str, tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::TEAM_MEMBERS)
        .field("tournamentId", tournament_id)
        .field("noc", team)
        .field("lastUpdate", 0)
}

pub fn team_standings_request(tournament_id: i64) -> MobileRequest {
    MobileRequest::new(request_names::TEAM_STANDINGS)
        .field("tournamentId", tournament_id)
        .field("lastUpdate", 0)
}

pub fn tournament_list_request() -> MobileRequest {
    MobileRequest::new(request_names::TOURNAMENT_LIST).field("lastUpdate", 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_form_appends_os_last() {
        let form = tournament_list_request().into_form();
        assert_eq!(
            form,
            vec![
                ("requestName", "tournamentList".to_string()),
                ("lastUpdate", "0".to_string()),
                ("os", "android".to_string()),
            ]
        );
    }

    #[test]
    fn test_games_request_fields() {
        let request = games_request("bada55bada55666", 68);
        assert_eq!(request.request_name(), "games");
        assert_eq!(request.get("deviceId"), Some("bada55bada55666"));
        assert_eq!(request.get("tournamentId"), Some("68"));
        assert_eq!(request.get("lastUpdate"), Some("0"));
    }

    #[test]
    fn test_my_team_uses_last_update_one() {
        let request = my_team_request("dev", 68, "EHC");
        assert_eq!(request.get("noc"), Some("EHC"));
        assert_eq!(request.get("lastUpdate"), Some("1"));
    }

    #[test]
    fn test_game_requests_carry_game_number() {
        for request in [
            game_results_request(321, 68),
            game_situations_request(321, 68),
            game_situations_extended_request(321, 70),
        ] {
            assert_eq!(request.get("gameNumber"), Some("321"));
            assert!(request.get("tournamentId").is_some());
            assert!(request.get("deviceId").is_none());
        }
    }

    #[test]
    fn test_team_requests() {
        let members = team_members_request("KEC", 68);
        assert_eq!(members.request_name(), "teamMembers");
        assert_eq!(members.get("noc"), Some("KEC"));

        let standings = team_standings_request(68);
        assert_eq!(standings.request_name(), "teamStandings");
        assert_eq!(standings.get("tournamentId"), Some("68"));
    }
}
