use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// Roster entry for one player as delivered by the web API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub surname: String,
    pub jersey: Jersey,
}

/// Jersey numbers arrive either as strings or as bare numbers, floats included.
/// `null` matches neither.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum Jersey {
    Number(Number),
    Text(String),
}

impl fmt::Display for Jersey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jersey::Number(number) => write!(f, "{number}"),
            Jersey::Text(text) => f.write_str(text),
        }
    }
}

impl PlayerRecord {
    /// `"<name> <surname> (<jersey>)"`
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.name, self.surname, self.jersey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_player_record_with_string_jersey() {
        let player: PlayerRecord =
            serde_json::from_value(json!({"name": "Moritz", "surname": "Müller", "jersey": "91"}))
                .unwrap();

        assert_eq!(player.jersey, Jersey::Text("91".to_string()));
        assert_eq!(player.display_name(), "Moritz Müller (91)");
    }

    #[test]
    fn test_player_record_with_numeric_jersey() {
        let player: PlayerRecord =
            serde_json::from_value(json!({"name": "Leon", "surname": "Hüttl", "jersey": 6}))
                .unwrap();

        assert_eq!(player.jersey, Jersey::Number(Number::from(6)));
        assert_eq!(player.display_name(), "Leon Hüttl (6)");
    }

    #[test]
    fn test_player_record_ignores_extra_fields() {
        let player: PlayerRecord = serde_json::from_value(json!({
            "name": "Tom",
            "surname": "Kühnhackl",
            "jersey": "42",
            "position": "F",
            "nationality": "GER"
        }))
        .unwrap();

        assert_eq!(player.display_name(), "Tom Kühnhackl (42)");
    }

    #[test]
    fn test_player_record_requires_jersey() {
        let result = serde_json::from_value::<PlayerRecord>(json!({"name": "A", "surname": "B"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_player_record_with_float_jersey() {
        let player: PlayerRecord =
            serde_json::from_value(json!({"name": "A", "surname": "B", "jersey": 9.0})).unwrap();

        assert_eq!(player.display_name(), "A B (9.0)");
    }

    #[test]
    fn test_player_record_rejects_null_jersey() {
        let result =
            serde_json::from_value::<PlayerRecord>(json!({"name": "A", "surname": "B", "jersey": null}));
        assert!(result.is_err());
    }
}
