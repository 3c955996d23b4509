use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `referees` object of a game header.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RefereeCrew {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_referee1: Option<Referee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub head_referee2: Option<Referee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_referee1: Option<Referee>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_referee2: Option<Referee>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Referee {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RefereeCrew {
    /// Head referees first, then linesmen; missing officials are skipped.
    pub fn names(&self) -> Vec<String> {
        [
            &self.head_referee1,
            &self.head_referee2,
            &self.line_referee1,
            &self.line_referee2,
        ]
        .into_iter()
        .flatten()
        .map(|referee| referee.name.clone())
        .collect()
    }
}
