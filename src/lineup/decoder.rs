//! Decodes one side of a roster payload into a [`LineupIndex`].

use super::slot::LineSlot;
use crate::data_fetcher::models::PlayerRecord;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Role, line and position digits carried by a backend player id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerCode {
    pub role: u8,
    pub line_number: u8,
    pub position: u8,
}

impl PlayerCode {
    /// Parses a player id token. The token must be all ASCII digits and at
    /// least three long; only the first three digits are used.
    pub fn parse(token: &str) -> Result<Self, AppError> {
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::lineup_decode(
                token,
                "player id contains non-digit characters",
            ));
        }

        let mut digits = token.bytes().map(|b| b - b'0');
        match (digits.next(), digits.next(), digits.next()) {
            (Some(role), Some(line_number), Some(position)) => Ok(PlayerCode {
                role,
                line_number,
                position,
            }),
            _ => Err(AppError::lineup_decode(
                token,
                "player id is shorter than 3 characters",
            )),
        }
    }

    pub fn slot_key(&self) -> u8 {
        10 * self.role + self.position
    }
}

/// Players of one side grouped by line number, then by slot key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineupIndex {
    lines: BTreeMap<u8, BTreeMap<u8, String>>,
}

impl LineupIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the player shown in `slot_key` of `line_number`.
    pub fn insert(&mut self, line_number: u8, slot_key: u8, display: impl Into<String>) {
        self.lines
            .entry(line_number)
            .or_default()
            .insert(slot_key, display.into());
    }

    pub fn line(&self, line_number: u8) -> Option<&BTreeMap<u8, String>> {
        self.lines.get(&line_number)
    }

    pub fn get(&self, line_number: u8, slot_key: u8) -> Option<&str> {
        self.lines
            .get(&line_number)
            .and_then(|slots| slots.get(&slot_key))
            .map(String::as_str)
    }

    /// Line numbers present, ascending.
    pub fn line_numbers(&self) -> impl Iterator<Item = u8> + '_ {
        self.lines.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of decoded players across all lines.
    pub fn player_count(&self) -> usize {
        self.lines.values().map(BTreeMap::len).sum()
    }

    /// Players of one line keyed by slot name. Slot keys without a
    /// [`LineSlot`] are left out.
    pub fn named_slots(&self, line_number: u8) -> BTreeMap<String, String> {
        self.line(line_number)
            .into_iter()
            .flatten()
            .filter_map(|(&key, player)| {
                LineSlot::from_key(key).map(|slot| (slot.to_string(), player.clone()))
            })
            .collect()
    }
}

/// Decodes the players stored under `side_key` of a roster payload.
///
/// # Errors
/// * `AppError::MalformedRoster` - the payload is not an object or the side
///   does not hold a player map
/// * `AppError::SideNotFound` - `side_key` is not a top-level key
/// * `AppError::LineupDecode` - a player id or player record is invalid
pub fn decode(raw: &Value, side_key: &str) -> Result<LineupIndex, AppError> {
    let sides = raw
        .as_object()
        .ok_or_else(|| AppError::malformed_roster("top-level value is not a JSON object"))?;
    let players = sides
        .get(side_key)
        .ok_or_else(|| AppError::side_not_found(side_key))?;

    let mut index = LineupIndex::new();
    match players {
        Value::Object(entries) => {
            for (token, record) in entries {
                let code = PlayerCode::parse(token)?;
                let player = PlayerRecord::deserialize(record).map_err(|e| {
                    AppError::lineup_decode(token.as_str(), format!("invalid player record: {e}"))
                })?;
                index.insert(code.line_number, code.slot_key(), player.display_name());
            }
        }
        // empty player maps arrive as []
        Value::Array(items) if items.is_empty() => {}
        other => {
            return Err(AppError::malformed_roster(format!(
                "side '{side_key}' holds {} instead of a player map",
                json_kind(other)
            )));
        }
    }

    debug!(
        "Decoded {} players on {} lines for side '{}'",
        index.player_count(),
        index.lines.len(),
        side_key
    );
    Ok(index)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a non-empty array",
        Value::Object(_) => "an object",
    }
}
