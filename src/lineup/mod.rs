//! Lineup decoding and formatting.
//!
//! Roster payloads key every player by an id whose first three digits encode
//! role, line and position. [`decode`] groups one side's players by line and
//! slot, and [`render`] prints the lines in a fixed order. Both are pure.

pub mod decoder;
pub mod renderer;
pub mod slot;

pub use decoder::{LineupIndex, PlayerCode, decode};
pub use renderer::{LINE_LABELS, LineBlock, RenderedLineup, render, render_line};
pub use slot::LineSlot;

use crate::constants::roster;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Team side within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Visitor,
}

impl Side {
    pub fn from_home_match(home_match: bool) -> Self {
        if home_match { Side::Home } else { Side::Visitor }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Visitor => f.write_str("visitor"),
        }
    }
}

/// Top-level roster keys of the two sides, as named by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideKeys {
    #[serde(rename = "home_key", default = "default_home_key")]
    pub home: String,
    #[serde(rename = "visitor_key", default = "default_visitor_key")]
    pub visitor: String,
}

fn default_home_key() -> String {
    roster::HOME_KEY.to_string()
}

fn default_visitor_key() -> String {
    roster::VISITOR_KEY.to_string()
}

impl Default for SideKeys {
    fn default() -> Self {
        SideKeys {
            home: default_home_key(),
            visitor: default_visitor_key(),
        }
    }
}

impl SideKeys {
    pub fn key(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Visitor => &self.visitor,
        }
    }
}

/// Rendered lineup of one side together with the roster payload it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LineupReport {
    pub rendered: RenderedLineup,
    pub raw: Value,
}

impl LineupReport {
    pub fn text(&self) -> String {
        self.rendered.text()
    }
}
