//! Slot vocabulary for decoded lineups.
//!
//! A slot key is `10 * role + position`, both taken from the leading digits
//! of a backend player id. The digit meanings below (role 1 defense family,
//! 2 special, 3 forwards; position 1 right, 2 center/defense, 3 left) come
//! from the backend contract and are not checked against the data.

use serde::Serialize;
use std::fmt;

/// Named slot within a line, one per key in the fixed render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LineSlot {
    DefenseRight,
    DefenseLeft,
    Center,
    RightWing,
    LeftWing,
    SpecialFirst,
    SpecialSecond,
}

impl LineSlot {
    /// Order in which slots are printed inside a line block.
    pub const RENDER_ORDER: [LineSlot; 7] = [
        LineSlot::DefenseRight,
        LineSlot::DefenseLeft,
        LineSlot::Center,
        LineSlot::RightWing,
        LineSlot::LeftWing,
        LineSlot::SpecialFirst,
        LineSlot::SpecialSecond,
    ];

    /// Numeric slot key as produced by the decoder.
    pub const fn key(self) -> u8 {
        match self {
            LineSlot::DefenseRight => 11,
            LineSlot::DefenseLeft => 12,
            LineSlot::Center => 32,
            LineSlot::RightWing => 31,
            LineSlot::LeftWing => 33,
            LineSlot::SpecialFirst => 21,
            LineSlot::SpecialSecond => 22,
        }
    }

    /// Maps a decoded slot key back to its slot, `None` for keys the
    /// renderer does not print.
    pub fn from_key(key: u8) -> Option<Self> {
        Self::RENDER_ORDER.into_iter().find(|slot| slot.key() == key)
    }
}

impl fmt::Display for LineSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineSlot::DefenseRight => "right defense",
            LineSlot::DefenseLeft => "left defense",
            LineSlot::Center => "center",
            LineSlot::RightWing => "right wing",
            LineSlot::LeftWing => "left wing",
            LineSlot::SpecialFirst => "special 1",
            LineSlot::SpecialSecond => "special 2",
        };
        f.write_str(name)
    }
}
