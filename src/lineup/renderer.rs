//! Fixed-order text rendering of a decoded lineup.

use super::decoder::LineupIndex;
use super::slot::LineSlot;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Block headings, by line number. Lines outside this table are never rendered.
pub const LINE_LABELS: [(u8, &str); 6] = [
    (0, "Goalies"),
    (1, "1. Reihe"),
    (2, "2. Reihe"),
    (3, "3. Reihe"),
    (4, "4. Reihe"),
    (5, "5. Reihe"),
];

/// One rendered line: heading plus players in slot order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineBlock {
    pub line_number: u8,
    pub label: &'static str,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedLineup {
    blocks: Vec<LineBlock>,
}

impl RenderedLineup {
    pub fn blocks(&self) -> &[LineBlock] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Full report: every block followed by an empty line.
    pub fn text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| format!("{}\n", block.text))
            .collect()
    }

    /// Blocks of lines 1-5 keyed `r1`..`r5`. The goalie block is left out.
    pub fn by_line(&self) -> BTreeMap<String, String> {
        self.blocks
            .iter()
            .filter(|block| block.line_number > 0)
            .map(|block| (format!("r{}", block.line_number), block.text.clone()))
            .collect()
    }
}

impl fmt::Display for RenderedLineup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Renders lines 0-5 in ascending order, skipping absent or empty lines.
pub fn render(index: &LineupIndex) -> RenderedLineup {
    let blocks = LINE_LABELS
        .iter()
        .filter_map(|&(line_number, label)| {
            let slots = index.line(line_number).filter(|slots| !slots.is_empty())?;
            Some(LineBlock {
                line_number,
                label,
                text: render_line(slots, label),
            })
        })
        .collect();

    RenderedLineup { blocks }
}

/// Renders a single line block. Slot keys without a [`LineSlot`] are ignored.
pub fn render_line(slots: &BTreeMap<u8, String>, label: &str) -> String {
    let mut text = format!("*{label}*\n");
    for slot in LineSlot::RENDER_ORDER {
        if let Some(player) = slots.get(&slot.key()) {
            text.push_str(player);
            text.push('\n');
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_from(entries: &[(u8, u8, &str)]) -> LineupIndex {
        let mut index = LineupIndex::new();
        for &(line, slot, name) in entries {
            index.insert(line, slot, name);
        }
        index
    }

    #[test]
    fn test_single_line_block() {
        let index = index_from(&[(1, 32, "C D (4)"), (1, 11, "A B (9)")]);
        let rendered = render(&index);

        assert_eq!(rendered.blocks().len(), 1);
        assert_eq!(rendered.blocks()[0].label, "1. Reihe");
        assert_eq!(rendered.blocks()[0].text, "*1. Reihe*\nA B (9)\nC D (4)\n");
        assert_eq!(rendered.text(), "*1. Reihe*\nA B (9)\nC D (4)\n\n");
    }

    #[test]
    fn test_slot_order_within_block() {
        let index = index_from(&[
            (2, 22, "s2"),
            (2, 21, "s1"),
            (2, 33, "lw"),
            (2, 31, "rw"),
            (2, 32, "c"),
            (2, 12, "ld"),
            (2, 11, "rd"),
        ]);

        let text = render_line(index.line(2).unwrap(), "2. Reihe");
        assert_eq!(text, "*2. Reihe*\nrd\nld\nc\nrw\nlw\ns1\ns2\n");
    }

    #[test]
    fn test_block_order_ascending() {
        let index = index_from(&[
            (5, 11, "e"),
            (3, 11, "c"),
            (0, 11, "g"),
            (1, 11, "a"),
        ]);

        let rendered = render(&index);
        let lines: Vec<u8> = rendered.blocks().iter().map(|b| b.line_number).collect();
        assert_eq!(lines, vec![0, 1, 3, 5]);
        assert!(rendered.text().starts_with("*Goalies*\ng\n\n*1. Reihe*"));
    }

    #[test]
    fn test_unknown_slots_and_lines_omitted() {
        let index = index_from(&[(1, 13, "hidden"), (1, 11, "shown"), (7, 11, "too deep")]);
        let rendered = render(&index);

        assert_eq!(rendered.blocks().len(), 1);
        assert!(!rendered.text().contains("hidden"));
        assert!(!rendered.text().contains("too deep"));
    }

    #[test]
    fn test_line_with_only_unknown_slots_keeps_heading() {
        let index = index_from(&[(4, 5, "role zero")]);
        let rendered = render(&index);
        assert_eq!(rendered.blocks()[0].text, "*4. Reihe*\n");
    }

    #[test]
    fn test_by_line_excludes_goalies() {
        let index = index_from(&[(0, 11, "g"), (1, 11, "a"), (4, 21, "d")]);
        let by_line = render(&index).by_line();

        assert_eq!(by_line.len(), 2);
        assert_eq!(by_line.get("r1").map(String::as_str), Some("*1. Reihe*\na\n"));
        assert_eq!(by_line.get("r4").map(String::as_str), Some("*4. Reihe*\nd\n"));
        assert!(!by_line.contains_key("r0"));
    }

    #[test]
    fn test_render_is_repeatable() {
        let index = index_from(&[(0, 12, "g2"), (0, 11, "g1"), (2, 32, "c")]);
        assert_eq!(render(&index), render(&index));
        assert_eq!(render(&index).to_string(), render(&index).text());
    }

    #[test]
    fn test_empty_index_renders_nothing() {
        let rendered = render(&LineupIndex::new());
        assert!(rendered.is_empty());
        assert_eq!(rendered.text(), "");
        assert!(rendered.by_line().is_empty());
    }
}
