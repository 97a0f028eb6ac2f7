//! Console snapshots for testing and the headless runner
//!
//! A snapshot captures the complete console state (cells, cursor, current
//! attribute) in a serializable form, so tests can compare states
//! deterministically and the runner can emit the final frame as JSON.

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::framebuffer::FrameBuffer;

/// A snapshot of the full console state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions
    pub cols: usize,
    pub rows: usize,
    /// Cell contents, row-major
    pub cells: Vec<Vec<CellSnapshot>>,
    /// Cursor state
    pub cursor: CursorSnapshot,
    /// Attribute applied to subsequent writes, as a raw byte
    pub attribute: u8,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub c: char,
    pub attr: u8,
}

/// Snapshot of the cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorSnapshot {
    pub col: usize,
    pub row: usize,
    pub wrap_pending: bool,
}

impl Snapshot {
    /// Capture the state of a console
    pub fn capture<B: FrameBuffer>(console: &Console<B>) -> Self {
        let cells = (0..console.height())
            .map(|row| {
                (0..console.width())
                    .map(|col| {
                        let cell = console.cell_at(col, row);
                        CellSnapshot {
                            c: cell.character(),
                            attr: cell.attr.byte(),
                        }
                    })
                    .collect()
            })
            .collect();

        let (col, row) = console.cursor();
        Snapshot {
            cols: console.width(),
            rows: console.height(),
            cells,
            cursor: CursorSnapshot {
                col,
                row,
                wrap_pending: console.wrap_pending(),
            },
            attribute: console.attribute().byte(),
        }
    }

    /// Text content of the whole screen, one line per row
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.c).collect();
                line.trim_end().to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Text content of one row, trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        match self.cells.get(row) {
            Some(cells) => {
                let line: String = cells.iter().map(|cell| cell.c).collect();
                line.trim_end().to_string()
            }
            None => String::new(),
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Text-only snapshot for golden comparisons
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSnapshot {
    pub rows: Vec<String>,
    pub cursor_col: usize,
    pub cursor_row: usize,
}

impl TextSnapshot {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        TextSnapshot {
            rows: (0..snapshot.rows).map(|r| snapshot.row_text(r)).collect(),
            cursor_col: snapshot.cursor.col,
            cursor_row: snapshot.cursor.row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::MemoryBuffer;

    #[test]
    fn test_snapshot_text() {
        let mut console = Console::new(MemoryBuffer::new(10, 3));
        console.write_str("Hello\nworld");
        let snapshot = console.snapshot();
        assert_eq!(snapshot.row_text(0), "Hello");
        assert_eq!(snapshot.row_text(1), "world");
        assert_eq!(snapshot.row_text(2), "");
        assert_eq!(snapshot.text(), "Hello\nworld\n");
    }

    #[test]
    fn test_snapshot_cursor() {
        let mut console = Console::new(MemoryBuffer::new(10, 3));
        console.write_str("ab");
        let snapshot = console.snapshot();
        assert_eq!(snapshot.cursor.col, 2);
        assert_eq!(snapshot.cursor.row, 0);
        assert!(!snapshot.cursor.wrap_pending);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut console = Console::new(MemoryBuffer::new(10, 3));
        console.write_str("A");
        let snapshot = console.snapshot();
        let restored = Snapshot::from_json(&snapshot.to_json()).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn test_text_snapshot() {
        let mut console = Console::new(MemoryBuffer::new(10, 3));
        console.write_str("one\ntwo");
        let text = TextSnapshot::from_snapshot(&console.snapshot());
        assert_eq!(text.rows, vec!["one", "two", ""]);
        assert_eq!(text.cursor_row, 1);
        assert_eq!(text.cursor_col, 3);
    }
}
