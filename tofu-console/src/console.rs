//! Console output driver
//!
//! [`Console`] owns the cursor position, the current attribute, and the
//! frame buffer it renders into. It is the only writer of all three; callers
//! hold it by `&mut` and there is no interior mutability anywhere.
//!
//! Writing into the last column leaves the cursor on that column with a
//! wrap pending; the wrap (and any scroll it causes) happens when the next
//! printable character arrives. Filling the whole grid therefore touches
//! every cell exactly once without scrolling, and the character after that
//! causes exactly one scroll.

use crate::attribute::Attribute;
use crate::cell::Cell;
use crate::framebuffer::FrameBuffer;
use crate::snapshot::Snapshot;

/// Character-grid console driver over a frame buffer
#[derive(Debug, Clone)]
pub struct Console<B: FrameBuffer> {
    buffer: B,
    col: usize,
    row: usize,
    attr: Attribute,
    pending_wrap: bool,
}

impl<B: FrameBuffer> Console<B> {
    /// Create a driver over the given backing store
    ///
    /// The cursor starts at the origin with the default attribute; the
    /// buffer contents are left untouched until the first write or
    /// [`clear`](Self::clear).
    pub fn new(buffer: B) -> Self {
        Console {
            buffer,
            col: 0,
            row: 0,
            attr: Attribute::default(),
            pending_wrap: false,
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    /// Cursor position as `(col, row)`
    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }

    /// Whether a column wrap is pending from a write into the last column
    pub fn wrap_pending(&self) -> bool {
        self.pending_wrap
    }

    /// The attribute applied to subsequent writes
    pub fn attribute(&self) -> Attribute {
        self.attr
    }

    /// Set the attribute applied to subsequent writes
    ///
    /// Attributes already committed to cells are unaffected.
    pub fn set_attribute(&mut self, attr: Attribute) {
        self.attr = attr;
    }

    /// Move the cursor, clamping out-of-range coordinates into the grid
    pub fn set_cursor(&mut self, col: usize, row: usize) {
        self.col = col.min(self.buffer.width().saturating_sub(1));
        self.row = row.min(self.buffer.height().saturating_sub(1));
        self.pending_wrap = false;
    }

    /// Overwrite every cell with a blank in the current attribute and home
    /// the cursor
    pub fn clear(&mut self) {
        let blank = Cell::blank(self.attr).encode();
        for index in 0..self.buffer.width() * self.buffer.height() {
            self.buffer.store(index, blank);
        }
        self.col = 0;
        self.row = 0;
        self.pending_wrap = false;
    }

    /// Write one character at the cursor
    ///
    /// `\n` moves to column 0 of the next row, `\r` to column 0 of the same
    /// row, and backspace steps left and blanks that cell with the current
    /// attribute (a no-op at column 0). Anything else is rendered with the
    /// current attribute and advances the cursor.
    pub fn put_char(&mut self, c: char) {
        match c {
            '\n' => {
                self.pending_wrap = false;
                self.col = 0;
                self.linefeed();
            }
            '\r' => {
                self.pending_wrap = false;
                self.col = 0;
            }
            '\x08' => {
                self.pending_wrap = false;
                if self.col > 0 {
                    self.col -= 1;
                    let index = self.index(self.col, self.row);
                    self.buffer.store(index, Cell::blank(self.attr).encode());
                }
            }
            _ => {
                if self.pending_wrap {
                    self.pending_wrap = false;
                    self.col = 0;
                    self.linefeed();
                }
                let index = self.index(self.col, self.row);
                self.buffer.store(index, Cell::new(c, self.attr).encode());
                if self.col + 1 == self.buffer.width() {
                    self.pending_wrap = true;
                } else {
                    self.col += 1;
                }
            }
        }
    }

    /// Write a string character by character
    ///
    /// No atomicity beyond the per-character application.
    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.put_char(c);
        }
    }

    /// Write a string in a temporary attribute, restoring the previous one
    ///
    /// Single-threaded, so the swap-write-restore sequence cannot be
    /// observed in a partial state.
    pub fn write_colored(&mut self, s: &str, attr: Attribute) {
        let saved = self.attr;
        self.attr = attr;
        self.write_str(s);
        self.attr = saved;
    }

    /// Shift every row up by one
    ///
    /// Row 0 is discarded permanently; no scrollback is kept. The new
    /// bottom row is blanked with the current attribute.
    pub fn scroll_up(&mut self) {
        log::trace!("scrolling console up one row");
        let width = self.buffer.width();
        let height = self.buffer.height();
        for index in 0..(height - 1) * width {
            let word = self.buffer.load(index + width);
            self.buffer.store(index, word);
        }
        let blank = Cell::blank(self.attr).encode();
        for index in (height - 1) * width..height * width {
            self.buffer.store(index, blank);
        }
    }

    /// Read the cell at a grid position
    pub fn cell_at(&self, col: usize, row: usize) -> Cell {
        Cell::decode(self.buffer.load(self.index(col, row)))
    }

    /// Text content of one row, trailing blanks trimmed
    pub fn row_text(&self, row: usize) -> String {
        let line: String = (0..self.buffer.width())
            .map(|col| self.cell_at(col, row).character())
            .collect();
        line.trim_end().to_string()
    }

    /// Capture the full console state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }

    /// Borrow the backing store
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    /// Consume the driver and return the backing store
    pub fn into_buffer(self) -> B {
        self.buffer
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * self.buffer.width() + col
    }

    fn linefeed(&mut self) {
        if self.row + 1 == self.buffer.height() {
            self.scroll_up();
        } else {
            self.row += 1;
        }
    }
}
