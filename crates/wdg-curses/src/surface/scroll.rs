//! Scrolling, moving and resizing.

use super::core::Surface;
use crate::cell::Cell;

impl Surface {
    /// Scroll the contents up by `count` lines, blanking the bottom lines.
    pub fn scroll_up(&mut self, count: usize) {
        if count == 0 || self.lines == 0 {
            return;
        }
        let count = count.min(self.lines);
        self.cells.drain(..count);
        let blanks = (0..count).map(|_| Self::blank_row(self.cols, self.background));
        self.cells.extend(blanks);
        self.touch();
    }

    /// Move the surface origin. Contents are preserved; bounds are checked
    /// by [`Screen::reshape`](crate::Screen::reshape).
    pub fn relocate(&mut self, x: usize, y: usize) {
        self.begin_x = x;
        self.begin_y = y;
        self.touch();
    }

    /// Change the extent, keeping the top-left contents. New cells are
    /// filled with the background.
    pub fn resize(&mut self, cols: usize, lines: usize) {
        for row in &mut self.cells {
            row.truncate(cols);
            while row.len() < cols {
                row.push(Cell::blank(self.background));
            }
        }
        if lines < self.cells.len() {
            self.cells.truncate(lines);
        } else {
            let extra = lines - self.cells.len();
            for _ in 0..extra {
                self.cells.push(Self::blank_row(cols, self.background));
            }
        }
        // A wide character cut in half by the new right edge becomes a blank.
        if let Some(last) = cols.checked_sub(1) {
            for row in &mut self.cells {
                if row[last].width == 2 {
                    row[last] = Cell::blank(self.background);
                }
            }
        }

        self.cols = cols;
        self.lines = lines;
        self.cursor.row = self.cursor.row.min(lines.saturating_sub(1));
        self.cursor.col = self.cursor.col.min(cols.saturating_sub(1));
        self.touched = vec![true; lines];
    }
}
