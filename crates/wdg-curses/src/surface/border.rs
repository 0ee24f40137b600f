//! Box drawing.

use super::core::Surface;
use crate::cell::Cell;

/// Characters used for the sides and corners of a box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxChars {
    pub horizontal: char,
    pub vertical: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BoxChars {
    /// Unicode line-drawing characters.
    pub const LINE: BoxChars = BoxChars {
        horizontal: '─',
        vertical: '│',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Plain ASCII, for terminals without line-drawing glyphs.
    pub const ASCII: BoxChars = BoxChars {
        horizontal: '-',
        vertical: '|',
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
    };
}

impl Default for BoxChars {
    fn default() -> Self {
        Self::LINE
    }
}

impl Surface {
    /// Draw a box along the surface edges with line-drawing characters.
    pub fn draw_box(&mut self) {
        self.draw_border(&BoxChars::LINE);
    }

    /// Draw a box along the surface edges. The cursor does not move.
    pub fn draw_border(&mut self, chars: &BoxChars) {
        if self.cols == 0 || self.lines == 0 {
            return;
        }
        let attrs = self.attrs.over(self.background);
        let last_row = self.lines - 1;
        let last_col = self.cols - 1;

        for row in 0..self.lines {
            let edge_row = row == 0 || row == last_row;
            for col in 0..self.cols {
                let edge_col = col == 0 || col == last_col;
                let c = match (row, col) {
                    (0, 0) => chars.top_left,
                    (0, c) if c == last_col => chars.top_right,
                    (r, 0) if r == last_row => chars.bottom_left,
                    (r, c) if r == last_row && c == last_col => chars.bottom_right,
                    _ if edge_row => chars.horizontal,
                    _ if edge_col => chars.vertical,
                    _ => continue,
                };
                self.cells[row][col] = Cell { c, attrs, width: 1 };
            }
            self.mark_dirty(row);
        }
    }
}
