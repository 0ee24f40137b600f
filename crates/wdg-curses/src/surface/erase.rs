//! Erasing and background handling.

use wdg_common::PairId;

use super::core::Surface;
use crate::cell::{Cell, CellAttributes};

impl Surface {
    /// Blank every cell with the background and home the cursor.
    pub fn erase(&mut self) {
        let blank = Cell::blank(self.background);
        for row in &mut self.cells {
            for cell in row.iter_mut() {
                *cell = blank.clone();
            }
        }
        self.cursor.row = 0;
        self.cursor.col = 0;
        self.touch();
    }

    /// Blank from the cursor to the end of its line.
    pub fn clear_to_eol(&mut self) {
        let row = self.cursor.row;
        if row >= self.lines {
            return;
        }
        let blank = Cell::blank(self.background);
        for c in self.cursor.col..self.cols {
            self.cells[row][c] = blank.clone();
        }
        self.mark_dirty(row);
    }

    /// Set the background pair used by subsequent output and erases,
    /// leaving existing cells alone.
    pub fn set_background(&mut self, pair: PairId) {
        self.background.pair = pair;
    }

    /// Set the background pair and recolor every cell that carries the
    /// previous background pair.
    pub fn apply_background(&mut self, pair: PairId) {
        let old = self.background.pair;
        for row in &mut self.cells {
            for cell in row.iter_mut().filter(|cell| cell.attrs.pair == old) {
                cell.attrs.pair = pair;
            }
        }
        self.background.pair = pair;
        self.touch();
    }

    pub fn set_background_attrs(&mut self, attrs: CellAttributes) {
        self.background = attrs;
    }
}
