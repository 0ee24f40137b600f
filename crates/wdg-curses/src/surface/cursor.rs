//! Cursor positioning.

use wdg_common::CursesError;

use super::core::Surface;

impl Surface {
    /// Move the cursor to (`row`, `col`) relative to the surface origin.
    pub fn move_cursor(&mut self, row: usize, col: usize) -> Result<(), CursesError> {
        if row >= self.lines || col >= self.cols {
            return Err(CursesError::CursorOutOfRange { row, col });
        }
        self.cursor.row = row;
        self.cursor.col = col;
        Ok(())
    }
}
