//! Character output and text extraction.

use std::fmt;

use unicode_width::UnicodeWidthChar;
use wdg_common::CursesError;

use super::core::Surface;
use crate::cell::Cell;

const TAB_WIDTH: usize = 8;

impl Surface {
    /// Write a character at the cursor using the current attributes merged
    /// with the background, then advance the cursor.
    ///
    /// `\n` clears the rest of the line and moves to the next one, `\r`
    /// returns to column 0, `\t` advances to the next tab stop and other
    /// control characters are shown in caret notation. Output that runs
    /// past the last line scrolls when scrolling is enabled and fails with
    /// [`CursesError::NoScroll`] otherwise.
    pub fn put_char(&mut self, c: char) -> Result<(), CursesError> {
        if self.cols == 0 || self.lines == 0 {
            return Err(CursesError::CursorOutOfRange {
                row: self.cursor.row,
                col: self.cursor.col,
            });
        }

        match c {
            '\n' => {
                self.clear_to_eol();
                self.cursor.col = 0;
                self.advance_line()
            }
            '\r' => {
                self.cursor.col = 0;
                Ok(())
            }
            '\u{8}' => {
                self.cursor.col = self.cursor.col.saturating_sub(1);
                Ok(())
            }
            '\t' => {
                let stop = (self.cursor.col / TAB_WIDTH + 1) * TAB_WIDTH;
                let count = stop.min(self.cols) - self.cursor.col;
                for _ in 0..count.max(1) {
                    self.put_printable(' ', 1)?;
                }
                Ok(())
            }
            c if c.is_ascii_control() => {
                let shown = ((c as u8) ^ 0x40) as char;
                self.put_printable('^', 1)?;
                self.put_printable(shown, 1)
            }
            // C1 controls have no caret form.
            c if c.is_control() => self.put_printable(' ', 1),
            c => match c.width() {
                Some(0) | None => Ok(()),
                Some(w) => self.put_printable(c, w.min(2) as u8),
            },
        }
    }

    fn put_printable(&mut self, c: char, width: u8) -> Result<(), CursesError> {
        let width_cells = width as usize;

        // A wide character that does not fit on this line starts the next one.
        if self.cursor.col + width_cells > self.cols {
            if width_cells > self.cols {
                return Ok(());
            }
            self.cursor.col = 0;
            self.advance_line()?;
        }

        let attrs = self.attrs.over(self.background);
        let row = self.cursor.row;
        let col = self.cursor.col;
        self.cells[row][col] = Cell { c, attrs, width };
        if width == 2 {
            self.cells[row][col + 1] = Cell {
                c: ' ',
                attrs,
                width: 0,
            };
        }
        self.mark_dirty(row);

        self.cursor.col += width_cells;
        if self.cursor.col >= self.cols {
            if row + 1 < self.lines || self.scroll {
                self.cursor.col = 0;
                self.advance_line()?;
            } else {
                self.cursor.col = self.cols - 1;
                return Err(CursesError::NoScroll);
            }
        }
        Ok(())
    }

    /// Move the cursor to the start of the next line, scrolling if needed.
    fn advance_line(&mut self) -> Result<(), CursesError> {
        if self.cursor.row + 1 < self.lines {
            self.cursor.row += 1;
            Ok(())
        } else if self.scroll {
            self.scroll_up(1);
            Ok(())
        } else {
            Err(CursesError::NoScroll)
        }
    }

    /// Write a string starting at the cursor.
    pub fn add_str(&mut self, s: &str) -> Result<(), CursesError> {
        for c in s.chars() {
            self.put_char(c)?;
        }
        Ok(())
    }

    /// Write a string starting at (`row`, `col`).
    pub fn mv_add_str(&mut self, row: usize, col: usize, s: &str) -> Result<(), CursesError> {
        self.move_cursor(row, col)?;
        self.add_str(s)
    }

    /// Write pre-formatted arguments, as produced by `format_args!`.
    pub fn print_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), CursesError> {
        match args.as_str() {
            Some(s) => self.add_str(s),
            None => self.add_str(&args.to_string()),
        }
    }

    // -- text extraction ----------------------------------------------------

    /// Text content of a single line, trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        if row >= self.lines {
            return String::new();
        }
        self.cells[row]
            .iter()
            .filter(|cell| cell.width != 0)
            .map(|cell| cell.c)
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    /// All lines joined with newlines.
    pub fn content_to_string(&self) -> String {
        (0..self.lines)
            .map(|r| self.row_text(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Write for Surface {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.add_str(s).map_err(|_| fmt::Error)
    }
}
