//! Backend writing escape sequences through crossterm.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::queue;
use wdg_common::TerminalColor;

use super::Backend;
use crate::cell::{Cell, CellAttributes};
use crate::palette::Palette;

/// Drives a real terminal. Raw mode and the alternate screen are the
/// caller's business.
pub struct CrosstermBackend<W: Write> {
    out: W,
}

impl<W: Write> CrosstermBackend<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn apply_style(&mut self, attrs: CellAttributes, palette: &Palette) -> io::Result<()> {
        let (fg, bg) = palette.get(attrs.pair);
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(to_crossterm(fg)),
            SetBackgroundColor(to_crossterm(bg)),
        )?;
        if attrs.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if attrs.dim {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if attrs.underline {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if attrs.reverse {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

fn to_crossterm(color: TerminalColor) -> Color {
    match color {
        TerminalColor::Default => Color::Reset,
        TerminalColor::Indexed(n) => Color::AnsiValue(n),
        TerminalColor::Rgb(r, g, b) => Color::Rgb { r, g, b },
    }
}

impl<W: Write> Backend for CrosstermBackend<W> {
    fn size(&self) -> io::Result<(usize, usize)> {
        let (cols, lines) = terminal::size()?;
        Ok((cols as usize, lines as usize))
    }

    fn draw_row(&mut self, row: usize, cells: &[Cell], palette: &Palette) -> io::Result<()> {
        let row = u16::try_from(row)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "row out of range"))?;
        queue!(self.out, MoveTo(0, row))?;

        let mut current: Option<CellAttributes> = None;
        for cell in cells.iter().filter(|cell| cell.width != 0) {
            if current != Some(cell.attrs) {
                self.apply_style(cell.attrs, palette)?;
                current = Some(cell.attrs);
            }
            queue!(self.out, Print(cell.c))?;
        }
        queue!(self.out, SetAttribute(Attribute::Reset))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            Clear(ClearType::All)
        )
    }

    // The terminal reports its own size; nothing to adjust.
    fn resize(&mut self, _cols: usize, _lines: usize) -> io::Result<()> {
        Ok(())
    }
}
