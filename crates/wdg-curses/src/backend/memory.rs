//! In-memory backend for headless use and tests.

use std::io;

use super::Backend;
use crate::cell::Cell;
use crate::palette::Palette;

/// Keeps the drawn rows in memory instead of writing to a terminal.
#[derive(Debug, Clone)]
pub struct MemoryBackend {
    cols: usize,
    lines: usize,
    rows: Vec<Vec<Cell>>,
    flushes: usize,
}

impl MemoryBackend {
    pub fn new(cols: usize, lines: usize) -> Self {
        Self {
            cols,
            lines,
            rows: vec![vec![Cell::default(); cols]; lines],
            flushes: 0,
        }
    }

    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl Backend for MemoryBackend {
    fn size(&self) -> io::Result<(usize, usize)> {
        Ok((self.cols, self.lines))
    }

    fn draw_row(&mut self, row: usize, cells: &[Cell], _palette: &Palette) -> io::Result<()> {
        let Some(target) = self.rows.get_mut(row) else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("row {row} is outside a {}-line terminal", self.lines),
            ));
        };
        for (dst, src) in target.iter_mut().zip(cells) {
            *dst = src.clone();
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        for row in &mut self.rows {
            row.fill(Cell::default());
        }
        Ok(())
    }

    fn resize(&mut self, cols: usize, lines: usize) -> io::Result<()> {
        self.cols = cols;
        self.lines = lines;
        self.rows = vec![vec![Cell::default(); cols]; lines];
        Ok(())
    }
}
