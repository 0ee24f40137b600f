//! Output backends: where the screen sends its changed rows.

mod memory;
mod term;

pub use memory::MemoryBackend;
pub use term::CrosstermBackend;

use std::io;

use crate::cell::Cell;
use crate::palette::Palette;

/// A physical (or simulated) terminal.
pub trait Backend {
    /// Terminal size as (columns, lines).
    fn size(&self) -> io::Result<(usize, usize)>;

    /// Replace the contents of screen row `row` with `cells`.
    fn draw_row(&mut self, row: usize, cells: &[Cell], palette: &Palette) -> io::Result<()>;

    /// Make everything drawn so far visible.
    fn flush(&mut self) -> io::Result<()>;

    /// Blank the whole terminal.
    fn clear(&mut self) -> io::Result<()>;

    /// The terminal is now `cols` x `lines`.
    fn resize(&mut self, cols: usize, lines: usize) -> io::Result<()>;
}
