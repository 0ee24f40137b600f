//! The shared screen image and the refresh model.
//!
//! `refresh` works in two steps, like curses' `wnoutrefresh` + `doupdate`:
//! the touched lines of a surface are copied into the virtual screen, then
//! every virtual row that differs from what the terminal shows is sent to
//! the backend and the backend is flushed.

use tracing::trace;
use wdg_common::{CursesError, Geometry, PairId, TerminalColor};

use crate::backend::{Backend, MemoryBackend};
use crate::cell::Cell;
use crate::palette::Palette;
use crate::surface::Surface;

pub struct Screen {
    cols: usize,
    lines: usize,
    /// Staged contents, what the terminal should show after the next update.
    staged: Vec<Vec<Cell>>,
    /// What the terminal currently shows.
    shown: Vec<Vec<Cell>>,
    dirty: Vec<bool>,
    forced: Vec<bool>,
    palette: Palette,
    backend: Box<dyn Backend>,
    updates: usize,
}

impl Screen {
    /// Create a screen sized after the backend's terminal.
    pub fn new(backend: Box<dyn Backend>) -> Result<Self, CursesError> {
        let (cols, lines) = backend.size()?;
        Ok(Self::with_size(backend, cols, lines))
    }

    /// A screen backed by a [`MemoryBackend`].
    pub fn headless(cols: usize, lines: usize) -> Self {
        Self::with_size(Box::new(MemoryBackend::new(cols, lines)), cols, lines)
    }

    fn with_size(backend: Box<dyn Backend>, cols: usize, lines: usize) -> Self {
        Self {
            cols,
            lines,
            staged: Surface::blank_cells(cols, lines, Default::default()),
            shown: Surface::blank_cells(cols, lines, Default::default()),
            dirty: vec![false; lines],
            forced: vec![false; lines],
            palette: Palette::new(),
            backend,
            updates: 0,
        }
    }

    /// Screen size as (columns, lines).
    pub fn size(&self) -> (usize, usize) {
        (self.cols, self.lines)
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Define a color pair. Pair 0 can not be redefined.
    pub fn init_pair(&mut self, pair: PairId, fg: TerminalColor, bg: TerminalColor) -> bool {
        self.palette.set(pair, fg, bg)
    }

    // -- surfaces -----------------------------------------------------------

    pub fn check_fits(&self, geometry: Geometry) -> Result<(), CursesError> {
        if geometry.fits_within(self.cols, self.lines) {
            Ok(())
        } else {
            Err(CursesError::OutOfBounds {
                geometry,
                cols: self.cols,
                lines: self.lines,
            })
        }
    }

    /// Allocate a surface, failing when it does not fit on the screen.
    pub fn new_surface(&self, geometry: Geometry) -> Result<Surface, CursesError> {
        self.check_fits(geometry)?;
        Ok(Surface::new(geometry))
    }

    /// Move and resize a surface in one step. The target geometry is
    /// validated first; on error the surface is left untouched.
    pub fn reshape(&self, surface: &mut Surface, geometry: Geometry) -> Result<(), CursesError> {
        self.check_fits(geometry)?;
        surface.resize(geometry.cols, geometry.lines);
        surface.relocate(geometry.x, geometry.y);
        Ok(())
    }

    // -- refresh ------------------------------------------------------------

    /// Copy the touched lines of `surface` into the virtual screen and clear
    /// its change flags. Nothing is sent to the terminal yet.
    pub fn stage(&mut self, surface: &mut Surface) {
        let forced = surface.force_redraw;
        for row in 0..surface.lines {
            if !(forced || surface.touched[row]) {
                continue;
            }
            let y = surface.begin_y + row;
            if y >= self.lines {
                break;
            }
            let src = &surface.cells[row];
            let dst = &mut self.staged[y];
            for (col, cell) in src.iter().enumerate() {
                let x = surface.begin_x + col;
                if x >= self.cols {
                    break;
                }
                dst[x] = cell.clone();
            }
            self.dirty[y] = true;
            if forced {
                self.forced[y] = true;
            }
        }
        surface.untouch();
        surface.force_redraw = false;
    }

    /// Send every changed row to the backend and flush it.
    pub fn update(&mut self) -> Result<(), CursesError> {
        let mut sent = 0;
        for y in 0..self.lines {
            if !self.dirty[y] {
                continue;
            }
            if self.forced[y] || self.staged[y] != self.shown[y] {
                self.backend.draw_row(y, &self.staged[y], &self.palette)?;
                self.shown[y].clone_from(&self.staged[y]);
                sent += 1;
            }
            self.dirty[y] = false;
            self.forced[y] = false;
        }
        self.backend.flush()?;
        self.updates += 1;
        trace!(rows = sent, "screen updated");
        Ok(())
    }

    /// Stage `surface` and update the terminal.
    pub fn refresh(&mut self, surface: &mut Surface) -> Result<(), CursesError> {
        self.stage(surface);
        self.update()
    }

    /// Blank the terminal and forget what it shows; the next update resends
    /// every staged row.
    pub fn clear(&mut self) -> Result<(), CursesError> {
        self.backend.clear()?;
        self.shown = Surface::blank_cells(self.cols, self.lines, Default::default());
        self.dirty.fill(true);
        self.forced.fill(true);
        Ok(())
    }

    /// Adopt a new terminal size. Both screen images start over blank.
    pub fn resize(&mut self, cols: usize, lines: usize) -> Result<(), CursesError> {
        self.backend.resize(cols, lines)?;
        self.cols = cols;
        self.lines = lines;
        self.staged = Surface::blank_cells(cols, lines, Default::default());
        self.dirty = vec![false; lines];
        self.forced = vec![false; lines];
        self.clear()
    }

    // -- inspection ---------------------------------------------------------

    /// A cell as currently shown on the terminal.
    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.shown.get(row)?.get(col)
    }

    /// Text of a terminal row, trailing blanks removed.
    pub fn row_text(&self, row: usize) -> String {
        match self.shown.get(row) {
            Some(cells) => cells
                .iter()
                .filter(|cell| cell.width != 0)
                .map(|cell| cell.c)
                .collect::<String>()
                .trim_end()
                .to_string(),
            None => String::new(),
        }
    }

    /// Number of completed updates (terminal flushes).
    pub fn update_count(&self) -> usize {
        self.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellAttributes;

    #[test]
    fn headless_screen_has_backend_size() {
        let screen = Screen::headless(80, 24);
        assert_eq!(screen.size(), (80, 24));
        assert_eq!(screen.update_count(), 0);
    }

    #[test]
    fn new_uses_backend_size() {
        let screen = Screen::new(Box::new(MemoryBackend::new(40, 12))).unwrap();
        assert_eq!(screen.size(), (40, 12));
    }

    #[test]
    fn new_surface_rejects_out_of_bounds() {
        let screen = Screen::headless(80, 24);
        assert!(screen.new_surface(Geometry::new(0, 0, 80, 24)).is_ok());
        let err = screen.new_surface(Geometry::new(70, 0, 20, 10)).unwrap_err();
        assert!(matches!(err, CursesError::OutOfBounds { .. }));
    }

    #[test]
    fn refresh_makes_text_visible_at_the_origin() {
        let mut screen = Screen::headless(20, 5);
        let mut s = screen.new_surface(Geometry::new(3, 2, 10, 2)).unwrap();
        s.add_str("hello").unwrap();
        assert_eq!(screen.row_text(2), "");
        screen.refresh(&mut s).unwrap();
        assert_eq!(screen.row_text(2), "   hello");
        assert_eq!(screen.update_count(), 1);
        assert!(!s.any_touched());
    }

    #[test]
    fn untouched_lines_are_not_copied() {
        let mut screen = Screen::headless(10, 3);
        let mut s = screen.new_surface(Geometry::new(0, 0, 10, 3)).unwrap();
        screen.refresh(&mut s).unwrap();
        // Change a cell behind the surface's back: no touch, no copy.
        s.cells[1][0].c = 'Z';
        screen.refresh(&mut s).unwrap();
        assert_eq!(screen.row_text(1), "");
        s.touch();
        screen.refresh(&mut s).unwrap();
        assert_eq!(screen.row_text(1), "Z");
    }

    #[test]
    fn later_refresh_overlays_earlier_one() {
        let mut screen = Screen::headless(10, 3);
        let mut back = screen.new_surface(Geometry::new(0, 0, 10, 3)).unwrap();
        back.draw_box();
        let mut front = screen.new_surface(Geometry::new(1, 1, 8, 1)).unwrap();
        front.add_str("top").unwrap();
        screen.refresh(&mut back).unwrap();
        screen.refresh(&mut front).unwrap();
        assert_eq!(screen.row_text(0), "┌────────┐");
        assert_eq!(screen.row_text(1), "│top     │");
    }

    #[test]
    fn reshape_validates_before_changing() {
        let screen = Screen::headless(20, 10);
        let mut s = screen.new_surface(Geometry::new(0, 0, 5, 5)).unwrap();
        assert!(screen.reshape(&mut s, Geometry::new(18, 0, 5, 5)).is_err());
        assert_eq!(s.geometry(), Geometry::new(0, 0, 5, 5));
        screen.reshape(&mut s, Geometry::new(15, 5, 5, 5)).unwrap();
        assert_eq!(s.geometry(), Geometry::new(15, 5, 5, 5));
    }

    #[test]
    fn surfaces_are_clipped_to_the_screen() {
        let mut screen = Screen::headless(4, 2);
        let mut s = Surface::new(Geometry::new(2, 1, 4, 4));
        s.add_str("abcd").unwrap();
        screen.refresh(&mut s).unwrap();
        assert_eq!(screen.row_text(1), "  ab");
    }

    #[test]
    fn init_pair_reaches_the_palette() {
        let mut screen = Screen::headless(4, 2);
        assert!(screen.init_pair(PairId(2), TerminalColor::GREEN, TerminalColor::BLACK));
        assert_eq!(
            screen.palette().get(PairId(2)),
            (TerminalColor::GREEN, TerminalColor::BLACK)
        );
    }

    #[test]
    fn attributes_survive_refresh() {
        let mut screen = Screen::headless(4, 1);
        let mut s = screen.new_surface(Geometry::new(0, 0, 4, 1)).unwrap();
        s.set_background(PairId(5));
        s.add_str("x").unwrap();
        screen.refresh(&mut s).unwrap();
        assert_eq!(
            screen.cell(0, 0).unwrap().attrs,
            CellAttributes::with_pair(PairId(5))
        );
    }

    #[test]
    fn resize_blanks_both_images() {
        let mut screen = Screen::headless(10, 3);
        let mut s = screen.new_surface(Geometry::new(0, 0, 10, 3)).unwrap();
        s.add_str("gone").unwrap();
        screen.refresh(&mut s).unwrap();
        screen.resize(12, 4).unwrap();
        assert_eq!(screen.size(), (12, 4));
        assert_eq!(screen.row_text(0), "");
        assert!(screen.cell(3, 11).is_some());
    }

    #[test]
    fn growing_screen_draws_the_new_rows() {
        let mut screen = Screen::headless(10, 3);
        screen.resize(12, 5).unwrap();
        let mut s = screen.new_surface(Geometry::new(0, 0, 12, 5)).unwrap();
        s.mv_add_str(4, 0, "last").unwrap();
        screen.refresh(&mut s).unwrap();
        assert_eq!(screen.row_text(4), "last");
    }
}
