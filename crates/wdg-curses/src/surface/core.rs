//! Surface struct definition and construction helpers.

use wdg_common::Geometry;

use crate::cell::{Cell, CellAttributes};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

/// A rectangular character-cell buffer placed on the screen.
///
/// Coordinates passed to surface methods are relative to the surface's own
/// origin. Nothing becomes visible until the surface is handed to
/// [`Screen::refresh`](crate::Screen::refresh).
#[derive(Debug, Clone)]
pub struct Surface {
    pub(crate) begin_x: usize,
    pub(crate) begin_y: usize,
    pub(crate) cols: usize,
    pub(crate) lines: usize,
    pub(crate) cells: Vec<Vec<Cell>>,
    pub(crate) cursor: Cursor,
    /// Attributes applied to newly written characters.
    pub(crate) attrs: CellAttributes,
    /// Background attributes, merged into every written or erased cell.
    pub(crate) background: CellAttributes,
    /// Scroll the contents up instead of failing at the bottom line.
    pub(crate) scroll: bool,
    /// Per-line change flags, consumed by the screen on refresh.
    pub(crate) touched: Vec<bool>,
    /// Resend every line to the terminal on the next refresh.
    pub(crate) force_redraw: bool,
}

impl Surface {
    /// Allocate a blank surface. Bounds against the screen are checked by
    /// [`Screen::new_surface`](crate::Screen::new_surface).
    pub fn new(geometry: Geometry) -> Self {
        let background = CellAttributes::default();
        Self {
            begin_x: geometry.x,
            begin_y: geometry.y,
            cols: geometry.cols,
            lines: geometry.lines,
            cells: Self::blank_cells(geometry.cols, geometry.lines, background),
            cursor: Cursor::default(),
            attrs: CellAttributes::default(),
            background,
            scroll: false,
            touched: vec![true; geometry.lines],
            force_redraw: false,
        }
    }

    pub(crate) fn blank_cells(cols: usize, lines: usize, attrs: CellAttributes) -> Vec<Vec<Cell>> {
        (0..lines).map(|_| Self::blank_row(cols, attrs)).collect()
    }

    pub(crate) fn blank_row(cols: usize, attrs: CellAttributes) -> Vec<Cell> {
        (0..cols).map(|_| Cell::blank(attrs)).collect()
    }

    // -- geometry -----------------------------------------------------------

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.begin_x, self.begin_y, self.cols, self.lines)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    // -- state access -------------------------------------------------------

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn attrs(&self) -> CellAttributes {
        self.attrs
    }

    pub fn background(&self) -> CellAttributes {
        self.background
    }

    pub fn is_scroll(&self) -> bool {
        self.scroll
    }

    /// Enable or disable scrolling when output runs past the last line.
    pub fn set_scroll(&mut self, on: bool) {
        self.scroll = on;
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }
}
