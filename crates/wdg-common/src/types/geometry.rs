use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin and extent of a rectangular area, in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub x: usize,
    pub y: usize,
    pub cols: usize,
    pub lines: usize,
}

impl Geometry {
    pub const fn new(x: usize, y: usize, cols: usize, lines: usize) -> Self {
        Self { x, y, cols, lines }
    }

    /// Last column covered by the area (equal to `x` for empty areas).
    pub fn right(&self) -> usize {
        self.x + self.cols.saturating_sub(1)
    }

    /// Last line covered by the area (equal to `y` for empty areas).
    pub fn bottom(&self) -> usize {
        self.y + self.lines.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.cols == 0 || self.lines == 0
    }

    /// The area shrunk by `n` cells on every side, or `None` when the extent
    /// is smaller than `2 * n` in either direction.
    pub fn inset(&self, n: usize) -> Option<Geometry> {
        Some(Geometry {
            x: self.x + n,
            y: self.y + n,
            cols: self.cols.checked_sub(2 * n)?,
            lines: self.lines.checked_sub(2 * n)?,
        })
    }

    /// Whether the area lies entirely inside a `cols` x `lines` screen.
    pub fn fits_within(&self, cols: usize, lines: usize) -> bool {
        self.x + self.cols <= cols && self.y + self.lines <= lines
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.cols, self.lines, self.x, self.y)
    }
}
