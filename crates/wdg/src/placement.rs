//! Object bounds relative to the screen edges.

use wdg_common::Geometry;

/// Bounds of a widget object.
///
/// Edge-relative bounds are resolved against the current screen size every
/// time they are read, which keeps objects attached to the edges across
/// terminal resizes. Fixed bounds resolve to the same geometry on any
/// screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// `x1`/`y1` are the top-left corner; negative values count back from
    /// the right or bottom edge. `x2`/`y2` are the exclusive bottom-right
    /// corner; values `<= 0` count back from the right or bottom edge, so
    /// `0` means the edge itself.
    Edges { x1: i32, y1: i32, x2: i32, y2: i32 },
    Fixed(Geometry),
}

impl Placement {
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Placement::Edges { x1, y1, x2, y2 }
    }

    /// The whole screen.
    pub const FULL: Placement = Placement::new(0, 0, 0, 0);

    /// Fixed bounds covering exactly `geometry`.
    pub fn absolute(geometry: Geometry) -> Self {
        Placement::Fixed(geometry)
    }

    /// Resolve against a `cols` x `lines` screen. An end before the start
    /// yields an empty extent.
    pub fn resolve(&self, cols: usize, lines: usize) -> Geometry {
        match *self {
            Placement::Edges { x1, y1, x2, y2 } => {
                let x = start(x1, cols);
                let y = start(y1, lines);
                let right = end(x2, cols);
                let bottom = end(y2, lines);
                Geometry::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
            }
            Placement::Fixed(geometry) => geometry,
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Placement::FULL
    }
}

fn start(v: i32, size: usize) -> usize {
    if v >= 0 {
        v as usize
    } else {
        size.saturating_sub(v.unsigned_abs() as usize)
    }
}

fn end(v: i32, size: usize) -> usize {
    if v > 0 {
        v as usize
    } else {
        size.saturating_sub(v.unsigned_abs() as usize)
    }
}
