//! Core types: Attr, CellAttributes, Cell.

use wdg_common::PairId;

// ---------------------------------------------------------------------------
// Attr
// ---------------------------------------------------------------------------

/// A single video attribute that can be switched on or off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attr {
    Bold,
    Underline,
    Reverse,
    Dim,
}

// ---------------------------------------------------------------------------
// CellAttributes
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct CellAttributes {
    pub bold: bool,
    pub underline: bool,
    pub reverse: bool,
    pub dim: bool,
    pub pair: PairId,
}

impl CellAttributes {
    pub fn with_pair(pair: PairId) -> Self {
        Self {
            pair,
            ..Self::default()
        }
    }

    pub fn set(&mut self, attr: Attr, on: bool) {
        match attr {
            Attr::Bold => self.bold = on,
            Attr::Underline => self.underline = on,
            Attr::Reverse => self.reverse = on,
            Attr::Dim => self.dim = on,
        }
    }

    pub fn has(&self, attr: Attr) -> bool {
        match attr {
            Attr::Bold => self.bold,
            Attr::Underline => self.underline,
            Attr::Reverse => self.reverse,
            Attr::Dim => self.dim,
        }
    }

    /// Combine drawing attributes with a surface background: flags are
    /// or-ed, the background pair applies when no explicit pair is set.
    pub fn over(self, background: CellAttributes) -> CellAttributes {
        CellAttributes {
            bold: self.bold || background.bold,
            underline: self.underline || background.underline,
            reverse: self.reverse || background.reverse,
            dim: self.dim || background.dim,
            pair: if self.pair.is_default() {
                background.pair
            } else {
                self.pair
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub c: char,
    pub attrs: CellAttributes,
    /// 1 = normal, 2 = wide CJK, 0 = continuation of a wide char.
    pub width: u8,
}

impl Cell {
    pub fn blank(attrs: CellAttributes) -> Self {
        Self {
            c: ' ',
            attrs,
            width: 1,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(CellAttributes::default())
    }
}
