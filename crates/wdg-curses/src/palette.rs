//! Color pair table.

use wdg_common::{PairId, TerminalColor};

/// Foreground/background combinations indexed by [`PairId`].
///
/// Pair 0 is fixed to the terminal's default colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pairs: Vec<(TerminalColor, TerminalColor)>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            pairs: vec![(TerminalColor::Default, TerminalColor::Default)],
        }
    }

    /// Define (or redefine) a pair. Returns `false` for pair 0, which can not
    /// be changed.
    pub fn set(&mut self, pair: PairId, fg: TerminalColor, bg: TerminalColor) -> bool {
        if pair.is_default() {
            return false;
        }
        let index = pair.0 as usize;
        if index >= self.pairs.len() {
            self.pairs
                .resize(index + 1, (TerminalColor::Default, TerminalColor::Default));
        }
        self.pairs[index] = (fg, bg);
        true
    }

    /// Colors of a pair; undefined pairs fall back to the terminal defaults.
    pub fn get(&self, pair: PairId) -> (TerminalColor, TerminalColor) {
        self.pairs
            .get(pair.0 as usize)
            .copied()
            .unwrap_or((TerminalColor::Default, TerminalColor::Default))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
