//! Change tracking consumed by `Screen::refresh`.

use super::core::Surface;

impl Surface {
    #[inline]
    pub(crate) fn mark_dirty(&mut self, row: usize) {
        if row < self.touched.len() {
            self.touched[row] = true;
        }
    }

    /// Mark every line as changed so the next refresh copies all of them.
    pub fn touch(&mut self) {
        for t in &mut self.touched {
            *t = true;
        }
    }

    pub fn untouch(&mut self) {
        for t in &mut self.touched {
            *t = false;
        }
    }

    /// Like [`touch`](Self::touch), but also makes the screen resend the
    /// covered rows even if it believes the terminal already shows them.
    pub fn redraw(&mut self) {
        self.touch();
        self.force_redraw = true;
    }

    pub fn is_touched(&self, row: usize) -> bool {
        self.touched.get(row).copied().unwrap_or(false)
    }

    pub fn any_touched(&self) -> bool {
        self.touched.iter().any(|&t| t)
    }

    pub fn is_forced(&self) -> bool {
        self.force_redraw
    }
}
