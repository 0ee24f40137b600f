//! Focus handling for the Dispatcher.

use tracing::debug;
use wdg_common::{Result, WidgetId};

use crate::widget::Widget;

use super::Dispatcher;

impl Dispatcher {
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Give the focus to `id`, taking it from the current holder first.
    pub fn focus(&mut self, id: WidgetId) -> Result<()> {
        self.object(id)?;

        if let Some(current) = self.focused.filter(|&c| c != id) {
            self.focused = None;
            self.with_object(current, |kind, core, ctx| kind.lost_focus(core, ctx))??;
        }

        self.focused = Some(id);
        debug!("{id}: focused");
        self.with_object(id, |kind, core, ctx| kind.get_focus(core, ctx))?
    }

    /// Focus the object created after the focused one, wrapping around.
    pub fn focus_next(&mut self) -> Result<()> {
        self.cycle_focus(1)
    }

    /// Focus the object created before the focused one, wrapping around.
    pub fn focus_prev(&mut self) -> Result<()> {
        self.cycle_focus(self.objects.len().saturating_sub(1))
    }

    fn cycle_focus(&mut self, step: usize) -> Result<()> {
        let len = self.objects.len();
        if len == 0 {
            return Ok(());
        }
        let current = self
            .focused
            .and_then(|id| self.objects.iter().position(|o| o.core.id == id));
        let next = match current {
            Some(index) => self.objects[(index + step) % len].core.id,
            None => self.objects[0].core.id,
        };
        if self.focused == Some(next) {
            return Ok(());
        }
        self.focus(next)
    }
}
